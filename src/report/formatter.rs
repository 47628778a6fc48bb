// Mon Oct 19 2026 - Alex

use crate::config::OutputFormat;
use crate::error::Result;
use crate::report::ReportEntry;
use std::io::Write;

pub struct ReportWriter {
    format: OutputFormat,
    pretty: bool,
}

impl ReportWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write<W: Write>(&self, out: &mut W, entries: &[ReportEntry]) -> Result<()> {
        match self.format {
            OutputFormat::Tsv => {
                for entry in entries {
                    writeln!(out, "{}\t{}", entry.path, entry.declared_name)?;
                }
            }
            OutputFormat::Json => {
                let json = if self.pretty {
                    serde_json::to_string_pretty(entries)
                } else {
                    serde_json::to_string(entries)
                }
                .map_err(std::io::Error::from)?;
                writeln!(out, "{}", json)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn render(&self, entries: &[ReportEntry]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(&mut buffer, entries)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
