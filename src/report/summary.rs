// Mon Oct 19 2026 - Alex

use crate::graph::DependencyGraph;
use crate::report::ReportEntry;
use colored::Colorize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphSummary {
    pub entries: usize,
    pub nodes: usize,
    pub concrete: usize,
    pub symbolic: usize,
    pub reported: usize,
}

impl GraphSummary {
    pub fn new(graph: &DependencyGraph, report: &[ReportEntry]) -> Self {
        let symbolic = graph.symbolic_count();
        Self {
            entries: graph.entries().len(),
            nodes: graph.len(),
            concrete: graph.len() - symbolic,
            symbolic,
            reported: report.len(),
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} libraries reachable from {} binaries",
            "[+]".green(),
            self.nodes,
            self.entries
        )?;
        if self.symbolic > 0 {
            writeln!(
                f,
                "{} {} references left unresolved",
                "[!]".yellow(),
                self.symbolic
            )?;
        }
        write!(f, "{} {} libraries to bundle", "[+]".green(), self.reported)
    }
}
