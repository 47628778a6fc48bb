// Mon Oct 19 2026 - Alex

pub const TOKEN_MARKER: char = '@';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathToken {
    Rpath,
    LoaderPath,
    ExecutablePath,
    Unknown,
}

impl PathToken {
    /// Classifies the first segment of a reference, `None` for plain path segments.
    pub fn parse(segment: &str) -> Option<Self> {
        if !segment.starts_with(TOKEN_MARKER) {
            return None;
        }
        Some(match segment {
            "@rpath" => PathToken::Rpath,
            "@loader_path" => PathToken::LoaderPath,
            "@executable_path" => PathToken::ExecutablePath,
            _ => PathToken::Unknown,
        })
    }
}

pub fn is_symbolic(path: &str) -> bool {
    path.starts_with(TOKEN_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(PathToken::parse("@rpath"), Some(PathToken::Rpath));
        assert_eq!(PathToken::parse("@loader_path"), Some(PathToken::LoaderPath));
        assert_eq!(PathToken::parse("@executable_path"), Some(PathToken::ExecutablePath));
        assert_eq!(PathToken::parse("@weird"), Some(PathToken::Unknown));
        assert_eq!(PathToken::parse(""), None);
        assert_eq!(PathToken::parse("usr"), None);
    }
}
