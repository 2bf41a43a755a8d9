//! Text matching utilities for AST assertions

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Assert that the actual text matches this pattern
    pub fn assert(&self, actual: &str, context: &str) {
        match self {
            TextMatch::Exact(expected) => {
                assert_eq!(
                    actual, expected,
                    "{}: Expected text to be {:?}, but got {:?}",
                    context, expected, actual
                );
            }
            TextMatch::StartsWith(prefix) => {
                assert!(
                    actual.starts_with(prefix),
                    "{}: Expected text to start with {:?}, but got {:?}",
                    context,
                    prefix,
                    actual
                );
            }
            TextMatch::Contains(substring) => {
                assert!(
                    actual.contains(substring),
                    "{}: Expected text to contain {:?}, but got {:?}",
                    context,
                    substring,
                    actual
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(TextMatch::Exact(" Aaa".to_string()).matches(" Aaa"));
        assert!(!TextMatch::Exact("Aaa".to_string()).matches(" Aaa"));
        assert!(TextMatch::StartsWith(" A".to_string()).matches(" Aaa"));
        assert!(TextMatch::Contains("aa".to_string()).matches(" Aaa"));
    }

    #[test]
    #[should_panic(expected = "blocks[0]: Expected text to be \"Bbb\", but got \"Aaa\"")]
    fn test_assert_reports_context() {
        TextMatch::Exact("Bbb".to_string()).assert("Aaa", "blocks[0]");
    }
}
