//! Extraction options.

/// Default number of focus changes allowed while absorbing a single line.
pub const DEFAULT_TRANSITION_LIMIT: usize = 16;

/// Options for building a document from a read file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum focus transitions per input line before extraction fails
    pub transition_limit: usize,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-line transition limit.
    pub fn with_transition_limit(mut self, limit: usize) -> Self {
        self.transition_limit = limit;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            transition_limit: DEFAULT_TRANSITION_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new().with_transition_limit(4);
        assert_eq!(options.transition_limit, 4);
    }

    #[test]
    fn test_parse_options_default() {
        assert_eq!(
            ParseOptions::default().transition_limit,
            DEFAULT_TRANSITION_LIMIT
        );
    }
}
