/// Free-text filter matched against a row's designated text field.
///
/// Matching is a case-insensitive substring test on the trimmed query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    raw: String,
    needle: String,
}

impl FilterQuery {
    pub fn new(text: &str) -> Self {
        Self {
            raw: text.to_string(),
            needle: text.trim().to_lowercase(),
        }
    }

    /// Text as typed by the user
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// An empty query matches everything; a missing field never matches a
    /// non-empty query.
    pub fn matches(&self, text: Option<&str>) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        text.is_some_and(|t| t.to_lowercase().contains(&self.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_trimmed() {
        let q = FilterQuery::new("  AN ");
        assert!(q.matches(Some("Banana")));
        assert!(!q.matches(Some("Apple")));
        assert_eq!(q.as_str(), "  AN ");
    }

    #[test]
    fn test_empty_and_missing() {
        assert!(FilterQuery::new("   ").is_empty());
        assert!(FilterQuery::new("").matches(None));
        assert!(!FilterQuery::new("a").matches(None));
    }
}
