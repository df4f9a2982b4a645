use std::fmt;

/// Structured search query that renders to the Lucene syntax understood by
/// the search endpoint, e.g. `artist:Nirvana AND country:US`.
#[derive(Debug, Clone, Default)]
pub struct QueryParameters {
    terms: Vec<(String, String)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `field:value` term.
    pub fn add(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.terms.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, value) in &self.terms {
            if !first {
                f.write_str(" AND ")?;
            }
            first = false;

            let quoted = value.starts_with('"') && value.ends_with('"') && value.len() > 1;
            if !quoted && value.contains(char::is_whitespace) {
                write!(f, "{field}:\"{value}\"")?;
            } else {
                write!(f, "{field}:{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_term() {
        let query = QueryParameters::new().add("artist", "Nirvana");
        assert_eq!(query.to_string(), "artist:Nirvana");
    }

    #[test]
    fn test_terms_joined_with_and() {
        let query = QueryParameters::new()
            .add("artist", "Nirvana")
            .add("country", "US");
        assert_eq!(query.to_string(), "artist:Nirvana AND country:US");
    }

    #[test]
    fn test_multi_word_value_is_quoted() {
        let query = QueryParameters::new().add("artist", "Foo Fighters");
        assert_eq!(query.to_string(), "artist:\"Foo Fighters\"");
    }

    #[test]
    fn test_already_quoted_value_passes_through() {
        let query = QueryParameters::new().add("artist", "\"Foo Fighters\"");
        assert_eq!(query.to_string(), "artist:\"Foo Fighters\"");
    }

    #[test]
    fn test_empty_query_renders_empty() {
        let query = QueryParameters::new();
        assert!(query.is_empty());
        assert_eq!(query.to_string(), "");
    }
}
