//! Country extraction from the last comma-separated token.

use super::patterns::TRAILING_TOKEN;
use super::{non_empty, ExtractionMatch, FieldExtractor};

pub struct CountryExtractor;

impl CountryExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CountryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CountryExtractor {
    type Output = String;

    fn name(&self) -> &'static str {
        "country"
    }

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let caps = TRAILING_TOKEN.captures(text)?;
        let full_match = caps.get(0)?;

        Some(ExtractionMatch::new(
            non_empty(&caps[1])?,
            self.name(),
            full_match.start(),
            full_match.end(),
        ))
    }
}

/// Extract the trailing country token from text.
pub fn extract_country(text: &str) -> Option<String> {
    CountryExtractor::new().extract(text).map(|m| m.value)
}
