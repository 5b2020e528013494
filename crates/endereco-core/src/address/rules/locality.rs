//! Neighborhood, city and state (UF) extraction.

use super::patterns::{CITY_STATE_BEFORE_CEP, NEIGHBORHOOD_CITY_STATE};
use super::{non_empty, ExtractionMatch, FieldExtractor};

/// Neighborhood, city and raw UF code found in an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locality {
    pub neighborhood: Option<String>,
    pub city: String,
    /// Two-letter code as written in the text.
    pub state_code: String,
}

/// Extracts `"- <neighborhood>, <city> - <UF>,"`, falling back to
/// `"<city> - <UF>"` right before the CEP.
pub struct LocalityExtractor;

impl LocalityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Search for the full pattern starting at byte `start`, then for the
    /// reduced pattern anywhere in the text.
    pub fn extract_from(&self, text: &str, start: usize) -> Option<ExtractionMatch<Locality>> {
        let tail = text.get(start..).unwrap_or("");

        self.with_neighborhood(tail)
            .map(|m| m.offset_by(start))
            .or_else(|| self.before_postal_code(text))
    }

    fn with_neighborhood(&self, text: &str) -> Option<ExtractionMatch<Locality>> {
        let caps = NEIGHBORHOOD_CITY_STATE.captures(text)?;
        let full_match = caps.get(0)?;

        Some(ExtractionMatch::new(
            Locality {
                neighborhood: non_empty(&caps[1]),
                city: non_empty(&caps[2])?,
                state_code: caps[3].to_string(),
            },
            "neighborhood_city_state",
            full_match.start(),
            full_match.end(),
        ))
    }

    fn before_postal_code(&self, text: &str) -> Option<ExtractionMatch<Locality>> {
        let caps = CITY_STATE_BEFORE_CEP.captures(text)?;
        let full_match = caps.get(0)?;

        Some(ExtractionMatch::new(
            Locality {
                neighborhood: None,
                city: non_empty(&caps[1])?,
                state_code: caps[2].to_string(),
            },
            "city_state_before_cep",
            full_match.start(),
            full_match.end(),
        ))
    }
}

impl Default for LocalityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LocalityExtractor {
    type Output = Locality;

    fn name(&self) -> &'static str {
        "locality"
    }

    fn extract(&self, text: &str) -> Option<ExtractionMatch<Locality>> {
        self.extract_from(text, 0)
    }
}

/// Extract neighborhood, city and UF from text.
pub fn extract_locality(text: &str) -> Option<Locality> {
    LocalityExtractor::new().extract(text).map(|m| m.value)
}
