//! Street name and house number extraction.

use super::patterns::{STREET_NUMBER, STREET_ONLY};
use super::{non_empty, ExtractionMatch, FieldExtractor};

/// Street name with an optional house number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetNumber {
    pub street: String,
    pub number: Option<String>,
}

/// Extracts the leading `"<street>, <number>"` part of an address.
pub struct StreetNumberExtractor;

impl StreetNumberExtractor {
    pub fn new() -> Self {
        Self
    }

    fn street_only(&self, text: &str) -> Option<ExtractionMatch<StreetNumber>> {
        let caps = STREET_ONLY.captures(text)?;
        let street = non_empty(&caps[1])?;
        let full_match = caps.get(0)?;

        Some(ExtractionMatch::new(
            StreetNumber { street, number: None },
            "street_only",
            full_match.start(),
            full_match.end(),
        ))
    }
}

impl Default for StreetNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for StreetNumberExtractor {
    type Output = StreetNumber;

    fn name(&self) -> &'static str {
        "street_number"
    }

    fn extract(&self, text: &str) -> Option<ExtractionMatch<StreetNumber>> {
        let caps = STREET_NUMBER.captures(text)?;

        // No number after the comma: retry as a street-only match
        let Some(number) = caps.get(2).and_then(|m| non_empty(m.as_str())) else {
            return self.street_only(text);
        };

        let street = non_empty(&caps[1])?;
        let full_match = caps.get(0)?;

        Some(ExtractionMatch::new(
            StreetNumber {
                street,
                number: Some(number),
            },
            self.name(),
            full_match.start(),
            full_match.end(),
        ))
    }
}

/// Extract street and number from text.
pub fn extract_street_number(text: &str) -> Option<StreetNumber> {
    StreetNumberExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_with_number() {
        let m = StreetNumberExtractor::new()
            .extract("Rua Augusta, 1500 - Consolação, São Paulo - SP, 01304-001, Brasil")
            .unwrap();

        assert_eq!(m.value.street, "Rua Augusta");
        assert_eq!(m.value.number.as_deref(), Some("1500"));
        assert_eq!(m.position, (0, 17));
    }

    #[test]
    fn test_number_with_dash() {
        let sn = extract_street_number("Estrada do Campo, 12-A").unwrap();
        assert_eq!(sn.number.as_deref(), Some("12-"));
    }

    #[test]
    fn test_street_without_number() {
        let sn = extract_street_number("Avenida Brasil , Centro, Rio de Janeiro - RJ").unwrap();
        assert_eq!(sn.street, "Avenida Brasil");
        assert_eq!(sn.number, None);
    }

    #[test]
    fn test_no_comma() {
        assert_eq!(extract_street_number("Rua sem vírgula nenhuma"), None);
    }
}
