//! CEP (Brazilian postal code) extraction.

use super::patterns::POSTAL_CODE;
use super::{ExtractionMatch, FieldExtractor};

/// CEP field extractor.
pub struct PostalCodeExtractor;

impl PostalCodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PostalCodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PostalCodeExtractor {
    type Output = String;

    fn name(&self) -> &'static str {
        "postal_code"
    }

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let m = POSTAL_CODE.find(text)?;
        Some(ExtractionMatch::new(
            m.as_str().to_string(),
            self.name(),
            m.start(),
            m.end(),
        ))
    }
}

/// Extract the first CEP (`NNNNN-NNN`) from text.
pub fn extract_postal_code(text: &str) -> Option<String> {
    PostalCodeExtractor::new().extract(text).map(|m| m.value)
}

/// The 8 digits of a CEP, or `None` if it does not have exactly 8.
pub fn postal_code_digits(cep: &str) -> Option<String> {
    let digits: String = cep.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits.len() == 8).then_some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_postal_code() {
        assert_eq!(
            extract_postal_code("Rua A, 10 - Centro, Recife - PE, 50030-230, Brasil"),
            Some("50030-230".to_string())
        );
        assert_eq!(extract_postal_code("Rua A, 10, Recife"), None);
        assert_eq!(extract_postal_code("CEP 50030230"), None);
    }

    #[test]
    fn test_first_postal_code_wins() {
        assert_eq!(
            extract_postal_code("01001-000 ou 02002-000"),
            Some("01001-000".to_string())
        );
    }

    #[test]
    fn test_postal_code_digits() {
        assert_eq!(postal_code_digits("01001-000"), Some("01001000".to_string()));
        assert_eq!(postal_code_digits("01001000"), Some("01001000".to_string()));
        assert_eq!(postal_code_digits("1001-000"), None);
        assert_eq!(postal_code_digits("CEP não encontrado"), None);
    }
}
