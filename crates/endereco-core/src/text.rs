//! Text normalization applied before extraction.

use std::borrow::Cow;

/// Repair UTF-8 text that was decoded as Latin-1 ("SÃ£o Paulo" → "São Paulo").
///
/// Text is returned unchanged when it contains characters outside Latin-1 or
/// when its bytes do not form valid UTF-8.
pub fn repair_encoding(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    let bytes: Option<Vec<u8>> = text
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect();

    match bytes.map(String::from_utf8) {
        Some(Ok(repaired)) if repaired != text => Cow::Owned(repaired),
        _ => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_mojibake() {
        assert_eq!(repair_encoding("SÃ£o Paulo"), "São Paulo");
        assert_eq!(repair_encoding("ConsolaÃ§Ã£o"), "Consolação");
    }

    #[test]
    fn test_keeps_correct_text() {
        // a lone Latin-1 byte is not valid UTF-8
        assert_eq!(repair_encoding("São Paulo"), "São Paulo");
        assert!(matches!(repair_encoding("Rua A, 10"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_keeps_text_outside_latin1() {
        assert_eq!(repair_encoding("Rua “A”, 10"), "Rua “A”, 10");
    }
}
