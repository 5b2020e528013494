//! Street splitting at the first Portuguese preposition.
//!
//! Spreadsheet addresses often append a description to the street name
//! ("Rua Sete de Setembro em frente ao mercado"). Everything from the first
//! whitespace-bounded preposition onward is moved to the `extra` field.

use super::patterns::PREPOSITION_BOUNDARY;

/// Prepositions and contractions that start descriptive text.
pub static PREPOSITIONS: &[&str] = &[
    "a", "ao", "aos", "ante", "ate", "até", "apos", "após", "com", "contra",
    "de", "da", "das", "do", "dos",
    "em", "entre", "para", "por", "perante", "sem", "sob", "sobre", "tras", "trás",
];

/// Street split into its canonical name and trailing description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetSplit {
    /// Text before the preposition, `None` if the street started with one.
    pub street: Option<String>,
    /// Text from the preposition onward, `None` if no preposition was found.
    pub extra: Option<String>,
}

/// Split `street` at the leftmost preposition.
///
/// The match is case-insensitive but the returned parts keep the original case.
pub fn split_street(street: &str) -> StreetSplit {
    let Some(boundary) = PREPOSITION_BOUNDARY
        .captures(street)
        .and_then(|caps| caps.get(1))
        .map(|m| m.start())
    else {
        return StreetSplit {
            street: Some(street.trim().to_string()).filter(|s| !s.is_empty()),
            extra: None,
        };
    };

    let (head, tail) = street.split_at(boundary);
    let head = head.trim();

    StreetSplit {
        street: (!head.is_empty()).then(|| head.to_string()),
        extra: Some(tail.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::apply_street_split;
    use crate::models::address::ParsedAddress;

    #[test]
    fn test_split_leftmost() {
        let split = split_street("Avenida das Nações Unidas");
        assert_eq!(split.street.as_deref(), Some("Avenida"));
        assert_eq!(split.extra.as_deref(), Some("das Nações Unidas"));
    }

    #[test]
    fn test_split_leftmost_wins_over_longer_token() {
        // "em" starts before "entre"
        let split = split_street("Travessa Dois em frente entre lojas");
        assert_eq!(split.street.as_deref(), Some("Travessa Dois"));
        assert_eq!(split.extra.as_deref(), Some("em frente entre lojas"));
    }

    #[test]
    fn test_split_keeps_original_case() {
        let split = split_street("Rua Barão COM Galeria");
        assert_eq!(split.street.as_deref(), Some("Rua Barão"));
        assert_eq!(split.extra.as_deref(), Some("COM Galeria"));
    }

    #[test]
    fn test_no_preposition() {
        let split = split_street("Avenida Paulista");
        assert_eq!(split.street.as_deref(), Some("Avenida Paulista"));
        assert_eq!(split.extra, None);
    }

    #[test]
    fn test_preposition_inside_word_is_ignored() {
        let split = split_street("Rua Comendador Araújo");
        assert_eq!(split.extra, None);

        let split = split_street("Rua Paraíso");
        assert_eq!(split.extra, None);
    }

    #[test]
    fn test_accented_preposition() {
        let split = split_street("Estrada Velha Até o Sítio");
        assert_eq!(split.street.as_deref(), Some("Estrada Velha"));
        assert_eq!(split.extra.as_deref(), Some("Até o Sítio"));
    }

    #[test]
    fn test_split_is_idempotent() {
        for input in [
            "Avenida das Nações Unidas",
            "Rua Sem Saída",
            "Alameda Santos",
            "a 200 metros da praça",
        ] {
            let mut address = ParsedAddress {
                street: Some(input.to_string()),
                ..Default::default()
            };

            apply_street_split(&mut address);
            let once = address.clone();
            apply_street_split(&mut address);

            assert_eq!(address, once, "splitting {:?} twice", input);
        }
    }

    #[test]
    fn test_leading_preposition_leaves_no_street() {
        let split = split_street("a 200 metros da praça");
        assert_eq!(split.street, None);
        assert_eq!(split.extra.as_deref(), Some("a 200 metros da praça"));
    }
}
