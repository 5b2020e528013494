//! Address data models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One row read from the address source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAddressRow {
    /// Zero-based row index in the source sheet.
    pub index: usize,
    /// Free-text address, `None` when the cell is empty.
    pub text: Option<String>,
}

impl RawAddressRow {
    pub fn new(index: usize, text: Option<String>) -> Self {
        Self { index, text }
    }
}

/// The eight components of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    Street,
    Number,
    Neighborhood,
    PostalCode,
    City,
    State,
    Country,
    Extra,
}

impl AddressField {
    /// All fields in output order.
    pub const ALL: [AddressField; 8] = [
        AddressField::Street,
        AddressField::Number,
        AddressField::Neighborhood,
        AddressField::PostalCode,
        AddressField::City,
        AddressField::State,
        AddressField::Country,
        AddressField::Extra,
    ];

    /// Fields the postal-code lookup can recover.
    pub const ENRICHABLE: [AddressField; 4] = [
        AddressField::Street,
        AddressField::Neighborhood,
        AddressField::City,
        AddressField::State,
    ];

    /// Sentinel written in place of a value that could not be resolved.
    pub fn placeholder(self) -> &'static str {
        match self {
            AddressField::Street => "Rua não encontrada",
            AddressField::Number => "Número não encontrado",
            AddressField::Neighborhood => "Bairro não encontrado",
            AddressField::PostalCode => "CEP não encontrado",
            AddressField::City => "Cidade não encontrada",
            AddressField::State => "Estado não encontrado",
            AddressField::Country => "País não encontrado",
            AddressField::Extra => "Extra não encontrado",
        }
    }

    /// Stable field name used in output records.
    pub fn name(self) -> &'static str {
        match self {
            AddressField::Street => "street",
            AddressField::Number => "number",
            AddressField::Neighborhood => "neighborhood",
            AddressField::PostalCode => "postalCode",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::Country => "country",
            AddressField::Extra => "extra",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An address decomposed into its components.
///
/// A `None` field was not resolved by extraction, splitting or enrichment.
/// Use [`ParsedAddress::to_record`] to get the placeholder-filled output shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAddress {
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub extra: Option<String>,
}

impl ParsedAddress {
    /// Get a field value.
    pub fn get(&self, field: AddressField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Whether a field holds a resolved value.
    pub fn is_resolved(&self, field: AddressField) -> bool {
        self.get(field).is_some()
    }

    /// Fields that are still unresolved.
    pub fn missing_fields(&self) -> Vec<AddressField> {
        AddressField::ALL
            .into_iter()
            .filter(|f| !self.is_resolved(*f))
            .collect()
    }

    /// Whether any field the lookup can recover is still unresolved.
    pub fn needs_enrichment(&self) -> bool {
        AddressField::ENRICHABLE
            .iter()
            .any(|f| !self.is_resolved(*f))
    }

    /// Set a field only if it is unresolved. Returns true when the value was taken.
    pub fn fill(&mut self, field: AddressField, value: Option<String>) -> bool {
        let slot = self.slot_mut(field);
        match (slot.is_none(), value) {
            (true, Some(value)) => {
                *slot = Some(value);
                true
            }
            _ => false,
        }
    }

    /// Output record with placeholders for unresolved fields.
    pub fn to_record(&self) -> AddressRecord {
        let value = |field: AddressField| {
            self.get(field)
                .unwrap_or_else(|| field.placeholder())
                .to_string()
        };

        AddressRecord {
            street: value(AddressField::Street),
            number: value(AddressField::Number),
            neighborhood: value(AddressField::Neighborhood),
            postal_code: value(AddressField::PostalCode),
            city: value(AddressField::City),
            state: value(AddressField::State),
            country: value(AddressField::Country),
            extra: value(AddressField::Extra),
        }
    }

    fn slot(&self, field: AddressField) -> &Option<String> {
        match field {
            AddressField::Street => &self.street,
            AddressField::Number => &self.number,
            AddressField::Neighborhood => &self.neighborhood,
            AddressField::PostalCode => &self.postal_code,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Country => &self.country,
            AddressField::Extra => &self.extra,
        }
    }

    fn slot_mut(&mut self, field: AddressField) -> &mut Option<String> {
        match field {
            AddressField::Street => &mut self.street,
            AddressField::Number => &mut self.number,
            AddressField::Neighborhood => &mut self.neighborhood,
            AddressField::PostalCode => &mut self.postal_code,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::Country => &mut self.country,
            AddressField::Extra => &mut self.extra,
        }
    }
}

/// Fixed-shape output record. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub postal_code: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub extra: String,
}

impl AddressRecord {
    /// Column names in output order.
    pub fn headers() -> [&'static str; 8] {
        AddressField::ALL.map(AddressField::name)
    }

    /// Values in output order.
    pub fn values(&self) -> [&str; 8] {
        [
            self.street.as_str(),
            self.number.as_str(),
            self.neighborhood.as_str(),
            self.postal_code.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.country.as_str(),
            self.extra.as_str(),
        ]
    }
}

/// Address data returned by a postal-code lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    /// Canonical state name (already expanded from the 2-letter code).
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_uses_placeholders() {
        let address = ParsedAddress {
            street: Some("Rua Augusta".to_string()),
            postal_code: Some("01305-000".to_string()),
            ..Default::default()
        };

        let record = address.to_record();
        assert_eq!(record.street, "Rua Augusta");
        assert_eq!(record.number, "Número não encontrado");
        assert_eq!(record.neighborhood, "Bairro não encontrado");
        assert_eq!(record.postal_code, "01305-000");
        assert_eq!(record.extra, "Extra não encontrado");
    }

    #[test]
    fn test_record_field_names() {
        let record = ParsedAddress::default().to_record();
        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        for name in AddressRecord::headers() {
            assert!(keys.contains(&name), "missing key {}", name);
        }
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_fill_keeps_resolved_values() {
        let mut address = ParsedAddress {
            city: Some("Campinas".to_string()),
            ..Default::default()
        };

        assert!(!address.fill(AddressField::City, Some("São Paulo".to_string())));
        assert!(address.fill(AddressField::State, Some("São Paulo".to_string())));
        assert!(!address.fill(AddressField::Street, None));

        assert_eq!(address.city.as_deref(), Some("Campinas"));
        assert_eq!(address.state.as_deref(), Some("São Paulo"));
    }

    #[test]
    fn test_needs_enrichment() {
        let mut address = ParsedAddress {
            street: Some("Rua A".to_string()),
            neighborhood: Some("Centro".to_string()),
            city: Some("Recife".to_string()),
            ..Default::default()
        };
        assert!(address.needs_enrichment());

        address.state = Some("Pernambuco".to_string());
        // number, country and extra are not recoverable by lookup
        assert!(!address.needs_enrichment());
    }
}
