//! Writing processed addresses as JSON or CSV.

use std::io::Write;

use crate::error::{EnderecoError, Result};
use crate::models::address::AddressRecord;

/// Serialize records as a JSON array.
pub fn to_json(records: &[AddressRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Write records as CSV with a header row.
pub fn write_csv<W: Write>(writer: W, records: &[AddressRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(AddressRecord::headers())?;
    for record in records {
        wtr.write_record(record.values())?;
    }

    wtr.flush()?;
    Ok(())
}

/// Serialize records as CSV.
pub fn to_csv(records: &[AddressRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    String::from_utf8(buffer).map_err(|e| EnderecoError::Io(std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::address::ParsedAddress;

    fn records() -> Vec<AddressRecord> {
        vec![
            ParsedAddress {
                street: Some("Rua Augusta".to_string()),
                number: Some("1500".to_string()),
                city: Some("São Paulo".to_string()),
                ..Default::default()
            }
            .to_record(),
            ParsedAddress::default().to_record(),
        ]
    }

    #[test]
    fn test_json_output_shape() {
        let json = to_json(&records(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["street"], "Rua Augusta");
        assert_eq!(value[0]["postalCode"], "CEP não encontrado");
        assert_eq!(value[1]["extra"], "Extra não encontrado");
    }

    #[test]
    fn test_json_round_trip() {
        let json = to_json(&records(), false).unwrap();
        let back: Vec<AddressRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, records());
    }

    #[test]
    fn test_csv_output() {
        let csv = to_csv(&records()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("street,number,neighborhood,postalCode,city,state,country,extra")
        );
        assert!(lines.next().unwrap().starts_with("Rua Augusta,1500,Bairro não encontrado"));
        assert_eq!(lines.count(), 1);
    }
}
