//! Common regex patterns for Brazilian address extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::prepositions::PREPOSITIONS;

lazy_static! {
    // "<street>, <number>" at the start of the text
    pub static ref STREET_NUMBER: Regex = Regex::new(
        r"^(.+?),\s*([\d-]+)?"
    ).unwrap();

    // Street only, up to the first comma
    pub static ref STREET_ONLY: Regex = Regex::new(
        r"^(.+?)\s*,"
    ).unwrap();

    // "- <neighborhood>, <city> - <UF>,"
    pub static ref NEIGHBORHOOD_CITY_STATE: Regex = Regex::new(
        r"-\s*(.+?),\s*([^,]+)\s*-\s*([A-Z]{2}),"
    ).unwrap();

    // ", <city> - <UF>" right before the CEP
    pub static ref CITY_STATE_BEFORE_CEP: Regex = Regex::new(
        r",\s*([^,]+)\s*-\s*([A-Z]{2})\s*,\s*\d{5}-\d{3}"
    ).unwrap();

    // CEP (NNNNN-NNN)
    pub static ref POSTAL_CODE: Regex = Regex::new(
        r"(\d{5}-\d{3})"
    ).unwrap();

    // Last comma-separated token
    pub static ref TRAILING_TOKEN: Regex = Regex::new(
        r",\s*([^,]+)$"
    ).unwrap();

    // Any preposition bounded by whitespace or the string edges
    pub static ref PREPOSITION_BOUNDARY: Regex = Regex::new(
        &format!(r"(?i)(?:^|\s)((?:{}))(?:\s|$)", PREPOSITIONS.join("|"))
    ).unwrap();
}
