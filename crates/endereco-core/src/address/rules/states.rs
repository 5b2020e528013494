//! Brazilian states (UF codes) and their canonical names.

/// UF code → state name, sorted by code.
pub static BRAZIL_STATES: [(&str, &str); 27] = [
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AM", "Amazonas"),
    ("AP", "Amapá"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MG", "Minas Gerais"),
    ("MS", "Mato Grosso do Sul"),
    ("MT", "Mato Grosso"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("PR", "Paraná"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("RS", "Rio Grande do Sul"),
    ("SC", "Santa Catarina"),
    ("SE", "Sergipe"),
    ("SP", "São Paulo"),
    ("TO", "Tocantins"),
];

/// Resolve a UF code (any case, surrounding whitespace ignored) to the state name.
pub fn resolve_state(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_uppercase();
    BRAZIL_STATES
        .binary_search_by(|(uf, _)| (*uf).cmp(code.as_str()))
        .ok()
        .map(|i| BRAZIL_STATES[i].1)
}
