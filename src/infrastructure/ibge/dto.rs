use serde::Deserialize;

/// IBGE state (UF) entry. Only the fields the picker uses are decoded.
#[derive(Debug, Deserialize)]
pub struct UfResponse {
    /// Two-letter state code.
    pub sigla: String,
}

/// IBGE municipality entry.
#[derive(Debug, Deserialize)]
pub struct CityResponse {
    /// Municipality name.
    pub nome: String,
}
