use serde::Deserialize;

/// Region entry as returned by the geography service; only the code is used
#[derive(Debug, Clone, Deserialize)]
pub struct UfResponse {
    pub sigla: String,
}

/// City entry as returned by the geography service; only the name is used
#[derive(Debug, Clone, Deserialize)]
pub struct CityResponse {
    pub nome: String,
}
