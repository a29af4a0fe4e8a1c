use sqlx::FromRow;

/// Database model for a collection point
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Point {
    pub id: i32,
    /// Stored upload file name
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    /// Two-letter region code
    pub uf: String,
}

/// Point row to insert; the id is generated by the database
#[derive(Debug, Clone)]
pub struct NewPoint {
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}
