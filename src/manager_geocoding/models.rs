use serde::Deserialize;

/// One match from the direct geocoding endpoint
#[derive(Deserialize)]
pub struct GeoPlace {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: Option<String>,
}
