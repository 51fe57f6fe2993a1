use std::fmt;
use std::fmt::Formatter;

#[derive(Debug)]
pub struct GeoError(pub String);
impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "GeoError: {}", self.0)
    }
}
impl From<&str> for GeoError {
    fn from(e: &str) -> Self { GeoError(e.to_string()) }
}
impl From<reqwest::Error> for GeoError {
    fn from(e: reqwest::Error) -> Self { GeoError(e.to_string()) }
}
impl From<serde_json::Error> for GeoError {
    fn from(e: serde_json::Error) -> Self { GeoError(e.to_string()) }
}
