pub mod errors;
pub mod models;

use std::time::Duration;
use reqwest::Client;
use crate::manager_geocoding::errors::GeoError;
use crate::manager_geocoding::models::GeoPlace;

/// Geocoding manager
///
pub struct Geocoder {
    client: Client,
    url: String,
}

impl Geocoder {

    /// Returns a new instance of Geocoder
    ///
    /// # Arguments
    ///
    /// * 'url' - url of the direct geocoding endpoint
    pub fn new(url: &str) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, url: url.to_string() })
    }

    /// Resolves a free text place name to coordinates
    ///
    /// Returns `None` when the provider has no match for the given name.
    /// An optional region qualifier narrows the lookup, e.g. a state or
    /// country code appended to the query.
    ///
    /// # Arguments
    ///
    /// * 'city' - free text place name
    /// * 'region' - optional region qualifier
    /// * 'api_key' - credential for the provider
    pub async fn resolve(&self, city: &str, region: Option<&str>, api_key: &str) -> Result<Option<GeoPlace>, GeoError> {
        let query = match region {
            Some(region) if !region.trim().is_empty() => format!("{},{}", city.trim(), region.trim()),
            _ => city.trim().to_string(),
        };

        let req = self.client.get(&self.url)
            .query(&[("q", query.as_str()), ("limit", "1"), ("appid", api_key)])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(GeoError(format!("{:?}", status)));
        }

        let json = req.text().await?;
        let mut places: Vec<GeoPlace> = serde_json::from_str(&json)?;

        if places.is_empty() {
            Ok(None)
        } else {
            Ok(Some(places.remove(0)))
        }
    }
}
