pub mod errors;
mod models;

use std::time::Duration;
use chrono::Local;
use reqwest::Client;
use crate::manager_weather::errors::WeatherError;
use crate::manager_weather::models::CurrentConditions;
use crate::models::WeatherSnapshot;

/// Weather manager
///
pub struct Weather {
    client: Client,
    url: String,
}

impl Weather {

    /// Returns a new instance of Weather
    ///
    /// # Arguments
    ///
    /// * 'url' - url of the current weather endpoint
    pub fn new(url: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, url: url.to_string() })
    }

    /// Returns the current weather conditions at the given coordinates
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'lon' - longitude of the location
    /// * 'api_key' - credential for the provider
    pub async fn current(&self, lat: f64, lon: f64, api_key: &str) -> Result<WeatherSnapshot, WeatherError> {
        let req = self.client.get(&self.url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
            ])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(WeatherError(format!("{:?}", status)));
        }

        let json = req.text().await?;
        let conditions: CurrentConditions = serde_json::from_str(&json)?;

        Ok(WeatherSnapshot {
            // Providers occasionally report out of range values
            cloud_cover: conditions.clouds.all.clamp(0.0, 100.0),
            temperature: conditions.main.temp,
            observed_at: Local::now(),
        })
    }
}
