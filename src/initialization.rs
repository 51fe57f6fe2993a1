use std::env;
use std::fs::read_to_string;
use serde::Deserialize;
use crate::errors::UnrecoverableError;

const DEFAULT_CONFIG_PATH: &str = "./config.json";

#[derive(Deserialize, Clone)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct OpenWeather {
    pub geo_url: String,
    pub weather_url: String,
}

#[derive(Deserialize, Clone)]
pub struct Config {
    pub web_server: WebServer,
    pub open_weather: OpenWeather,
}

/// Returns the application configuration
///
/// The path to the configuration file is taken from the first command line
/// argument, falling back to `./config.json`
pub fn config() -> Result<Config, UnrecoverableError> {
    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let json = read_to_string(&path)?;
    let config: Config = serde_json::from_str(&json)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_document() {
        let json = r#"{
            "web_server": { "bind_address": "127.0.0.1", "bind_port": 8080 },
            "open_weather": {
                "geo_url": "http://api.openweathermap.org/geo/1.0/direct",
                "weather_url": "http://api.openweathermap.org/data/2.5/weather"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.web_server.bind_address, "127.0.0.1");
        assert_eq!(config.web_server.bind_port, 8080);
        assert!(config.open_weather.geo_url.contains("geo/1.0/direct"));
        assert!(config.open_weather.weather_url.contains("data/2.5/weather"));
    }

    #[test]
    fn rejects_incomplete_config() {
        let json = r#"{ "web_server": { "bind_address": "127.0.0.1", "bind_port": 8080 } }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }
}
