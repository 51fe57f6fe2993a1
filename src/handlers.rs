use actix_web::{get, web, HttpResponse, Responder};
use log::error;
use serde::{Deserialize, Serialize};
use crate::AppState;
use crate::manager_estimate::{get_estimate as run_estimate, Estimate, Parameters};
use crate::manager_geocoding::Geocoder;
use crate::manager_weather::Weather;
use crate::models::{ChartItem, Series, WeatherSnapshot};

pub const MIN_PANEL_POWER: f64 = 10.0;
pub const MAX_PANEL_POWER: f64 = 20000.0;

const MSG_MISSING_INPUT: &str = "Please enter all required information.";
const MSG_INVALID_LOCATION: &str = "Invalid city or region name. Please try again.";
const MSG_NO_WEATHER: &str = "Couldn't fetch weather data. Please check your API key and try again.";

#[derive(Deserialize)]
struct Params {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_panel_power")]
    pub panel_power: f64,
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
    #[serde(default = "default_panel_count")]
    pub panel_count: u32,
}

fn default_panel_power() -> f64 { 400.0 }
fn default_efficiency() -> f64 { 18.0 }
fn default_panel_count() -> u32 { 1 }

#[derive(Serialize)]
struct Warning {
    warning: String,
}

#[derive(Serialize)]
struct ErrorMessage {
    error: String,
}

#[derive(Serialize)]
struct EstimateResponse {
    resolved: String,
    weather: WeatherSnapshot,
    irradiance: f64,
    sunlight_hours: f64,
    daily_kwh: f64,
    monthly_kwh: f64,
    annual_kwh: f64,
    co2_saved_kg: f64,
    chart: (Series, Series),
}

#[get("/api/estimate")]
pub async fn get_estimate(data: web::Data<AppState>, params: web::Query<Params>) -> impl Responder {
    if params.city.trim().is_empty() || params.api_key.trim().is_empty() {
        return HttpResponse::BadRequest().json(Warning { warning: MSG_MISSING_INPUT.to_string() });
    }
    if !(MIN_PANEL_POWER..=MAX_PANEL_POWER).contains(&params.panel_power) {
        return HttpResponse::BadRequest().json(Warning {
            warning: format!("Panel power must be between {} and {} watts.", MIN_PANEL_POWER, MAX_PANEL_POWER),
        });
    }

    let place = match resolve_place(&data.config.open_weather.geo_url, &params).await {
        Ok(Some(place)) => place,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorMessage { error: MSG_INVALID_LOCATION.to_string() });
        }
        Err(e) => {
            error!("geocoding failed: {}", e);
            return HttpResponse::NotFound().json(ErrorMessage { error: MSG_INVALID_LOCATION.to_string() });
        }
    };

    let snapshot = match fetch_weather(&data.config.open_weather.weather_url, place.lat, place.lon, &params.api_key).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("weather fetch failed: {}", e);
            return HttpResponse::BadGateway().json(ErrorMessage { error: MSG_NO_WEATHER.to_string() });
        }
    };

    let estimate = run_estimate(&Parameters {
        panel_power: params.panel_power,
        panel_count: params.panel_count.max(1),
        efficiency_pct: params.efficiency,
        cloud_cover: snapshot.cloud_cover,
    });

    let resolved = match &place.country {
        Some(country) => format!("{}, {}", place.name, country),
        None => place.name,
    };

    HttpResponse::Ok().json(EstimateResponse {
        resolved,
        weather: snapshot,
        irradiance: estimate.irradiance,
        sunlight_hours: estimate.sunlight_hours,
        daily_kwh: estimate.daily_kwh,
        monthly_kwh: estimate.monthly_kwh,
        annual_kwh: estimate.annual_kwh,
        co2_saved_kg: estimate.co2_saved_kg,
        chart: output_chart(&estimate),
    })
}

async fn resolve_place(geo_url: &str, params: &Params) -> Result<Option<crate::manager_geocoding::models::GeoPlace>, crate::manager_geocoding::errors::GeoError> {
    Geocoder::new(geo_url)?
        .resolve(&params.city, params.region.as_deref(), &params.api_key).await
}

async fn fetch_weather(weather_url: &str, lat: f64, lon: f64, api_key: &str) -> Result<WeatherSnapshot, crate::manager_weather::errors::WeatherError> {
    Weather::new(weather_url)?
        .current(lat, lon, api_key).await
}

/// Builds the pie and bar series the front page feeds to the chart library
///
/// # Arguments
///
/// * 'estimate' - the estimate to chart
fn output_chart(estimate: &Estimate) -> (Series, Series) {
    let labels = ["Daily Output", "Monthly Output", "Annual Output"];
    let values = [estimate.daily_kwh, estimate.monthly_kwh, estimate.annual_kwh];

    let items = || labels.iter()
        .zip(values.iter())
        .map(|(x, y)| ChartItem { x: x.to_string(), y: *y })
        .collect::<Vec<ChartItem>>();

    (Series {
        name: "Share".to_string(),
        chart_type: "pie".to_string(),
        data: items(),
    }, Series {
        name: "kWh".to_string(),
        chart_type: "bar".to_string(),
        data: items(),
    })
}
