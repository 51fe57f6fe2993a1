use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use crate::serialize_timestamp;

/// One labelled value in a chart series
#[derive(Serialize, Deserialize)]
pub struct ChartItem {
    pub x: String,
    pub y: f64,
}

/// A chart series in the format the front page feeds to the chart library
#[derive(Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: Vec<ChartItem>,
}

/// Current weather conditions at a resolved location, valid only for the
/// instant they were fetched
#[derive(Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub cloud_cover: f64,
    pub temperature: f64,
    #[serde(with = "serialize_timestamp")]
    pub observed_at: DateTime<Local>,
}
