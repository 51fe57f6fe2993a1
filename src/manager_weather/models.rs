use serde::Deserialize;

/// Current weather document from the provider, reduced to the fields used
#[derive(Deserialize)]
pub struct CurrentConditions {
    pub clouds: Clouds,
    pub main: Main,
}

#[derive(Deserialize)]
pub struct Clouds {
    pub all: f64,
}

#[derive(Deserialize)]
pub struct Main {
    pub temp: f64,
}
