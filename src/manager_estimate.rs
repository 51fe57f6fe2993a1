//! Energy output estimation from a single weather snapshot.
//!
//! Irradiance and sunlight hours are not measured, they are crude linear
//! approximations derived from cloud cover alone. The base irradiance of 5.0
//! represents average moderate sunlight and scales down to zero at full
//! cloud cover, as does the 12 hour clear-sky sunlight day.

/// Average irradiance multiplier under moderate clear-sky sunlight
pub const BASE_IRRADIANCE: f64 = 5.0;

/// Sunlight hours on a fully clear day
pub const CLEAR_SKY_SUNLIGHT_HOURS: f64 = 12.0;

/// Grid emissions factor, kg CO2 avoided per kWh produced
const CO2_KG_PER_KWH: f64 = 0.92;

const DAYS_PER_MONTH: f64 = 30.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Bounds for the panel efficiency percentage
pub const MIN_EFFICIENCY_PCT: f64 = 10.0;
pub const MAX_EFFICIENCY_PCT: f64 = 25.0;

/// Parameters for one estimation run
pub struct Parameters {
    pub panel_power: f64,
    pub panel_count: u32,
    pub efficiency_pct: f64,
    pub cloud_cover: f64,
}

/// Estimated energy output derived from one weather snapshot
pub struct Estimate {
    pub irradiance: f64,
    pub sunlight_hours: f64,
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub annual_kwh: f64,
    pub co2_saved_kg: f64,
}

/// Returns the irradiance multiplier for the given cloud cover percentage
///
/// # Arguments
///
/// * 'cloud_cover' - cloud cover in percent, clamped to 0 to 100
pub fn irradiance(cloud_cover: f64) -> f64 {
    BASE_IRRADIANCE * (1.0 - cloud_cover.clamp(0.0, 100.0) / 100.0)
}

/// Returns the approximated sunlight hours for the given cloud cover percentage
///
/// # Arguments
///
/// * 'cloud_cover' - cloud cover in percent, clamped to 0 to 100
pub fn sunlight_hours(cloud_cover: f64) -> f64 {
    CLEAR_SKY_SUNLIGHT_HOURS * (1.0 - cloud_cover.clamp(0.0, 100.0) / 100.0)
}

/// Calculates the estimated energy output for the given parameters
///
/// Daily output in kWh is total installed power in kW times the efficiency
/// fraction, the irradiance multiplier and the sunlight hours. Monthly and
/// annual figures are plain multiples of the daily figure.
///
/// # Arguments
///
/// * 'params' - parameters to use in calculations
pub fn get_estimate(params: &Parameters) -> Estimate {
    let efficiency = params.efficiency_pct.clamp(MIN_EFFICIENCY_PCT, MAX_EFFICIENCY_PCT) / 100.0;
    let irradiance = irradiance(params.cloud_cover);
    let sunlight_hours = sunlight_hours(params.cloud_cover);

    let total_kw = params.panel_power * params.panel_count as f64 / 1000.0;
    let daily_kwh = total_kw * efficiency * irradiance * sunlight_hours;
    let monthly_kwh = daily_kwh * DAYS_PER_MONTH;
    let annual_kwh = monthly_kwh * MONTHS_PER_YEAR;

    Estimate {
        irradiance,
        sunlight_hours,
        daily_kwh,
        monthly_kwh,
        annual_kwh,
        co2_saved_kg: daily_kwh * CO2_KG_PER_KWH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn clear_sky_reference_panel() {
        let params = Parameters {
            panel_power: 400.0,
            panel_count: 1,
            efficiency_pct: 18.0,
            cloud_cover: 0.0,
        };

        let estimate = get_estimate(&params);

        assert_eq!(estimate.irradiance, 5.0);
        assert_eq!(estimate.sunlight_hours, 12.0);
        assert!((estimate.daily_kwh - 4.32).abs() < EPSILON);
        assert!((estimate.monthly_kwh - 129.6).abs() < EPSILON);
        assert!((estimate.annual_kwh - 1555.2).abs() < EPSILON);
        assert!((estimate.co2_saved_kg - 3.9744).abs() < EPSILON);
    }

    #[test]
    fn full_cloud_cover_yields_zero_output() {
        let params = Parameters {
            panel_power: 400.0,
            panel_count: 4,
            efficiency_pct: 22.0,
            cloud_cover: 100.0,
        };

        let estimate = get_estimate(&params);

        assert_eq!(estimate.irradiance, 0.0);
        assert_eq!(estimate.sunlight_hours, 0.0);
        assert_eq!(estimate.daily_kwh, 0.0);
        assert_eq!(estimate.monthly_kwh, 0.0);
        assert_eq!(estimate.annual_kwh, 0.0);
        assert_eq!(estimate.co2_saved_kg, 0.0);
    }

    #[test]
    fn monthly_and_annual_are_exact_multiples() {
        let params = Parameters {
            panel_power: 375.5,
            panel_count: 7,
            efficiency_pct: 19.3,
            cloud_cover: 37.0,
        };

        let estimate = get_estimate(&params);

        assert_eq!(estimate.monthly_kwh, estimate.daily_kwh * 30.0);
        assert_eq!(estimate.annual_kwh, estimate.monthly_kwh * 12.0);
    }

    #[test]
    fn efficiency_is_clamped_to_panel_range() {
        let base = Parameters {
            panel_power: 400.0,
            panel_count: 1,
            efficiency_pct: 50.0,
            cloud_cover: 0.0,
        };
        let high = get_estimate(&base);
        let max = get_estimate(&Parameters { efficiency_pct: 25.0, ..base });
        assert_eq!(high.daily_kwh, max.daily_kwh);

        let low = get_estimate(&Parameters { efficiency_pct: 2.0, ..base });
        let min = get_estimate(&Parameters { efficiency_pct: 10.0, ..base });
        assert_eq!(low.daily_kwh, min.daily_kwh);
    }

    #[test]
    fn cloud_cover_is_clamped_to_percentage_range() {
        assert_eq!(irradiance(250.0), 0.0);
        assert_eq!(irradiance(-40.0), BASE_IRRADIANCE);
        assert_eq!(sunlight_hours(250.0), 0.0);
        assert_eq!(sunlight_hours(-40.0), CLEAR_SKY_SUNLIGHT_HOURS);

        let estimate = get_estimate(&Parameters {
            panel_power: 400.0,
            panel_count: 1,
            efficiency_pct: 18.0,
            cloud_cover: 250.0,
        });
        assert_eq!(estimate.daily_kwh, 0.0);
        assert_eq!(estimate.co2_saved_kg, 0.0);
    }

    #[test]
    fn output_scales_linearly_with_panel_count() {
        let one = get_estimate(&Parameters {
            panel_power: 400.0,
            panel_count: 1,
            efficiency_pct: 18.0,
            cloud_cover: 25.0,
        });
        let three = get_estimate(&Parameters {
            panel_power: 400.0,
            panel_count: 3,
            efficiency_pct: 18.0,
            cloud_cover: 25.0,
        });

        assert!((three.daily_kwh - one.daily_kwh * 3.0).abs() < EPSILON);
    }
}
