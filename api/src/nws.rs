/// National Weather Service (api.weather.gov) wire types.
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PointsResponse {
    pub properties: Option<PointProperties>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PointProperties {
    /// Half-day (12 hour) forecast URL.
    pub forecast: Option<String>,
    #[serde(rename = "forecastHourly")]
    pub forecast_hourly: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ForecastResponse {
    pub properties: Option<ForecastProperties>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ForecastProperties {
    pub periods: Option<Vec<NwsPeriod>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NwsPeriod {
    /// 1-based position in the feed.
    pub number: Option<u32>,
    pub name: Option<String>, // "Tonight", "Monday", "" for hourly
    #[serde(rename = "startTime")]
    pub start_time: Option<String>,
    #[serde(rename = "isDaytime")]
    pub is_daytime: Option<bool>,
    pub temperature: Option<f64>,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: Option<String>,
    #[serde(rename = "probabilityOfPrecipitation")]
    pub probability_of_precipitation: Option<NwsQuantity>,
    #[serde(rename = "shortForecast")]
    pub short_forecast: Option<String>,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: Option<String>,
}

/// `{ "unitCode": "wmoUnit:percent", "value": 20 }` — value is null when the
/// office has no estimate.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct NwsQuantity {
    #[serde(rename = "unitCode")]
    pub unit_code: Option<String>,
    pub value: Option<f64>,
}
