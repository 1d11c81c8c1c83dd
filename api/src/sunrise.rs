/// sunrisesunset.io wire types.
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SunriseResponse {
    pub results: Option<SunriseResults>,
    pub status: Option<String>, // "OK"
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SunriseResults {
    pub dawn: Option<String>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub dusk: Option<String>,
    pub solar_noon: Option<String>,
    pub golden_hour: Option<String>,
    pub day_length: Option<String>,
    pub first_light: Option<String>,
    pub last_light: Option<String>,
}
