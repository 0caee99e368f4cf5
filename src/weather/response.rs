/// Response structure for the OpenWeatherMap current weather endpoint
/// Only the fields this tool prints are decoded, the rest of the payload is ignored
#[derive(serde::Deserialize, Debug)]
pub struct WeatherResponse {
    /// Resolved city name
    pub name: String,
    /// Main readings block
    pub main: MainReadings,
}

#[derive(serde::Deserialize, Debug)]
pub struct MainReadings {
    /// Temperature in the requested unit system (Celsius for `units=metric`)
    pub temp: f64,
}
