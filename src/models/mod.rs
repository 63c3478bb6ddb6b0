use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One candidate cottage returned by the suggestion backend.
///
/// Field names mirror the backend's JSON exactly (`cottageID`, `imageURL`,
/// etc). Instances are read-only: they live for one render pass and are
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CottageSuggestion {
    #[serde(rename = "cottageID")]
    pub cottage_id: String,
    pub address: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub capacity: u32,
    #[serde(rename = "numberOfBedrooms")]
    pub number_of_bedrooms: u32,
    /// Distance to the nearest lake, in meters.
    #[serde(rename = "distanceToLake")]
    pub distance_to_lake: u32,
    #[serde(rename = "cityName")]
    pub city_name: String,
    /// Distance to the nearest city, in meters.
    #[serde(rename = "distanceToCity")]
    pub distance_to_city: u32,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
}

impl CottageSuggestion {
    /// Length of the suggested stay in nights.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days().abs()
    }
}

/// Format a date the way the cards display it, e.g. `5 June 2025`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}
