use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format the suggestion backend expects for `startDay`.
pub const BACKEND_DATE_FORMAT: &str = "%d.%m.%Y";

/// Validated search constraints for one cottage search.
///
/// Built fresh per search by the form layer and not mutated after being
/// encoded into a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Name of the person booking (optional, display only)
    pub booker_name: Option<String>,
    /// Preferred city (optional)
    pub city: Option<String>,
    /// Number of people the cottage must sleep
    pub required_places: u32,
    /// Minimum number of bedrooms
    pub required_bedrooms: u32,
    /// Maximum distance to the nearest lake (meters)
    pub max_lake_distance_meters: u32,
    /// Maximum distance to the nearest city (meters)
    pub max_city_distance_meters: u32,
    /// Desired first day of the stay
    pub start_day: NaiveDate,
    /// Length of the stay in days
    pub required_days: u32,
    /// How many days the start may shift in either direction
    pub max_start_shift_days: u32,
}

impl SearchCriteria {
    /// Encode the criteria as GET query parameters for
    /// `/cottages/suggestions`. Optional fields are omitted entirely when
    /// absent, never sent as empty strings.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("requiredPlaces", self.required_places.to_string()),
            ("requiredBedrooms", self.required_bedrooms.to_string()),
            (
                "maxLakeDistanceMeters",
                self.max_lake_distance_meters.to_string(),
            ),
            (
                "maxCityDistanceMeters",
                self.max_city_distance_meters.to_string(),
            ),
            (
                "startDay",
                self.start_day.format(BACKEND_DATE_FORMAT).to_string(),
            ),
            ("requiredDays", self.required_days.to_string()),
            ("maxStartShiftDays", self.max_start_shift_days.to_string()),
        ];
        if let Some(name) = &self.booker_name {
            pairs.push(("bookerName", name.clone()));
        }
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        pairs
    }
}
