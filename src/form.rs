//! Criteria Builder: turns raw form-field strings into a validated
//! [`SearchCriteria`]. All validation happens here, before any request; a
//! failed build means the search is never issued.

use crate::client::types::SearchCriteria;
use chrono::NaiveDate;
use std::fmt;

/// Format emitted by the date picker / CLI flag.
const PICKER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form input, one field per form control. `None` and blank strings are
/// both treated as "not filled in".
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub booker_name: Option<String>,
    pub city: Option<String>,
    pub num_people: Option<String>,
    pub num_bedrooms: Option<String>,
    pub max_dist_lake: Option<String>,
    pub max_dist_city: Option<String>,
    pub start_date: Option<String>,
    pub num_days: Option<String>,
    pub date_shift: Option<String>,
}

/// A required field was missing or malformed. The request is never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    InvalidNumber { field: &'static str, value: String },
    InvalidDate { value: String },
    OutOfRange { field: &'static str, message: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "Please fill in the required field '{}'", field)
            }
            ValidationError::InvalidNumber { field, value } => {
                write!(f, "Field '{}' must be a whole number, got '{}'", field, value)
            }
            ValidationError::InvalidDate { value } => {
                write!(f, "Start date must be in YYYY-MM-DD format, got '{}'", value)
            }
            ValidationError::OutOfRange { field, message } => {
                write!(f, "Field '{}' {}", field, message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl FormInput {
    /// Validate and build the criteria for one search.
    pub fn build_criteria(&self) -> Result<SearchCriteria, ValidationError> {
        let required_places = required_number("number of people", &self.num_people)?;
        let required_bedrooms = required_number("number of bedrooms", &self.num_bedrooms)?;
        let max_lake_distance_meters = required_number("max distance to lake", &self.max_dist_lake)?;
        let max_city_distance_meters = required_number("max distance to city", &self.max_dist_city)?;
        let required_days = required_number("number of days", &self.num_days)?;
        let max_start_shift_days = required_number("date shift", &self.date_shift)?;
        let start_day = required_date("start date", &self.start_date)?;

        if required_places == 0 {
            return Err(ValidationError::OutOfRange {
                field: "number of people",
                message: "must be greater than zero",
            });
        }
        if required_days == 0 {
            return Err(ValidationError::OutOfRange {
                field: "number of days",
                message: "must be greater than zero",
            });
        }

        Ok(SearchCriteria {
            booker_name: optional_text(&self.booker_name),
            city: optional_text(&self.city),
            required_places,
            required_bedrooms,
            max_lake_distance_meters,
            max_city_distance_meters,
            start_day,
            required_days,
            max_start_shift_days,
        })
    }
}

/// Trimmed optional text field; blank input becomes `None` so it is omitted
/// from the outbound query.
fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn required_text<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, ValidationError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::MissingField(field))
}

fn required_number(field: &'static str, value: &Option<String>) -> Result<u32, ValidationError> {
    let text = required_text(field, value)?;
    text.parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

fn required_date(
    field: &'static str,
    value: &Option<String>,
) -> Result<NaiveDate, ValidationError> {
    let text = required_text(field, value)?;
    NaiveDate::parse_from_str(text, PICKER_DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormInput {
        FormInput {
            booker_name: Some("Aino Virtanen".to_string()),
            city: Some("Jyväskylä".to_string()),
            num_people: Some("4".to_string()),
            num_bedrooms: Some("2".to_string()),
            max_dist_lake: Some("300".to_string()),
            max_dist_city: Some("20000".to_string()),
            start_date: Some("2025-03-05".to_string()),
            num_days: Some("7".to_string()),
            date_shift: Some("2".to_string()),
        }
    }

    #[test]
    fn builds_criteria_from_filled_form() {
        let criteria = filled_form().build_criteria().unwrap();
        assert_eq!(criteria.booker_name.as_deref(), Some("Aino Virtanen"));
        assert_eq!(criteria.required_places, 4);
        assert_eq!(
            criteria.start_day,
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
        );
    }

    #[test]
    fn picker_date_converts_to_backend_format() {
        let criteria = filled_form().build_criteria().unwrap();
        let pairs = criteria.to_query_pairs();
        let start_day = pairs
            .iter()
            .find(|(k, _)| *k == "startDay")
            .map(|(_, v)| v.as_str());
        assert_eq!(start_day, Some("05.03.2025"));
    }

    #[test]
    fn missing_required_field_fails_validation() {
        let mut form = filled_form();
        form.num_people = None;
        assert_eq!(
            form.build_criteria().unwrap_err(),
            ValidationError::MissingField("number of people")
        );

        // Whitespace-only counts as unset
        let mut form = filled_form();
        form.date_shift = Some("   ".to_string());
        assert_eq!(
            form.build_criteria().unwrap_err(),
            ValidationError::MissingField("date shift")
        );
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        let mut form = filled_form();
        form.num_bedrooms = Some("two".to_string());
        assert!(matches!(
            form.build_criteria().unwrap_err(),
            ValidationError::InvalidNumber { field: "number of bedrooms", .. }
        ));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut form = filled_form();
        form.start_date = Some("05.03.2025".to_string());
        assert!(matches!(
            form.build_criteria().unwrap_err(),
            ValidationError::InvalidDate { .. }
        ));
    }

    #[test]
    fn zero_places_or_days_is_out_of_range() {
        let mut form = filled_form();
        form.num_people = Some("0".to_string());
        assert!(matches!(
            form.build_criteria().unwrap_err(),
            ValidationError::OutOfRange { field: "number of people", .. }
        ));

        let mut form = filled_form();
        form.num_days = Some("0".to_string());
        assert!(matches!(
            form.build_criteria().unwrap_err(),
            ValidationError::OutOfRange { field: "number of days", .. }
        ));
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let mut form = filled_form();
        form.booker_name = Some("  ".to_string());
        form.city = None;
        let criteria = form.build_criteria().unwrap();
        assert_eq!(criteria.booker_name, None);
        assert_eq!(criteria.city, None);
    }

    #[test]
    fn string_fields_are_trimmed() {
        let mut form = filled_form();
        form.booker_name = Some("  Aino  ".to_string());
        form.num_people = Some(" 4 ".to_string());
        let criteria = form.build_criteria().unwrap();
        assert_eq!(criteria.booker_name.as_deref(), Some("Aino"));
        assert_eq!(criteria.required_places, 4);
    }
}
