use chrono::NaiveDate;
use serde::Deserialize;

/// Basic-mode input: copy every rate found in the range for the chosen
/// room types into every chosen target year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RangeSelection {
    #[serde(rename = "roomTypeIDs")]
    pub room_type_ids: Vec<String>,
    #[serde(rename = "targetYears")]
    pub target_years: Vec<i32>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}
