use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::rate_copy::core::rate::RateRecord;

/// One unit of rate copying: a source rate bound for a single aligned date
/// in a single target year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOperation {
    #[serde(rename = "roomTypeID")]
    pub room_type_id: String,
    pub source_date: NaiveDate,
    pub target_date: NaiveDate,
    pub target_year: i32,
    pub rate_amount: f64,
    pub rate_data: RateRecord,
}

impl CopyOperation {
    /// User override of the amount before submission; keeps the payload's
    /// amount fields in sync so the submitted rate data matches.
    pub fn set_amount(&mut self, amount: f64) {
        self.rate_amount = amount;
        self.rate_data.patch_amount(amount);
    }
}

/// Per-operation submission outcome, order-correlated with the submitted
/// batch. Mirrors the upstream result element shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    pub date: NaiveDate,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationResult {
    /// Synthetic failure for an operation whose submission never produced
    /// an upstream result.
    pub fn failure(operation: &CopyOperation, error: impl Into<String>) -> Self {
        Self {
            success: false,
            date: operation.target_date,
            year: operation.target_year,
            rate: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod copy_operation_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn operation() -> CopyOperation {
        CopyOperation {
            room_type_id: "rt-1".into(),
            source_date: date(2024, 6, 15),
            target_date: date(2027, 6, 12),
            target_year: 2027,
            rate_amount: 120.0,
            rate_data: RateRecord(json!({"rate": 120.0, "totalRate": 140.0})),
        }
    }

    #[rstest]
    fn it_should_patch_the_payload_when_the_amount_changes() {
        let mut op = operation();
        op.set_amount(99.5);
        assert_eq!(op.rate_amount, 99.5);
        assert_eq!(op.rate_data.0, json!({"rate": 99.5, "totalRate": 99.5}));
    }

    #[rstest]
    fn it_should_build_a_failure_result_from_the_target_side() {
        let result = OperationResult::failure(&operation(), "boom");
        assert!(!result.success);
        assert_eq!(result.date, date(2027, 6, 12));
        assert_eq!(result.year, 2027);
        assert_eq!(result.error.as_deref(), Some("boom"));
        assert_eq!(result.rate, None);
    }

    #[rstest]
    fn it_should_serialize_dates_as_plain_calendar_days() {
        let value = serde_json::to_value(operation()).unwrap();
        assert_eq!(value["sourceDate"], "2024-06-15");
        assert_eq!(value["targetDate"], "2027-06-12");
        assert_eq!(value["roomTypeID"], "rt-1");
    }
}
