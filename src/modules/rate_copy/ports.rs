// What the rate-copy module needs from the upstream property-management
// API, as a trait. The HTTP adapter implements it for production; the
// in-memory adapter stands in for tests and local development.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modules::rate_copy::core::operation::{CopyOperation, OperationResult};
use crate::modules::rate_copy::core::rate::RateRecord;
use crate::modules::rate_copy::core::session::{Credentials, RoomType};

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("upstream rejected the request: {0}")]
    Api(String),
}

/// Body of one copy-rate call: a single source date mapped onto a single
/// target date in one target year. The year still travels as a list
/// because that is the upstream wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyRateRequest {
    #[serde(rename = "propertyID")]
    pub property_id: String,
    #[serde(rename = "roomTypeID")]
    pub room_type_id: String,
    #[serde(rename = "date")]
    pub source_date: NaiveDate,
    #[serde(rename = "targetDate")]
    pub target_date: NaiveDate,
    #[serde(rename = "years")]
    pub target_years: Vec<i32>,
    #[serde(rename = "rateData")]
    pub rate_data: RateRecord,
}

impl CopyRateRequest {
    pub fn for_operation(property_id: &str, operation: &CopyOperation) -> Self {
        Self {
            property_id: property_id.to_string(),
            room_type_id: operation.room_type_id.clone(),
            source_date: operation.source_date,
            target_date: operation.target_date,
            target_years: vec![operation.target_year],
            rate_data: operation.rate_data.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CopyRateResponse {
    pub success: bool,
    #[serde(default)]
    pub results: Vec<OperationResult>,
    #[serde(default)]
    pub error: Option<String>,
}

#[async_trait]
pub trait UpstreamRates: Send + Sync {
    async fn room_types(&self, credentials: &Credentials) -> Result<Vec<RoomType>, UpstreamError>;

    /// The rate for one room type on one date. `Ok(None)` means the
    /// upstream knows no rate for that pair, which is common and not a
    /// fault.
    async fn rate(
        &self,
        credentials: &Credentials,
        room_type_id: &str,
        date: NaiveDate,
    ) -> Result<Option<RateRecord>, UpstreamError>;

    async fn copy_rate(
        &self,
        credentials: &Credentials,
        request: CopyRateRequest,
    ) -> Result<CopyRateResponse, UpstreamError>;
}
