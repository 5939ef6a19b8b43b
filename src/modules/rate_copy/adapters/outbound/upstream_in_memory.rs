use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::modules::rate_copy::core::operation::OperationResult;
use crate::modules::rate_copy::core::rate::RateRecord;
use crate::modules::rate_copy::core::session::{Credentials, RoomType};
use crate::modules::rate_copy::ports::{
    CopyRateRequest, CopyRateResponse, UpstreamError, UpstreamRates,
};

/// Upstream stand-in for tests and local development. Rates are seeded per
/// (room type, date); copy calls are recorded and can be made to fail per
/// target date, either at the transport level or with a rejecting body.
#[derive(Default)]
pub struct InMemoryUpstream {
    room_types: Vec<RoomType>,
    rates: HashMap<(String, NaiveDate), RateRecord>,
    offline: bool,
    rejected_target_dates: HashSet<NaiveDate>,
    unreachable_target_dates: HashSet<NaiveDate>,
    pub copy_requests: Mutex<Vec<CopyRateRequest>>,
}

impl InMemoryUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_room_types(room_types: Vec<RoomType>) -> Self {
        Self {
            room_types,
            ..Self::default()
        }
    }

    pub fn add_rate(&mut self, room_type_id: &str, date: NaiveDate, data: RateRecord) {
        self.rates.insert((room_type_id.to_string(), date), data);
    }

    /// All calls fail with a transport error until toggled back.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Copy calls for this target date return a `success: false` body.
    pub fn reject_copies_for(&mut self, target_date: NaiveDate) {
        self.rejected_target_dates.insert(target_date);
    }

    /// Copy calls for this target date fail at the transport level.
    pub fn drop_copies_for(&mut self, target_date: NaiveDate) {
        self.unreachable_target_dates.insert(target_date);
    }

    fn ensure_online(&self) -> Result<(), UpstreamError> {
        if self.offline {
            return Err(UpstreamError::Transport("upstream offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UpstreamRates for InMemoryUpstream {
    async fn room_types(&self, _credentials: &Credentials) -> Result<Vec<RoomType>, UpstreamError> {
        self.ensure_online()?;
        Ok(self.room_types.clone())
    }

    async fn rate(
        &self,
        _credentials: &Credentials,
        room_type_id: &str,
        date: NaiveDate,
    ) -> Result<Option<RateRecord>, UpstreamError> {
        self.ensure_online()?;
        Ok(self
            .rates
            .get(&(room_type_id.to_string(), date))
            .cloned())
    }

    async fn copy_rate(
        &self,
        _credentials: &Credentials,
        request: CopyRateRequest,
    ) -> Result<CopyRateResponse, UpstreamError> {
        let target_date = request.target_date;
        let target_year = request.target_years.first().copied().unwrap_or_default();
        let amount = request.rate_data.amount();
        self.copy_requests.lock().await.push(request);

        self.ensure_online()?;
        if self.unreachable_target_dates.contains(&target_date) {
            return Err(UpstreamError::Transport("connection reset".into()));
        }
        if self.rejected_target_dates.contains(&target_date) {
            return Ok(CopyRateResponse {
                success: false,
                results: vec![],
                error: Some("rate rejected by upstream".into()),
            });
        }
        Ok(CopyRateResponse {
            success: true,
            results: vec![OperationResult {
                success: true,
                date: target_date,
                year: target_year,
                rate: Some(amount),
                error: None,
            }],
            error: None,
        })
    }
}
