use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::rate_copy::core::rate::RateRecord;
use crate::modules::rate_copy::core::session::{Credentials, RoomType};
use crate::modules::rate_copy::ports::{
    CopyRateRequest, CopyRateResponse, UpstreamError, UpstreamRates,
};

const BEARER_HEADER: &str = "X-Bearer-Token";

/// Upstream adapter over the property-management rate API.
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUpstream {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Reuses an existing client, keeping its connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[derive(Deserialize)]
struct RoomTypesEnvelope {
    success: bool,
    #[serde(default, rename = "roomTypes")]
    room_types: Vec<RoomType>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct RateEnvelope {
    success: bool,
    #[serde(default)]
    rate: Option<RateRecord>,
}

#[async_trait]
impl UpstreamRates for HttpUpstream {
    async fn room_types(&self, credentials: &Credentials) -> Result<Vec<RoomType>, UpstreamError> {
        let envelope: RoomTypesEnvelope = self
            .client
            .get(format!("{}/api/room-types", self.base_url))
            .query(&[("propertyID", credentials.property_id.as_str())])
            .header(BEARER_HEADER, &credentials.token)
            .send()
            .await
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)?;

        if !envelope.success {
            return Err(UpstreamError::Api(
                envelope.error.unwrap_or_else(|| "Unknown error".into()),
            ));
        }
        Ok(envelope.room_types)
    }

    async fn rate(
        &self,
        credentials: &Credentials,
        room_type_id: &str,
        date: NaiveDate,
    ) -> Result<Option<RateRecord>, UpstreamError> {
        let date = date.to_string();
        let envelope: RateEnvelope = self
            .client
            .get(format!("{}/api/rates", self.base_url))
            .query(&[
                ("propertyID", credentials.property_id.as_str()),
                ("roomTypeID", room_type_id),
                ("date", date.as_str()),
            ])
            .header(BEARER_HEADER, &credentials.token)
            .send()
            .await
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)?;

        // A non-success envelope means "no rate for this date", not a fault.
        Ok(envelope.success.then_some(envelope.rate).flatten())
    }

    async fn copy_rate(
        &self,
        credentials: &Credentials,
        request: CopyRateRequest,
    ) -> Result<CopyRateResponse, UpstreamError> {
        self.client
            .post(format!("{}/api/copy-rates", self.base_url))
            .header(BEARER_HEADER, &credentials.token)
            .json(&request)
            .send()
            .await
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)
    }
}

fn transport(error: reqwest::Error) -> UpstreamError {
    UpstreamError::Transport(error.to_string())
}

#[cfg(test)]
mod http_upstream_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    #[ignore]
    async fn it_should_list_room_types_from_a_local_upstream() {
        let upstream = HttpUpstream::new("http://localhost:5000");
        let credentials = Credentials {
            property_id: "demo-property".into(),
            token: "demo-token".into(),
        };
        let room_types = upstream.room_types(&credentials).await.unwrap();
        assert!(!room_types.is_empty());
    }
}
