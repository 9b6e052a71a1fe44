use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use strike_core::{BookingGateway, CoreError, CoreResult};
use strike_shared::{BookingConfirmation, BookingRequest};
use tracing::{error, info};

/// Booking gateway backed by the remote `POST /booking` endpoint
#[derive(Clone)]
pub struct HttpBookingGateway {
    client: Client,
    endpoint: String,
}

impl HttpBookingGateway {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint: endpoint.into() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BookingGateway for HttpBookingGateway {
    async fn create_booking(&self, request: &BookingRequest) -> CoreResult<BookingConfirmation> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| CoreError::Gateway(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            error!("Booking endpoint {} answered {}", self.endpoint, status);
            return Err(CoreError::Gateway(format!("unexpected status {}", status)));
        }

        let confirmation = resp
            .json::<BookingConfirmation>()
            .await
            .map_err(|e| CoreError::Gateway(format!("malformed booking response: {}", e)))?;

        info!("Booking {} created ({})", confirmation.booking_id, status);
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_gateway_error() {
        // Port 9 (discard) on loopback is closed in test environments.
        let gateway = HttpBookingGateway::new("http://127.0.0.1:9/booking", Duration::from_millis(500)).unwrap();
        let request = BookingRequest {
            when: "2025-12-20T18:00".to_string(),
            people: "2".to_string(),
            lanes: "1".to_string(),
            shoes: vec!["38".to_string(), "39".to_string()],
        };

        let result = gateway.create_booking(&request).await;

        assert!(matches!(result, Err(CoreError::Gateway(_))));
    }
}
