//! Station console client (station self-service → order API).

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use url::Url;

use super::{ClientError, parse_data};
use crate::objects::order::{Order, OrderStatus};
use crate::session::SessionStore;

/// Typed HTTP client for the station-scoped order endpoints.
///
/// The station listing endpoint tolerates unauthenticated calls, so the
/// bearer header is attached only when a token is present instead of
/// failing early.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: Client,
    base_url: Url,
    session: SessionStore,
}

impl StationClient {
    /// Create a new `StationClient`.
    pub fn new(base_url: Url, session: SessionStore) -> Self {
        Self {
            http: Client::new(),
            base_url,
            session,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `GET /orders/getFuelStationOrders/{stationId}[?status=]` – list the
    /// orders placed against a station, optionally filtered by status.
    pub async fn list_station_orders(
        &self,
        station_id: &str,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, ClientError> {
        let url = self.base_url.join(&format!(
            "/orders/getFuelStationOrders/{}",
            urlencoding::encode(station_id)
        ))?;

        let mut req = self.http.get(url);
        if let Some(status) = status {
            req = req.query(&[("status", status.as_wire())]);
        }
        if let Some(token) = self.session.token() {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        parse_data(req.send().await?).await
    }
}
