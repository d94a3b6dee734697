//! Admin back-office client (order console → order API).
//!
//! Carries the two halves of the admin status update. The two PUTs are
//! independent server-side and not transactional; sequencing and
//! partial-failure policy live in `fueldrop-core`'s status mutator, not
//! here.

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use url::Url;

use super::{ClientError, bearer, parse_ack, parse_data};
use crate::objects::order::{Order, OrderStatus, PaymentStatus};
use crate::session::SessionStore;

#[derive(Serialize)]
struct UpdateStatusBody {
    status: OrderStatus,
}

#[derive(Serialize)]
struct UpdatePaymentBody {
    #[serde(rename = "paymentStatus")]
    payment_status: PaymentStatus,
}

/// Typed HTTP client for the admin order endpoints.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base_url: Url,
    session: SessionStore,
}

impl AdminClient {
    /// Create a new `AdminClient`.
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

    /// `GET /orders/getOrderByOrderId/{id}` – fetch the authoritative copy
    /// of an order, e.g. after a mutation.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, ClientError> {
        let url = self.base_url.join(&format!(
            "/orders/getOrderByOrderId/{}",
            urlencoding::encode(order_id)
        ))?;

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, bearer(&self.session)?)
            .send()
            .await?;

        parse_data(resp).await
    }

    /// `PUT /orders/updateOrderStatus/{id}` body `{status}` – transition the
    /// fulfillment status.
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Order, ClientError> {
        let url = self.base_url.join(&format!(
            "/orders/updateOrderStatus/{}",
            urlencoding::encode(order_id)
        ))?;

        let resp = self
            .http
            .put(url)
            .header(AUTHORIZATION, bearer(&self.session)?)
            .json(&UpdateStatusBody { status })
            .send()
            .await?;

        parse_data(resp).await
    }

    /// `PUT /orders/updatePaymentStatus/{id}` body `{paymentStatus}` – set
    /// the payment axis. This endpoint may not exist on older deployments;
    /// callers must tolerate an error here.
    pub async fn update_payment_status(
        &self,
        order_id: &str,
        payment_status: PaymentStatus,
    ) -> Result<(), ClientError> {
        let url = self.base_url.join(&format!(
            "/orders/updatePaymentStatus/{}",
            urlencoding::encode(order_id)
        ))?;

        let resp = self
            .http
            .put(url)
            .header(AUTHORIZATION, bearer(&self.session)?)
            .json(&UpdatePaymentBody { payment_status })
            .send()
            .await?;

        parse_ack(resp).await
    }
}
