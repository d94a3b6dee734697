//! Customer API client (profile pages → order API).
//!
//! Every endpoint here is user-scoped and requires a bearer token; calls
//! fail early with [`ClientError::NotAuthenticated`] when the session store
//! is empty.

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use url::Url;

use super::{ClientError, bearer, parse_ack, parse_data};
use crate::objects::order::Order;
use crate::session::SessionStore;

/// Typed HTTP client for the customer-facing order endpoints.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    http: Client,
    base_url: Url,
    session: SessionStore,
}

impl CustomerClient {
    /// Create a new `CustomerClient`.
    ///
    /// * `base_url` – root URL of the order API.
    /// * `session` – shared session store providing the bearer token.
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

    /// The session store this client reads its token from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// `GET /orders/getOrderByOrderId/{id}` – fetch a single order.
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

    /// `GET /orders/getuserOrders/{userId}` – list all orders placed by a
    /// user.
    pub async fn list_user_orders(&self, user_id: &str) -> Result<Vec<Order>, ClientError> {
        let url = self.base_url.join(&format!(
            "/orders/getuserOrders/{}",
            urlencoding::encode(user_id)
        ))?;

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, bearer(&self.session)?)
            .send()
            .await?;

        parse_data(resp).await
    }

    /// `PUT /orders/cancelOrder/{id}` – cancel an order. Returns the updated
    /// order as the server reports it.
    pub async fn cancel_order(&self, order_id: &str) -> Result<Order, ClientError> {
        let url = self.base_url.join(&format!(
            "/orders/cancelOrder/{}",
            urlencoding::encode(order_id)
        ))?;

        let resp = self
            .http
            .put(url)
            .header(AUTHORIZATION, bearer(&self.session)?)
            .send()
            .await?;

        parse_data(resp).await
    }

    /// `DELETE /orders/deleteOrder/{id}` – delete a cancelled order.
    pub async fn delete_order(&self, order_id: &str) -> Result<(), ClientError> {
        let url = self.base_url.join(&format!(
            "/orders/deleteOrder/{}",
            urlencoding::encode(order_id)
        ))?;

        let resp = self
            .http
            .delete(url)
            .header(AUTHORIZATION, bearer(&self.session)?)
            .send()
            .await?;

        parse_ack(resp).await
    }
}
