//! Customer cancel/delete actions over an order.
//!
//! Preconditions mirror the presenter's action gating: cancel is legal for
//! any non-cancelled order, delete only for a cancelled one. The server is
//! still the final authority and may reject either call. On success the
//! user's order list is re-fetched and returned, never patched locally.

use fueldrop_sdk::client::{ClientError, CustomerClient};
use fueldrop_sdk::objects::order::Order;
use fueldrop_sdk::presenter::EnabledActions;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Another action through this handle is still in flight.
    #[error("an order action is already in flight")]
    InFlight,

    /// Cancel requested on an already-cancelled order.
    #[error("order {order_id} is already cancelled")]
    NotCancellable { order_id: String },

    /// Delete requested on an order that is not cancelled.
    #[error("order {order_id} must be cancelled before it can be deleted")]
    NotDeletable { order_id: String },

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Customer-side order actions with presenter-gated preconditions and an
/// in-flight guard against duplicate submission.
pub struct OrderActions {
    client: CustomerClient,
    in_flight: Mutex<()>,
}

impl OrderActions {
    pub fn new(client: CustomerClient) -> Self {
        Self {
            client,
            in_flight: Mutex::new(()),
        }
    }

    /// `PUT /orders/cancelOrder/{id}` followed by a list re-fetch.
    ///
    /// Returns the refreshed order list for the logged-in user.
    pub async fn cancel(&self, order: &Order) -> Result<Vec<Order>, ActionError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            return Err(ActionError::InFlight);
        };

        if !EnabledActions::for_order(order).cancel {
            return Err(ActionError::NotCancellable {
                order_id: order.id.clone(),
            });
        }

        self.client.cancel_order(&order.id).await?;
        info!(order_id = %order.id, "order cancelled");

        self.refreshed_list().await
    }

    /// `DELETE /orders/deleteOrder/{id}` followed by a list re-fetch.
    pub async fn delete(&self, order: &Order) -> Result<Vec<Order>, ActionError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            return Err(ActionError::InFlight);
        };

        if !EnabledActions::for_order(order).delete {
            return Err(ActionError::NotDeletable {
                order_id: order.id.clone(),
            });
        }

        self.client.delete_order(&order.id).await?;
        info!(order_id = %order.id, "order deleted");

        self.refreshed_list().await
    }

    async fn refreshed_list(&self) -> Result<Vec<Order>, ActionError> {
        let user_id = self
            .client
            .session()
            .user_id()
            .ok_or(ClientError::NotAuthenticated)?;
        Ok(self.client.list_user_orders(&user_id).await?)
    }
}
