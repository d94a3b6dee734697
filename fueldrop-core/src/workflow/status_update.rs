//! Two-phase admin status mutation.
//!
//! The order API exposes the fulfillment status and the payment status as
//! two independent PUT endpoints with no transaction across them. The
//! mutator makes the resulting partial-failure space explicit:
//!
//! - status PUT fails → the operation fails, the payment endpoint is never
//!   called;
//! - status PUT succeeds, payment PUT fails → the operation still succeeds,
//!   the payment failure is logged and reported in the outcome (the payment
//!   endpoint is missing entirely on older deployments);
//! - after any successful status PUT the order is re-fetched so callers see
//!   the authoritative server state.

use fueldrop_sdk::client::{AdminClient, ClientError};
use fueldrop_sdk::objects::order::{Order, OrderStatus, PaymentStatus};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Errors that fail a status update outright.
#[derive(Debug, thiserror::Error)]
pub enum StatusUpdateError {
    /// Another update through this mutator is still in flight.
    #[error("a status update is already in flight")]
    InFlight,

    /// The status PUT failed. The payment endpoint was not called.
    #[error("status update failed: {0}")]
    Status(#[source] ClientError),

    /// The status PUT succeeded but the authoritative re-fetch failed.
    #[error("order refresh failed: {0}")]
    Refresh(#[source] ClientError),
}

/// Outcome of a completed (possibly partially) status update.
#[derive(Debug)]
pub struct StatusUpdateReport {
    pub status_updated: bool,
    pub payment_updated: bool,
    /// The payment-leg error when `payment_updated` is false.
    pub payment_error: Option<ClientError>,
    /// The order as re-fetched after the update.
    pub order: Order,
}

/// Applies admin status transitions with the two-phase sequencing rules.
///
/// Holds an in-flight guard: a second `apply` while one is running is
/// rejected instead of queued, the backend analogue of a disabled submit
/// button.
pub struct StatusMutator {
    admin: AdminClient,
    in_flight: Mutex<()>,
}

impl StatusMutator {
    pub fn new(admin: AdminClient) -> Self {
        Self {
            admin,
            in_flight: Mutex::new(()),
        }
    }

    /// Transition an order to `status` and set its payment axis to
    /// `payment_status`, then re-fetch the authoritative copy.
    pub async fn apply(
        &self,
        order_id: &str,
        status: OrderStatus,
        payment_status: PaymentStatus,
    ) -> Result<StatusUpdateReport, StatusUpdateError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            return Err(StatusUpdateError::InFlight);
        };

        if let Err(e) = self.admin.update_order_status(order_id, status).await {
            return Err(StatusUpdateError::Status(e));
        }
        info!(order_id, status = %status, "order status updated");

        let payment_error = match self
            .admin
            .update_payment_status(order_id, payment_status)
            .await
        {
            Ok(()) => None,
            Err(e) => {
                warn!(
                    order_id,
                    payment_status = %payment_status,
                    error = %e,
                    "payment status update failed, continuing"
                );
                Some(e)
            }
        };

        let order = self
            .admin
            .get_order(order_id)
            .await
            .map_err(StatusUpdateError::Refresh)?;

        Ok(StatusUpdateReport {
            status_updated: true,
            payment_updated: payment_error.is_none(),
            payment_error,
            order,
        })
    }
}
