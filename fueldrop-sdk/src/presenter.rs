//! Pure presentation mapping from order state to badge variants and enabled
//! actions.
//!
//! Total over anything the API can send: unrecognized status labels take the
//! explicit default branch, never a panic. No I/O here.

use serde::{Deserialize, Serialize};

use crate::objects::order::{Order, OrderStatus, PaymentLabel, PaymentStatus, StatusLabel};

/// Visual badge variant, matching the frontend component library's names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Secondary,
    Default,
    Outline,
    Destructive,
}

/// Badge for a fulfillment status label.
pub fn status_badge(label: &StatusLabel) -> BadgeVariant {
    match label.parsed() {
        Some(OrderStatus::Pending) => BadgeVariant::Secondary,
        Some(OrderStatus::Processing) => BadgeVariant::Default,
        Some(OrderStatus::Completed) => BadgeVariant::Outline,
        Some(OrderStatus::Cancelled) => BadgeVariant::Destructive,
        None => BadgeVariant::Secondary,
    }
}

/// Badge for a payment status label.
pub fn payment_badge(label: &PaymentLabel) -> BadgeVariant {
    match label.parsed() {
        PaymentStatus::Paid => BadgeVariant::Default,
        PaymentStatus::Pending => BadgeVariant::Outline,
    }
}

/// Which controls are live for an order in a given state.
///
/// `cancel` and `delete` are customer actions, the `mark_*` flags are admin
/// actions. Workflows re-check these before issuing a request; the server
/// remains the final authority on legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledActions {
    pub cancel: bool,
    pub delete: bool,
    pub mark_processing: bool,
    pub mark_completed: bool,
    pub mark_cancelled: bool,
    /// Whether the payment section (gateway hand-off) should be shown.
    pub payment_section: bool,
}

/// Compute the action set for a `(status, payment status)` pair.
pub fn enabled_actions(status: &StatusLabel, payment: &PaymentLabel) -> EnabledActions {
    let state = status.parsed();
    EnabledActions {
        cancel: state != Some(OrderStatus::Cancelled),
        delete: state == Some(OrderStatus::Cancelled),
        mark_processing: state == Some(OrderStatus::Pending),
        mark_completed: state == Some(OrderStatus::Processing),
        mark_cancelled: state == Some(OrderStatus::Processing),
        payment_section: state == Some(OrderStatus::Pending)
            && payment.parsed() == PaymentStatus::Pending,
    }
}

impl EnabledActions {
    pub fn for_order(order: &Order) -> Self {
        enabled_actions(&order.status, &order.payment_status)
    }
}
