//! Order wire types and the canonical status model.
//!
//! The upstream API is loose about status vocabulary: the admin surface says
//! `PROCESSING`/`COMPLETED` while customer views say `CONFIRMED`/`DELIVERED`,
//! and casing varies. The DTOs below keep the raw label exactly as received
//! (so nothing is lost on re-serialization) and map to one canonical enum at
//! the parse boundary. Parsing never fails a deserialization; an
//! unrecognized label simply parses to `None` and every consumer has a
//! default branch for it.

use compact_str::CompactString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::station::StationRef;

/// Canonical fulfillment status of an order.
///
/// Serialized with the admin vocabulary (`"PENDING"`, `"PROCESSING"`,
/// `"COMPLETED"`, `"CANCELLED"`), which is what the status-update endpoint
/// expects. Customer-view labels are accepted on parse only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Parse a raw status label, case-insensitively.
    ///
    /// Accepts the customer-view aliases: `CONFIRMED` maps to
    /// [`Processing`](Self::Processing) and `DELIVERED` to
    /// [`Completed`](Self::Completed). Returns `None` for anything else.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "PROCESSING" | "CONFIRMED" => Some(Self::Processing),
            "COMPLETED" | "DELIVERED" => Some(Self::Completed),
            "CANCELLED" | "CANCELED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// The label sent on the wire for this status.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether the order can leave this status at all.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Advisory transition table. The server stays authoritative; this only
    /// mirrors what the UI is allowed to offer.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Processing | Self::Cancelled)
                | (Self::Processing, Self::Completed | Self::Cancelled)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Whether payment for an order has been captured. Independent of
/// [`OrderStatus`]; a `Processing` order may well still be payment-pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Raw fulfillment-status label as received from the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusLabel(CompactString);

impl StatusLabel {
    pub fn new(label: impl Into<CompactString>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical status, or `None` for an unrecognized label.
    pub fn parsed(&self) -> Option<OrderStatus> {
        OrderStatus::parse(&self.0)
    }
}

impl From<OrderStatus> for StatusLabel {
    fn from(status: OrderStatus) -> Self {
        Self(CompactString::const_new(status.as_wire()))
    }
}

/// Raw payment-status label. Absent on older orders, in which case the API
/// contract says it defaults to `PENDING`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentLabel(CompactString);

impl PaymentLabel {
    pub fn new(label: impl Into<CompactString>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical payment status. Anything that is not `PAID`
    /// (case-insensitively) counts as still pending.
    pub fn parsed(&self) -> PaymentStatus {
        if self.0.trim().eq_ignore_ascii_case("PAID") {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Pending
        }
    }
}

impl Default for PaymentLabel {
    fn default() -> Self {
        Self(CompactString::const_new("PENDING"))
    }
}

impl From<PaymentStatus> for PaymentLabel {
    fn from(status: PaymentStatus) -> Self {
        Self(CompactString::const_new(status.as_wire()))
    }
}

/// Delivery destination: coordinates plus a free-text address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// One fuel delivery request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned opaque id.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fuelType")]
    pub fuel_type: CompactString,
    /// Liters ordered.
    pub quantity: Decimal,
    /// Computed server-side; never derived locally.
    #[serde(rename = "totalCost")]
    pub total_cost: Decimal,
    pub phone: CompactString,
    #[serde(rename = "deliveryAddress")]
    pub delivery_address: DeliveryAddress,
    /// Station the fuel comes from: an id or an embedded summary,
    /// depending on the endpoint.
    #[serde(rename = "fuelStation")]
    pub station: StationRef,
    /// Id of the ordering user. Absent on station-scoped listings.
    #[serde(default)]
    pub user: Option<String>,
    pub status: StatusLabel,
    #[serde(rename = "paymentStatus", default)]
    pub payment_status: PaymentLabel,
    #[serde(rename = "orderDate", with = "time::serde::rfc3339::option", default)]
    pub order_date: Option<OffsetDateTime>,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    #[serde(rename = "updatedAt", with = "time::serde::rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
}

impl Order {
    /// Canonical fulfillment status, `None` when the label is unrecognized.
    pub fn state(&self) -> Option<OrderStatus> {
        self.status.parsed()
    }

    /// Canonical payment status (missing or junk labels count as pending).
    pub fn payment(&self) -> PaymentStatus {
        self.payment_status.parsed()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_admin_vocabulary() {
        assert_eq!(OrderStatus::parse("PENDING"), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::parse("PROCESSING"), Some(OrderStatus::Processing));
        assert_eq!(OrderStatus::parse("COMPLETED"), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::parse("CANCELLED"), Some(OrderStatus::Cancelled));
    }

    #[test]
    fn parses_customer_aliases_and_casing() {
        assert_eq!(OrderStatus::parse("confirmed"), Some(OrderStatus::Processing));
        assert_eq!(OrderStatus::parse("Delivered"), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::parse(" canceled "), Some(OrderStatus::Cancelled));
        assert_eq!(OrderStatus::parse("pending"), Some(OrderStatus::Pending));
    }

    #[test]
    fn unknown_labels_parse_to_none() {
        assert_eq!(OrderStatus::parse(""), None);
        assert_eq!(OrderStatus::parse("SHIPPED"), None);
        assert_eq!(OrderStatus::parse("42"), None);
    }

    #[test]
    fn transition_table() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Processing));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Processing.can_transition_to(Completed));
        assert!(Processing.can_transition_to(Cancelled));

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Pending.is_terminal());
    }

    #[test]
    fn payment_label_defaults_to_pending() {
        assert_eq!(PaymentLabel::default().parsed(), PaymentStatus::Pending);
        assert_eq!(PaymentLabel::new("paid").parsed(), PaymentStatus::Paid);
        assert_eq!(PaymentLabel::new("whatever").parsed(), PaymentStatus::Pending);
    }

    #[test]
    fn status_serializes_with_admin_vocabulary() {
        let json = serde_json::to_string(&OrderStatus::Completed).unwrap();
        assert_eq!(json, "\"COMPLETED\"");
        let json = serde_json::to_string(&PaymentStatus::Paid).unwrap();
        assert_eq!(json, "\"PAID\"");
    }

    #[test]
    fn order_deserializes_from_api_shape() {
        let json = serde_json::json!({
            "_id": "68a1",
            "fuelType": "petrol",
            "quantity": "20",
            "totalCost": "3500",
            "phone": "9800000000",
            "deliveryAddress": {
                "latitude": 27.7,
                "longitude": 85.3,
                "address": "Kathmandu"
            },
            "fuelStation": "66f0",
            "user": "55aa",
            "status": "CONFIRMED",
            "createdAt": "2025-08-01T09:30:00Z"
        });
        let order: Order = serde_json::from_value(json).unwrap();
        assert_eq!(order.state(), Some(OrderStatus::Processing));
        // paymentStatus absent defaults to pending
        assert_eq!(order.payment(), PaymentStatus::Pending);
        assert_eq!(order.status.as_str(), "CONFIRMED");
        assert_eq!(order.station.id(), "66f0");
        assert!(order.created_at.is_some());
        assert!(order.updated_at.is_none());
    }
}
