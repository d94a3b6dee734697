//! Station references as embedded in orders.
//!
//! The order workflow never reads or mutates a station profile; orders only
//! carry a reference to their fuel source, so that reference is all this
//! module models.

use serde::{Deserialize, Serialize};

/// Reference to a station as embedded in an order.
///
/// Listing endpoints return a bare id; the single-order endpoint populates
/// an embedded summary. Untagged so both shapes deserialize transparently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StationRef {
    Id(String),
    Summary(StationSummary),
}

impl StationRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Summary(summary) => &summary.id,
        }
    }
}

/// The station fields embedded into a populated order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}
