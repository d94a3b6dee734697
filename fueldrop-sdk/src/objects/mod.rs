//! Wire types shared between the FuelDrop frontends and the order API.
//!
//! Field names follow the remote API exactly (`_id`, `fuelType`,
//! `paymentStatus`, …) via serde renames; everything else in the workspace
//! works with the canonical Rust-side model.

pub mod envelope;
pub mod order;
pub mod payment;
pub mod station;
