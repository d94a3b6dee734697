//! Order lifecycle workflows.
//!
//! The workflows own the sequencing rules the UI must respect: which calls
//! happen in which order, what counts as partial failure, and the
//! re-fetch-after-mutation discipline. Local state is never patched
//! optimistically; after every successful mutation the authoritative copy is
//! fetched back from the server.

mod customer_actions;
mod status_update;

pub use customer_actions::{ActionError, OrderActions};
pub use status_update::{StatusMutator, StatusUpdateError, StatusUpdateReport};
