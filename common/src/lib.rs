//! Shared model and result reconciliation engine for the crop navigator.
//!
//! The crate is split the same way the client consumes it:
//! - `model`: crop, variety, detail and remote document types shared with the backend.
//! - `dataset`: the bundled, region-keyed static dataset and its record source.
//! - `reconcile`: the Added-Record Store, the `RecordSource` strategy and the
//!   `Reconciler` state machine that merges, filters, pages and deletes.
//! - `forms`: validation of the registration forms before anything is stored.

pub mod dataset;
pub mod error;
pub mod forms;
pub mod model;
pub mod reconcile;
