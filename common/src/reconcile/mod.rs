//! Result reconciliation engine.
//!
//! Three sources feed one result set per region: the bundled dataset (or, in
//! remote mode, the remote document store) and the records added during the
//! session. The `Reconciler` merges them, removes duplicates, filters, pages,
//! and routes bulk deletions back to whichever source owns each record.

pub mod added_store;
pub mod merge;
pub mod pagination;
pub mod reconciler;
pub mod selection;
pub mod source;

pub use added_store::AddedRecordStore;
pub use pagination::{PageWindow, ITEMS_PER_PAGE};
pub use reconciler::{DeletePlan, DeleteReport, Phase, Reconciler, SearchCriteria, SearchTicket};
pub use selection::Selection;
pub use source::{RecordMirror, RecordSource};
