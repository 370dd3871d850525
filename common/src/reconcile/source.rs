//! Seams between the engine and the outside world.
//!
//! The record source is chosen once at startup: the bundled dataset in local
//! mode or the remote document store in remote mode. The Reconciler only talks
//! to the chosen `RecordSource` and never branches on the mode itself, except
//! to skip remote deletes for records that have no remote identity.

use crate::error::{FetchError, PersistenceError};
use crate::model::crop::CropRecord;
use crate::model::variety::VarietyRecord;

/// Source of truth for the crops of a region.
///
/// The client runs on a single-threaded event loop, so the returned futures
/// are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    /// `true` when records carry a remote `document_id` that can be deleted.
    fn is_remote(&self) -> bool;

    /// Records of one region. Remote records carry their `document_id`.
    async fn query_by_region(&self, region_name: &str) -> Result<Vec<CropRecord>, FetchError>;

    async fn delete_by_id(&self, document_id: &str) -> Result<(), PersistenceError>;
}

/// Fire-and-forget persistence of session-added records.
///
/// Implementations must not block and must not report failures back to the
/// store: local state stays the source of truth for the session.
pub trait RecordMirror {
    fn mirror_crop(&self, crop: &CropRecord);

    fn mirror_variety(&self, variety: &VarietyRecord);
}
