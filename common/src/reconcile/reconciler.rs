//! The search/delete state machine behind the result list.
//!
//! ```text
//! Idle --search--> Searched --clear--> Idle
//!                  Searched --search--> Searched
//! ```
//!
//! Searching is split in two halves so that an event-driven client can run the
//! fetch outside of the state: [`Reconciler::begin_search`] validates the
//! criteria and hands out a [`SearchTicket`], [`Reconciler::complete_search`]
//! applies the fetched records. Every search and every clear bumps a generation
//! counter, and a ticket from an older generation is discarded, so the last
//! request wins regardless of the order responses arrive in. Bulk deletion is
//! split the same way through [`DeletePlan`]. [`Reconciler::search`] and
//! [`Reconciler::bulk_delete`] run both halves against a [`RecordSource`].

use crate::error::{FetchError, ValidationError};
use crate::model::crop::{CropRecord, RecordOrigin};
use crate::reconcile::added_store::AddedRecordStore;
use crate::reconcile::merge::{matches_filters, merge_records};
use crate::reconcile::pagination::{PageWindow, ITEMS_PER_PAGE};
use crate::reconcile::selection::Selection;
use crate::reconcile::source::RecordSource;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No search yet, or cleared.
    Idle,
    /// Results populated, possibly empty.
    Searched,
}

/// Region is required; season and category are optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub region: String,
    pub season: Option<String>,
    pub category: Option<String>,
}

impl SearchCriteria {
    pub fn region(region: &str) -> Self {
        Self {
            region: region.to_string(),
            ..Self::default()
        }
    }

    pub fn with_season(mut self, season: &str) -> Self {
        self.season = Some(season.to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string()).filter(|c| !c.is_empty());
        self
    }
}

/// A validated search waiting for its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    criteria: SearchCriteria,
}

impl SearchTicket {
    pub fn region(&self) -> &str {
        &self.criteria.region
    }
}

/// One selected record resolved against the current result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub key: String,
    pub region_name: String,
    pub composite_key: String,
    pub origin: RecordOrigin,
    /// Set only when the record must be deleted remotely.
    pub remote_id: Option<String>,
}

/// Deletions to issue for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePlan {
    generation: u64,
    pub targets: Vec<DeleteTarget>,
}

impl DeletePlan {
    /// Document ids the caller must delete through the record source.
    pub fn remote_ids(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().filter_map(|t| t.remote_id.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub removed: usize,
    /// Document ids whose remote delete failed; those records stay listed.
    pub failed: Vec<String>,
}

pub struct Reconciler {
    phase: Phase,
    criteria: SearchCriteria,
    validation_error: Option<ValidationError>,
    results: Vec<CropRecord>,
    current_page: usize,
    selection: Selection,
    generation: u64,
    pending: Option<u64>,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconciler {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            criteria: SearchCriteria::default(),
            validation_error: None,
            results: Vec::new(),
            current_page: 1,
            selection: Selection::default(),
            generation: 0,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    /// `true` while a search ticket is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The filtered, merged result set.
    pub fn results(&self) -> &[CropRecord] {
        &self.results
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Starts a search. Fails fast, without touching any source, when no
    /// region is given.
    pub fn begin_search(&mut self, criteria: SearchCriteria) -> Result<SearchTicket, ValidationError> {
        if criteria.region.trim().is_empty() {
            self.generation += 1;
            self.pending = None;
            self.validation_error = Some(ValidationError::MissingRegion);
            self.results.clear();
            self.selection.clear();
            self.phase = Phase::Idle;
            return Err(ValidationError::MissingRegion);
        }

        self.validation_error = None;
        self.generation += 1;
        self.pending = Some(self.generation);
        Ok(SearchTicket {
            generation: self.generation,
            criteria,
        })
    }

    /// Applies the records fetched for `ticket`.
    ///
    /// A fetch failure is logged and shown as an empty result. Returns `false`
    /// when the ticket is stale and nothing changed.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        fetched: Result<Vec<CropRecord>, FetchError>,
        store: &AddedRecordStore,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale search for {} (generation {}, current {})",
                ticket.criteria.region,
                ticket.generation,
                self.generation
            );
            return false;
        }

        let base = fetched.unwrap_or_else(|err| {
            log::error!("failed to fetch crops for {}: {}", ticket.criteria.region, err);
            Vec::new()
        });
        let added = store.added_crops_for(&ticket.criteria.region);
        let criteria = ticket.criteria;

        self.results = merge_records(base, added)
            .into_iter()
            .filter(|r| {
                matches_filters(r, criteria.season.as_deref(), criteria.category.as_deref())
            })
            .collect();
        self.criteria = criteria;
        self.current_page = 1;
        self.selection.clear();
        self.pending = None;
        self.phase = Phase::Searched;
        true
    }

    /// Runs a complete search against `source`.
    pub async fn search<S: RecordSource>(
        &mut self,
        source: &S,
        store: &AddedRecordStore,
        criteria: SearchCriteria,
    ) -> Result<(), ValidationError> {
        let ticket = self.begin_search(criteria)?;
        let fetched = source.query_by_region(ticket.region()).await;
        self.complete_search(ticket, fetched, store);
        Ok(())
    }

    /// Resets criteria, results, paging, selection and validation; any search
    /// still in flight becomes stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.criteria = SearchCriteria::default();
        self.validation_error = None;
        self.results.clear();
        self.current_page = 1;
        self.selection.clear();
        self.phase = Phase::Idle;
    }

    pub fn paginate(&mut self, page: usize) {
        self.current_page = PageWindow::new(self.results.len(), page, ITEMS_PER_PAGE).current_page;
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.results.len(), self.current_page, ITEMS_PER_PAGE)
    }

    /// Records on the current page.
    pub fn page(&self) -> &[CropRecord] {
        &self.results[self.window().range]
    }

    pub fn toggle_select(&mut self, key: &str) -> bool {
        self.selection.toggle(key)
    }

    /// Resolves the selection into deletions. `None` when nothing is selected.
    ///
    /// Only remote-origin identities are routed to the record source, and only
    /// when `remote` is set; everything else is removed locally.
    pub fn begin_bulk_delete(&self, remote: bool) -> Option<DeletePlan> {
        if self.selection.is_empty() {
            return None;
        }

        let targets = self
            .selection
            .iter()
            .filter_map(|key| {
                let record = self.results.iter().find(|r| r.identity() == key)?;
                Some(DeleteTarget {
                    key: key.to_string(),
                    region_name: record.region_name.clone(),
                    composite_key: record.composite_key(),
                    origin: record.origin,
                    remote_id: record.document_id.clone().filter(|_| remote),
                })
            })
            .collect();

        Some(DeletePlan {
            generation: self.generation,
            targets,
        })
    }

    /// Applies a delete plan once the remote deletes in it have been issued.
    ///
    /// Targets whose remote delete failed stay listed. Session-added targets
    /// are dropped from `store` as well; static targets leave the view only.
    pub fn complete_bulk_delete(
        &mut self,
        plan: DeletePlan,
        failed: &[String],
        store: &mut AddedRecordStore,
    ) -> DeleteReport {
        let failed_ids: HashSet<&str> = failed.iter().map(String::as_str).collect();
        let current = plan.generation == self.generation;
        let mut removed: HashSet<String> = HashSet::new();

        for target in plan.targets {
            if target
                .remote_id
                .as_deref()
                .is_some_and(|id| failed_ids.contains(id))
            {
                continue;
            }
            match target.origin {
                RecordOrigin::Added => {
                    store.remove_crop(&target.region_name, &target.composite_key);
                }
                RecordOrigin::Static => {
                    log::info!(
                        "{} removed from the current view only; the bundled dataset is unchanged",
                        target.composite_key
                    );
                }
                RecordOrigin::Remote => {}
            }
            removed.insert(target.key);
        }

        if current {
            self.results.retain(|r| !removed.contains(&r.identity()));
            self.selection.clear();
            self.current_page = self.window().current_page;
        } else {
            log::debug!("results changed while deleting, leaving the current view as is");
        }

        DeleteReport {
            removed: removed.len(),
            failed: failed.to_vec(),
        }
    }

    /// Deletes the selected records through `source`, continuing past failures.
    pub async fn bulk_delete<S: RecordSource>(
        &mut self,
        source: &S,
        store: &mut AddedRecordStore,
    ) -> DeleteReport {
        let Some(plan) = self.begin_bulk_delete(source.is_remote()) else {
            return DeleteReport::default();
        };

        let mut failed = Vec::new();
        for id in plan.remote_ids() {
            if let Err(err) = source.delete_by_id(id).await {
                log::error!("failed to delete document {}: {}", id, err);
                failed.push(id.to_string());
            }
        }
        self.complete_bulk_delete(plan, &failed, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample;
    use crate::dataset::StaticDatasetSource;
    use crate::error::PersistenceError;
    use crate::model::crop::UNSET;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn local() -> StaticDatasetSource {
        StaticDatasetSource::new(sample())
    }

    /// In-memory remote store; ids listed in `failing` refuse to be deleted.
    #[derive(Default)]
    struct FakeRemote {
        records: Vec<CropRecord>,
        failing: Vec<String>,
        unreachable: bool,
        deleted: RefCell<Vec<String>>,
    }

    impl FakeRemote {
        fn with(records: &[(&str, &str, &str)]) -> Self {
            let records = records
                .iter()
                .map(|(id, crop, season)| {
                    let mut record = CropRecord::new("新潟県", crop, season, "野菜");
                    record.document_id = Some(id.to_string());
                    record.origin = RecordOrigin::Remote;
                    record
                })
                .collect();
            Self {
                records,
                ..Self::default()
            }
        }
    }

    impl RecordSource for FakeRemote {
        fn is_remote(&self) -> bool {
            true
        }

        async fn query_by_region(&self, region_name: &str) -> Result<Vec<CropRecord>, FetchError> {
            if self.unreachable {
                return Err(FetchError::Request("connection refused".to_string()));
            }
            Ok(self
                .records
                .iter()
                .filter(|r| r.region_name == region_name)
                .cloned()
                .collect())
        }

        async fn delete_by_id(&self, document_id: &str) -> Result<(), PersistenceError> {
            if self.failing.iter().any(|id| id == document_id) {
                return Err(PersistenceError::Status {
                    status: 503,
                    document_id: document_id.to_string(),
                });
            }
            self.deleted.borrow_mut().push(document_id.to_string());
            Ok(())
        }
    }

    fn crop_names(reconciler: &Reconciler) -> Vec<&str> {
        reconciler.results().iter().map(|r| r.crop_name.as_str()).collect()
    }

    #[test]
    fn local_search_returns_dataset_verbatim() {
        let source = local();
        let store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();

        block_on(reconciler.search(&source, &store, SearchCriteria::region("北海道"))).unwrap();

        assert_eq!(reconciler.phase(), Phase::Searched);
        assert_eq!(reconciler.results(), source.dataset().get_by_region("北海道").as_slice());
    }

    #[test]
    fn repeated_search_is_idempotent() {
        let source = local();
        let mut store = AddedRecordStore::new();
        store.add_crop("北海道", "大豆", UNSET, UNSET).unwrap();
        let mut reconciler = Reconciler::new();
        let criteria = SearchCriteria::region("北海道");

        block_on(reconciler.search(&source, &store, criteria.clone())).unwrap();
        let first = reconciler.results().to_vec();
        block_on(reconciler.search(&source, &store, criteria)).unwrap();

        assert_eq!(reconciler.results(), first.as_slice());
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn missing_region_fails_before_querying() {
        let source = FakeRemote {
            unreachable: true,
            ..FakeRemote::default()
        };
        let store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();

        let result = block_on(reconciler.search(&source, &store, SearchCriteria::region("")));

        assert_eq!(result, Err(ValidationError::MissingRegion));
        assert_eq!(reconciler.validation_error(), Some(&ValidationError::MissingRegion));
        assert_eq!(reconciler.phase(), Phase::Idle);
        assert!(!reconciler.is_loading());
    }

    #[test]
    fn added_record_wins_over_static_record_with_same_key() {
        let source = local();
        let mut store = AddedRecordStore::new();
        store.add_crop("北海道", "小麦", "秋", "穀物").unwrap();
        let mut reconciler = Reconciler::new();

        block_on(reconciler.search(&source, &store, SearchCriteria::region("北海道"))).unwrap();

        let wheat: Vec<_> = reconciler
            .results()
            .iter()
            .filter(|r| r.composite_key() == "北海道_小麦_秋_穀物")
            .collect();
        assert_eq!(wheat.len(), 1);
        assert!(wheat[0].has_detail);
        assert_eq!(wheat[0].origin, RecordOrigin::Added);
        assert_eq!(reconciler.results().len(), 3);
    }

    #[test]
    fn added_records_of_other_regions_are_not_merged() {
        let source = local();
        let mut store = AddedRecordStore::new();
        store.add_crop("新潟県", "大豆", UNSET, UNSET).unwrap();
        let mut reconciler = Reconciler::new();

        block_on(reconciler.search(&source, &store, SearchCriteria::region("北海道"))).unwrap();
        assert!(!crop_names(&reconciler).contains(&"大豆"));
    }

    #[test]
    fn season_filter_never_returns_non_matching_records() {
        let source = local();
        let store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();

        block_on(reconciler.search(
            &source,
            &store,
            SearchCriteria::region("北海道").with_season("春"),
        ))
        .unwrap();

        assert_eq!(crop_names(&reconciler), ["じゃがいも", "玉ねぎ"]);
        assert!(reconciler.results().iter().all(|r| r.season.contains('春')));

        block_on(reconciler.search(
            &source,
            &store,
            SearchCriteria::region("北海道").with_season("秋").with_category("穀物"),
        ))
        .unwrap();
        assert_eq!(crop_names(&reconciler), ["小麦"]);
    }

    #[test]
    fn fetch_failure_degrades_to_empty_searched_state() {
        let source = FakeRemote {
            unreachable: true,
            ..FakeRemote::default()
        };
        let store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();

        block_on(reconciler.search(&source, &store, SearchCriteria::region("新潟県"))).unwrap();

        assert_eq!(reconciler.phase(), Phase::Searched);
        assert!(reconciler.results().is_empty());
        assert_eq!(reconciler.validation_error(), None);
    }

    #[test]
    fn paging_twelve_results() {
        let source = StaticDatasetSource::default();
        let mut store = AddedRecordStore::new();
        for i in 1..=12 {
            store.add_crop("新潟県", &format!("作物{:02}", i), UNSET, UNSET).unwrap();
        }
        let mut reconciler = Reconciler::new();
        block_on(reconciler.search(&source, &store, SearchCriteria::region("新潟県"))).unwrap();

        let names: Vec<_> = reconciler.page().iter().map(|r| r.crop_name.clone()).collect();
        assert_eq!(names, ["作物01", "作物02", "作物03", "作物04", "作物05"]);

        reconciler.paginate(3);
        let window = reconciler.window();
        let names: Vec<_> = reconciler.page().iter().map(|r| r.crop_name.clone()).collect();
        assert_eq!(names, ["作物11", "作物12"]);
        assert_eq!((window.display_start, window.display_end), (11, 12));
        assert_eq!(window.display_end - window.display_start + 1, reconciler.page().len());
    }

    #[test]
    fn new_search_resets_to_first_page() {
        let source = StaticDatasetSource::default();
        let mut store = AddedRecordStore::new();
        for i in 1..=7 {
            store.add_crop("新潟県", &format!("作物{}", i), UNSET, UNSET).unwrap();
        }
        let mut reconciler = Reconciler::new();
        block_on(reconciler.search(&source, &store, SearchCriteria::region("新潟県"))).unwrap();
        reconciler.paginate(2);
        assert_eq!(reconciler.window().current_page, 2);

        block_on(reconciler.search(&source, &store, SearchCriteria::region("新潟県"))).unwrap();
        assert_eq!(reconciler.window().current_page, 1);
    }

    #[test]
    fn clear_returns_to_idle() {
        let source = local();
        let store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();
        block_on(reconciler.search(&source, &store, SearchCriteria::region("北海道"))).unwrap();
        reconciler.toggle_select("北海道_小麦_秋_穀物");

        reconciler.clear();

        assert_eq!(reconciler.phase(), Phase::Idle);
        assert!(reconciler.results().is_empty());
        assert!(reconciler.selection().is_empty());
        assert_eq!(reconciler.criteria(), &SearchCriteria::default());
    }

    #[test]
    fn stale_response_is_discarded() {
        let store = AddedRecordStore::new();
        let dataset = sample();
        let mut reconciler = Reconciler::new();

        let slow = reconciler.begin_search(SearchCriteria::region("北海道")).unwrap();
        let fast = reconciler.begin_search(SearchCriteria::region("新潟県")).unwrap();
        assert!(reconciler.complete_search(fast, Ok(dataset.get_by_region("新潟県")), &store));
        assert!(!reconciler.complete_search(slow, Ok(dataset.get_by_region("北海道")), &store));

        assert_eq!(reconciler.criteria().region, "新潟県");
        assert_eq!(crop_names(&reconciler), ["稲", "枝豆"]);
    }

    #[test]
    fn response_after_clear_does_not_repopulate() {
        let store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();

        let ticket = reconciler.begin_search(SearchCriteria::region("北海道")).unwrap();
        assert!(reconciler.is_loading());
        reconciler.clear();
        assert!(!reconciler.complete_search(ticket, Ok(sample().get_by_region("北海道")), &store));

        assert_eq!(reconciler.phase(), Phase::Idle);
        assert!(reconciler.results().is_empty());
    }

    #[test]
    fn response_after_failed_validation_is_discarded() {
        let store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();

        let ticket = reconciler.begin_search(SearchCriteria::region("北海道")).unwrap();
        assert!(reconciler.begin_search(SearchCriteria::region("")).is_err());
        assert!(!reconciler.is_loading());
        assert!(!reconciler.complete_search(ticket, Ok(sample().get_by_region("北海道")), &store));

        assert_eq!(reconciler.phase(), Phase::Idle);
        assert!(reconciler.results().is_empty());
        assert_eq!(reconciler.validation_error(), Some(&ValidationError::MissingRegion));
    }

    #[test]
    fn local_bulk_delete_removes_selected_keys() {
        let source = local();
        let mut store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();
        block_on(reconciler.search(&source, &store, SearchCriteria::region("北海道"))).unwrap();

        reconciler.toggle_select("北海道_じゃがいも_春_野菜");
        reconciler.toggle_select("北海道_小麦_秋_穀物");
        let report = block_on(reconciler.bulk_delete(&source, &mut store));

        assert_eq!(report.removed, 2);
        assert!(report.failed.is_empty());
        assert_eq!(crop_names(&reconciler), ["玉ねぎ"]);
        assert!(reconciler.selection().is_empty());
    }

    #[test]
    fn bulk_delete_without_selection_is_a_no_op() {
        let source = local();
        let mut store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();
        block_on(reconciler.search(&source, &store, SearchCriteria::region("北海道"))).unwrap();

        assert!(reconciler.begin_bulk_delete(false).is_none());
        assert_eq!(block_on(reconciler.bulk_delete(&source, &mut store)), DeleteReport::default());
        assert_eq!(reconciler.results().len(), 3);
    }

    #[test]
    fn static_records_come_back_on_the_next_search() {
        let source = local();
        let mut store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();
        let criteria = SearchCriteria::region("北海道");
        block_on(reconciler.search(&source, &store, criteria.clone())).unwrap();

        reconciler.toggle_select("北海道_小麦_秋_穀物");
        block_on(reconciler.bulk_delete(&source, &mut store));
        assert_eq!(reconciler.results().len(), 2);

        block_on(reconciler.search(&source, &store, criteria)).unwrap();
        assert_eq!(reconciler.results().len(), 3);
    }

    #[test]
    fn deleting_an_added_record_removes_it_from_the_store() {
        let source = local();
        let mut store = AddedRecordStore::new();
        store.add_crop("北海道", "大豆", UNSET, UNSET).unwrap();
        let mut reconciler = Reconciler::new();
        let criteria = SearchCriteria::region("北海道");
        block_on(reconciler.search(&source, &store, criteria.clone())).unwrap();

        reconciler.toggle_select("北海道_大豆_-_-");
        block_on(reconciler.bulk_delete(&source, &mut store));

        assert!(store.added_crops().is_empty());
        block_on(reconciler.search(&source, &store, criteria)).unwrap();
        assert!(!crop_names(&reconciler).contains(&"大豆"));
    }

    #[test]
    fn remote_delete_keeps_records_whose_delete_failed() {
        let mut source = FakeRemote::with(&[("doc-1", "枝豆", "夏"), ("doc-2", "大根", "秋"), ("doc-3", "白菜", "冬")]);
        source.failing.push("doc-2".to_string());
        let mut store = AddedRecordStore::new();
        let mut reconciler = Reconciler::new();
        block_on(reconciler.search(&source, &store, SearchCriteria::region("新潟県"))).unwrap();

        reconciler.toggle_select("doc-1");
        reconciler.toggle_select("doc-2");
        let report = block_on(reconciler.bulk_delete(&source, &mut store));

        assert_eq!(report.removed, 1);
        assert_eq!(report.failed, ["doc-2"]);
        assert_eq!(*source.deleted.borrow(), ["doc-1"]);
        assert_eq!(crop_names(&reconciler), ["大根", "白菜"]);
        assert!(reconciler.selection().is_empty());
    }

    #[test]
    fn remote_mode_deletes_merged_added_record_by_document_id() {
        let source = FakeRemote::with(&[("doc-1", "枝豆", "夏")]);
        let mut store = AddedRecordStore::new();
        store.add_crop("新潟県", "枝豆", "夏", "野菜").unwrap();
        let mut reconciler = Reconciler::new();
        block_on(reconciler.search(&source, &store, SearchCriteria::region("新潟県"))).unwrap();
        assert_eq!(reconciler.results().len(), 1);

        reconciler.toggle_select("doc-1");
        block_on(reconciler.bulk_delete(&source, &mut store));

        assert_eq!(*source.deleted.borrow(), ["doc-1"]);
        assert!(store.added_crops().is_empty());
        assert!(reconciler.results().is_empty());
    }

    #[test]
    fn delete_completing_after_a_new_search_leaves_view_alone() {
        let source = local();
        let mut store = AddedRecordStore::new();
        store.add_crop("北海道", "大豆", UNSET, UNSET).unwrap();
        let mut reconciler = Reconciler::new();
        block_on(reconciler.search(&source, &store, SearchCriteria::region("北海道"))).unwrap();
        reconciler.toggle_select("北海道_大豆_-_-");
        let plan = reconciler.begin_bulk_delete(false).unwrap();

        block_on(reconciler.search(&source, &store, SearchCriteria::region("北海道"))).unwrap();
        let report = reconciler.complete_bulk_delete(plan, &[], &mut store);

        assert_eq!(report.removed, 1);
        assert!(store.added_crops().is_empty());
        assert_eq!(reconciler.results().len(), 4);
    }

    #[test]
    fn deleting_the_last_page_moves_back_one_page() {
        let source = StaticDatasetSource::default();
        let mut store = AddedRecordStore::new();
        for i in 1..=6 {
            store.add_crop("新潟県", &format!("作物{}", i), UNSET, UNSET).unwrap();
        }
        let mut reconciler = Reconciler::new();
        block_on(reconciler.search(&source, &store, SearchCriteria::region("新潟県"))).unwrap();
        reconciler.paginate(2);
        reconciler.toggle_select("新潟県_作物6_-_-");

        block_on(reconciler.bulk_delete(&source, &mut store));

        assert_eq!(reconciler.window().current_page, 1);
        assert_eq!(reconciler.page().len(), 5);
    }
}
