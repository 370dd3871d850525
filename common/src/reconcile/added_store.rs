//! Records created during the current session.
//!
//! The store is the single writer of session-added crops and varieties and is
//! shared by every screen of the client. An optional [`RecordMirror`] receives
//! a copy of each accepted record for fire-and-forget remote persistence; the
//! local append never waits for it and is never rolled back.

use crate::error::ValidationError;
use crate::model::crop::{is_unselected_region, CropRecord, RecordOrigin};
use crate::model::variety::{ownership_key, VarietyRecord};
use crate::reconcile::source::RecordMirror;
use std::collections::{BTreeMap, HashMap};

#[derive(Default)]
pub struct AddedRecordStore {
    /// Ownership key (`region__crop`) to varieties in insertion order.
    varieties: HashMap<String, Vec<VarietyRecord>>,
    /// Region to crops in insertion order, unique by composite key.
    crops: BTreeMap<String, Vec<CropRecord>>,
    mirror: Option<Box<dyn RecordMirror>>,
}

impl AddedRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mirror(mirror: Box<dyn RecordMirror>) -> Self {
        Self {
            mirror: Some(mirror),
            ..Self::default()
        }
    }

    /// Appends a variety to the `(region, crop)` listing, taking ownership
    /// from the arguments.
    pub fn add_variety(&mut self, region_name: &str, crop_name: &str, mut variety: VarietyRecord) {
        variety.region_name = region_name.to_string();
        variety.crop_name = crop_name.to_string();

        if let Some(mirror) = &self.mirror {
            mirror.mirror_variety(&variety);
        }
        self.varieties
            .entry(ownership_key(region_name, crop_name))
            .or_default()
            .push(variety);
    }

    /// Adds a crop with a detail page to the session.
    ///
    /// Rejected with a warning when no region is selected or the crop name is
    /// blank. Adding a crop whose composite key is already held is accepted
    /// without creating a second entry.
    pub fn add_crop(
        &mut self,
        region_name: &str,
        crop_name: &str,
        season: &str,
        category: &str,
    ) -> Result<(), ValidationError> {
        if is_unselected_region(region_name) {
            log::warn!("rejecting crop '{}' without a selected region", crop_name);
            return Err(ValidationError::MissingRegion);
        }
        if crop_name.trim().is_empty() {
            log::warn!("rejecting crop without a name for {}", region_name);
            return Err(ValidationError::MissingCropName);
        }

        let mut crop = CropRecord::new(region_name, crop_name.trim(), season, category);
        crop.has_detail = true;
        crop.origin = RecordOrigin::Added;

        let crops = self.crops.entry(region_name.to_string()).or_default();
        let key = crop.composite_key();
        if crops.iter().any(|c| c.composite_key() == key) {
            log::debug!("crop {} already added this session", key);
            return Ok(());
        }

        if let Some(mirror) = &self.mirror {
            mirror.mirror_crop(&crop);
        }
        crops.push(crop);
        Ok(())
    }

    pub fn added_varieties(&self, region_name: &str, crop_name: &str) -> &[VarietyRecord] {
        self.varieties
            .get(&ownership_key(region_name, crop_name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All session-added crops, grouped by region.
    pub fn added_crops(&self) -> Vec<CropRecord> {
        self.crops.values().flatten().cloned().collect()
    }

    pub fn added_crops_for(&self, region_name: &str) -> Vec<CropRecord> {
        self.crops.get(region_name).cloned().unwrap_or_default()
    }

    /// Drops an added crop; returns whether it was held.
    pub fn remove_crop(&mut self, region_name: &str, composite_key: &str) -> bool {
        let Some(crops) = self.crops.get_mut(region_name) else {
            return false;
        };
        let before = crops.len();
        crops.retain(|c| c.composite_key() != composite_key);
        let removed = crops.len() != before;
        if crops.is_empty() {
            self.crops.remove(region_name);
        }
        removed
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::crop::{UNSELECTED_REGION, UNSET};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every mirrored identity.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingMirror {
        pub(crate) crops: Rc<RefCell<Vec<String>>>,
        pub(crate) varieties: Rc<RefCell<Vec<String>>>,
    }

    impl RecordMirror for RecordingMirror {
        fn mirror_crop(&self, crop: &CropRecord) {
            self.crops.borrow_mut().push(crop.composite_key());
        }

        fn mirror_variety(&self, variety: &VarietyRecord) {
            self.varieties.borrow_mut().push(variety.variety.clone());
        }
    }

    pub(crate) fn variety(name: &str) -> VarietyRecord {
        VarietyRecord {
            id: "1700000000000".to_string(),
            region_name: String::new(),
            crop_name: String::new(),
            variety: name.to_string(),
            character: "倒れにくい".to_string(),
            sowing: "4月".to_string(),
            nursery: "箱育苗".to_string(),
            harvest: "8月下旬".to_string(),
        }
    }

    #[test]
    fn added_variety_is_listed_for_its_owner() {
        let mut store = AddedRecordStore::new();
        store.add_variety("新潟県", "稲", variety("早生コシヒカリ"));

        let listed = store.added_varieties("新潟県", "稲");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].variety, "早生コシヒカリ");
        assert_eq!(listed[0].owner_key(), "新潟県__稲");
        assert!(store.added_varieties("北海道", "稲").is_empty());
    }

    #[test]
    fn crop_without_region_is_rejected() {
        let mut store = AddedRecordStore::new();
        assert_eq!(
            store.add_crop("", "大豆", UNSET, UNSET),
            Err(ValidationError::MissingRegion)
        );
        assert_eq!(
            store.add_crop(UNSELECTED_REGION, "大豆", UNSET, UNSET),
            Err(ValidationError::MissingRegion)
        );
        assert!(store.added_crops().is_empty());
    }

    #[test]
    fn added_crop_has_detail_and_normalised_fields() {
        let mut store = AddedRecordStore::new();
        store.add_crop("新潟県", "大豆", "", "").unwrap();

        let crops = store.added_crops();
        assert_eq!(crops.len(), 1);
        assert!(crops[0].has_detail);
        assert_eq!(crops[0].origin, RecordOrigin::Added);
        assert_eq!(crops[0].composite_key(), "新潟県_大豆_-_-");
    }

    #[test]
    fn re_adding_the_same_crop_keeps_one_entry() {
        let mirror = RecordingMirror::default();
        let mut store = AddedRecordStore::with_mirror(Box::new(mirror.clone()));
        store.add_crop("新潟県", "大豆", UNSET, UNSET).unwrap();
        store.add_crop("新潟県", "大豆", UNSET, UNSET).unwrap();

        assert_eq!(store.added_crops_for("新潟県").len(), 1);
        assert_eq!(mirror.crops.borrow().len(), 1);
    }

    #[test]
    fn mirror_sees_accepted_records_only() {
        let mirror = RecordingMirror::default();
        let mut store = AddedRecordStore::with_mirror(Box::new(mirror.clone()));
        store.add_variety("新潟県", "稲", variety("新之助"));
        let _ = store.add_crop("", "稲", UNSET, UNSET);
        store.add_crop("新潟県", "稲", UNSET, UNSET).unwrap();

        assert_eq!(*mirror.varieties.borrow(), ["新之助"]);
        assert_eq!(*mirror.crops.borrow(), ["新潟県_稲_-_-"]);
    }

    #[test]
    fn remove_crop_drops_only_matching_key() {
        let mut store = AddedRecordStore::new();
        store.add_crop("新潟県", "大豆", UNSET, UNSET).unwrap();
        store.add_crop("新潟県", "枝豆", UNSET, UNSET).unwrap();

        assert!(store.remove_crop("新潟県", "新潟県_大豆_-_-"));
        assert!(!store.remove_crop("新潟県", "新潟県_大豆_-_-"));
        assert!(!store.remove_crop("北海道", "新潟県_枝豆_-_-"));
        assert_eq!(store.added_crops().len(), 1);
    }
}
