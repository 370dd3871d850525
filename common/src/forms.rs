//! Validation of the registration forms.
//!
//! A draft is what the user typed; `validate` turns it into the records handed
//! to the [`AddedRecordStore`](crate::reconcile::AddedRecordStore).

use crate::error::ValidationError;
use crate::model::crop::{is_unselected_region, UNSET};
use crate::model::variety::VarietyRecord;
use crate::reconcile::AddedRecordStore;

/// Variety fields shared by both forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarietyFields {
    pub variety: String,
    pub character: String,
    pub sowing: String,
    pub nursery: String,
    pub harvest: String,
}

impl VarietyFields {
    fn into_record(self, id: String, region_name: &str, crop_name: &str) -> VarietyRecord {
        VarietyRecord {
            id,
            region_name: region_name.to_string(),
            crop_name: crop_name.to_string(),
            variety: self.variety.trim().to_string(),
            character: self.character.trim().to_string(),
            sowing: self.sowing.trim().to_string(),
            nursery: self.nursery.trim().to_string(),
            harvest: self.harvest.trim().to_string(),
        }
    }

    fn require(&self, fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ValidationError::MissingField(*name)),
            None => Ok(()),
        }
    }
}

/// Registration of a new crop together with its first variety. The sowing
/// period is optional here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCropDraft {
    pub region_name: String,
    pub crop_name: String,
    pub fields: VarietyFields,
}

impl NewCropDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.crop_name.trim().is_empty() {
            return Err(ValidationError::MissingCropName);
        }
        let f = &self.fields;
        f.require(&[
            ("品種名", f.variety.as_str()),
            ("品種の特徴", f.character.as_str()),
            ("育苗方法", f.nursery.as_str()),
            ("収穫時期", f.harvest.as_str()),
        ])?;
        if is_unselected_region(&self.region_name) {
            return Err(ValidationError::MissingRegion);
        }
        Ok(())
    }

    /// Validates and registers the variety and its crop in `store`.
    pub fn submit(self, id: String, store: &mut AddedRecordStore) -> Result<VarietyRecord, ValidationError> {
        self.validate()?;
        let crop_name = self.crop_name.trim().to_string();
        let record = self.fields.into_record(id, &self.region_name, &crop_name);
        store.add_variety(&self.region_name, &crop_name, record.clone());
        store.add_crop(&self.region_name, &crop_name, UNSET, UNSET)?;
        Ok(record)
    }
}

/// Registration of another variety for a crop that is already listed. Every
/// field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewVarietyDraft {
    pub region_name: String,
    pub crop_name: String,
    pub fields: VarietyFields,
}

impl NewVarietyDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let f = &self.fields;
        f.require(&[
            ("品種名", f.variety.as_str()),
            ("特徴", f.character.as_str()),
            ("種まき時期", f.sowing.as_str()),
            ("育苗方法", f.nursery.as_str()),
            ("収穫時期", f.harvest.as_str()),
        ])?;
        if is_unselected_region(&self.region_name) {
            return Err(ValidationError::MissingRegion);
        }
        if self.crop_name.trim().is_empty() {
            return Err(ValidationError::MissingCropName);
        }
        Ok(())
    }

    pub fn submit(self, id: String, store: &mut AddedRecordStore) -> Result<VarietyRecord, ValidationError> {
        self.validate()?;
        let record = self.fields.into_record(id, &self.region_name, &self.crop_name);
        store.add_variety(&self.region_name, &self.crop_name, record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> VarietyFields {
        VarietyFields {
            variety: "早生コシヒカリ".to_string(),
            character: "早く収穫できる".to_string(),
            sowing: String::new(),
            nursery: "箱育苗".to_string(),
            harvest: "8月下旬".to_string(),
        }
    }

    #[test]
    fn new_crop_registers_variety_and_crop() {
        let mut store = AddedRecordStore::new();
        let draft = NewCropDraft {
            region_name: "新潟県".to_string(),
            crop_name: " 稲 ".to_string(),
            fields: fields(),
        };

        let record = draft.submit("1".to_string(), &mut store).unwrap();

        assert_eq!(record.owner_key(), "新潟県__稲");
        assert_eq!(store.added_varieties("新潟県", "稲"), [record]);
        assert_eq!(store.added_crops()[0].composite_key(), "新潟県_稲_-_-");
    }

    #[test]
    fn new_crop_requires_name_then_fields_then_region() {
        let mut draft = NewCropDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::MissingCropName));

        draft.crop_name = "大豆".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("品種名")));

        draft.fields = fields();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRegion));

        draft.region_name = "未選択".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRegion));
    }

    #[test]
    fn rejected_draft_leaves_store_untouched() {
        let mut store = AddedRecordStore::new();
        let draft = NewCropDraft {
            region_name: String::new(),
            crop_name: "大豆".to_string(),
            fields: fields(),
        };
        assert!(draft.submit("1".to_string(), &mut store).is_err());
        assert!(store.added_crops().is_empty());
        assert!(store.added_varieties("", "大豆").is_empty());
    }

    #[test]
    fn new_variety_requires_sowing() {
        let mut draft = NewVarietyDraft {
            region_name: "北海道".to_string(),
            crop_name: "じゃがいも".to_string(),
            fields: fields(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("種まき時期")));

        draft.fields.sowing = "4月".to_string();
        let mut store = AddedRecordStore::new();
        draft.submit("2".to_string(), &mut store).unwrap();
        assert_eq!(store.added_varieties("北海道", "じゃがいも").len(), 1);
        assert!(store.added_crops().is_empty());
    }
}
