use super::messages::Field;
use super::props::RegisterMode;
use common::error::ValidationError;
use common::forms::{NewCropDraft, NewVarietyDraft, VarietyFields};
use common::model::crop::UNSELECTED_REGION;
use common::model::variety::VarietyRecord;
use common::reconcile::AddedRecordStore;

/// Where the form is in its edit, confirm, done cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Editing,
    Confirming,
    Registered(VarietyRecord),
}

/// The validated form, one shape per registration mode.
pub enum Draft {
    Crop(NewCropDraft),
    Variety(NewVarietyDraft),
}

impl Draft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Draft::Crop(draft) => draft.validate(),
            Draft::Variety(draft) => draft.validate(),
        }
    }

    pub fn submit(self, id: String, store: &mut AddedRecordStore) -> Result<VarietyRecord, ValidationError> {
        match self {
            Draft::Crop(draft) => draft.submit(id, store),
            Draft::Variety(draft) => draft.submit(id, store),
        }
    }
}

pub struct RegisterComponent {
    pub region: String,
    pub crop_name: String,
    pub fields: VarietyFields,
    pub error: Option<ValidationError>,
    pub step: Step,
}

impl RegisterComponent {
    pub fn new(mode: &RegisterMode) -> Self {
        let (region, crop_name) = match mode {
            RegisterMode::Crop { region, crop } if !region.is_empty() => (region.clone(), crop.clone()),
            RegisterMode::Crop { crop, .. } => (UNSELECTED_REGION.to_string(), crop.clone()),
            RegisterMode::Variety { region, crop } => (region.clone(), crop.clone()),
        };
        Self {
            region,
            crop_name,
            fields: VarietyFields::default(),
            error: None,
            step: Step::Editing,
        }
    }

    /// The current input as a draft. A variety is always registered for the
    /// crop the screen was opened for.
    pub fn draft(&self, mode: &RegisterMode) -> Draft {
        match mode {
            RegisterMode::Crop { .. } => Draft::Crop(NewCropDraft {
                region_name: self.region.clone(),
                crop_name: self.crop_name.clone(),
                fields: self.fields.clone(),
            }),
            RegisterMode::Variety { region, crop } => Draft::Variety(NewVarietyDraft {
                region_name: region.clone(),
                crop_name: crop.clone(),
                fields: self.fields.clone(),
            }),
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Variety => &mut self.fields.variety,
            Field::Character => &mut self.fields.character,
            Field::Sowing => &mut self.fields.sowing,
            Field::Nursery => &mut self.fields.nursery,
            Field::Harvest => &mut self.fields.harvest,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Variety => &self.fields.variety,
            Field::Character => &self.fields.character,
            Field::Sowing => &self.fields.sowing,
            Field::Nursery => &self.fields.nursery,
            Field::Harvest => &self.fields.harvest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop_mode(region: &str, crop: &str) -> RegisterMode {
        RegisterMode::Crop {
            region: region.to_string(),
            crop: crop.to_string(),
        }
    }

    fn fill(component: &mut RegisterComponent) {
        *component.field_mut(Field::Variety) = "エンレイ".to_string();
        *component.field_mut(Field::Character) = "豆腐や味噌向き".to_string();
        *component.field_mut(Field::Nursery) = "直播き".to_string();
        *component.field_mut(Field::Harvest) = "10月".to_string();
    }

    #[test]
    fn row_registration_prefills_region_and_crop() {
        let component = RegisterComponent::new(&crop_mode("新潟県", "大豆"));
        assert_eq!(component.region, "新潟県");
        assert_eq!(component.crop_name, "大豆");
        assert_eq!(component.step, Step::Editing);
    }

    #[test]
    fn criteria_registration_starts_unselected() {
        let component = RegisterComponent::new(&crop_mode("", ""));
        assert_eq!(component.region, UNSELECTED_REGION);
        assert!(component.crop_name.is_empty());
    }

    #[test]
    fn crop_draft_validates_before_touching_the_store() {
        let mode = crop_mode("新潟県", "大豆");
        let mut component = RegisterComponent::new(&mode);
        assert!(component.draft(&mode).validate().is_err());

        fill(&mut component);
        let draft = component.draft(&mode);
        assert_eq!(draft.validate(), Ok(()));

        let mut store = AddedRecordStore::new();
        let record = draft.submit("variety-1".to_string(), &mut store).unwrap();
        assert_eq!(record.crop_name, "大豆");
        assert_eq!(store.added_varieties("新潟県", "大豆").len(), 1);
        assert_eq!(store.added_crops_for("新潟県").len(), 1);
    }

    #[test]
    fn variety_draft_keeps_the_opened_crop() {
        let mode = RegisterMode::Variety {
            region: "北海道".to_string(),
            crop: "じゃがいも".to_string(),
        };
        let mut component = RegisterComponent::new(&mode);
        component.crop_name = "別の作物".to_string();
        fill(&mut component);
        *component.field_mut(Field::Sowing) = "4月下旬".to_string();

        let mut store = AddedRecordStore::new();
        let record = component
            .draft(&mode)
            .submit("variety-2".to_string(), &mut store)
            .unwrap();
        assert_eq!(record.crop_name, "じゃがいも");
        assert!(store.added_crops().is_empty());
    }
}
