use common::model::detail::{merge_detail_varieties, CropDetail, VarietyEntry};
use common::model::variety::VarietyRecord;

pub enum DetailState {
    Loading,
    Loaded(Option<CropDetail>),
    Failed,
}

impl DetailState {
    pub fn detail(&self) -> Option<&CropDetail> {
        match self {
            DetailState::Loaded(detail) => detail.as_ref(),
            _ => None,
        }
    }

    /// Rows of the listing, `None` while loading. Session-added varieties are
    /// listed even when the detail file could not be read.
    pub fn entries(&self, added: &[VarietyRecord]) -> Option<Vec<VarietyEntry>> {
        match self {
            DetailState::Loading => None,
            DetailState::Loaded(_) | DetailState::Failed => {
                Some(merge_detail_varieties(self.detail(), added))
            }
        }
    }
}

pub struct DetailComponent {
    pub state: DetailState,
    pub requested: bool,
}

impl DetailComponent {
    pub fn new() -> Self {
        Self {
            state: DetailState::Loading,
            requested: false,
        }
    }
}
