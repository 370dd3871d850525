use common::error::FetchError;
use common::model::crop::CropRecord;
use common::reconcile::{DeletePlan, SearchTicket};

pub enum Msg {
    SetRegion(String),
    SetSeason(String),
    SetCategory(String),
    Search,
    SearchFinished(SearchTicket, Result<Vec<CropRecord>, FetchError>),
    Clear,
    Paginate(usize),
    ToggleSelect(String),
    DeleteSelected,
    /// The plan together with the document ids whose remote delete failed.
    DeleteFinished(DeletePlan, Vec<String>),
    OpenDetail { region: String, crop: String },
    /// New-crop form; `crop` is empty from the criteria card.
    Register { region: String, crop: String },
}
