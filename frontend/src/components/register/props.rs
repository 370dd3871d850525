use crate::app::{AppContext, Page};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterMode {
    /// New crop. `region` and `crop` prefill the form and may be empty.
    Crop { region: String, crop: String },
    /// New variety of an existing crop.
    Variety { region: String, crop: String },
}

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    pub context: AppContext,
    pub mode: RegisterMode,
    pub on_navigate: Callback<Page>,
}
