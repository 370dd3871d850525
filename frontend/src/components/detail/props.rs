use crate::app::{AppContext, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DetailProps {
    pub context: AppContext,
    pub region: String,
    pub crop: String,
    pub on_navigate: Callback<Page>,
}
