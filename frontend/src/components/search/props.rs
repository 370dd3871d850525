use crate::app::{AppContext, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchProps {
    pub context: AppContext,
    pub on_navigate: Callback<Page>,
}
