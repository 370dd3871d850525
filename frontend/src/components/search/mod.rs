//! Crop search screen.
//!
//! The user picks a prefecture and optional season/category filters, browses
//! the merged result list five rows at a time and can delete a selection of
//! rows. All list semantics live in the shared `Reconciler`; this component
//! only feeds it user input and the answers of the record source.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SearchProps;
pub use state::SearchComponent;

impl Component for SearchComponent {
    type Message = Msg;
    type Properties = SearchProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SearchComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
