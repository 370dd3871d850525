//! Registration screens.
//!
//! `RegisterMode::Crop` registers a new crop for a prefecture together with
//! its first variety; `RegisterMode::Variety` adds a variety to a crop whose
//! detail page the user came from. Both write into the session store only;
//! in remote mode the store mirrors the records to the document store.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::{RegisterMode, RegisterProps};
pub use state::RegisterComponent;

impl Component for RegisterComponent {
    type Message = Msg;
    type Properties = RegisterProps;

    fn create(ctx: &Context<Self>) -> Self {
        RegisterComponent::new(&ctx.props().mode)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
