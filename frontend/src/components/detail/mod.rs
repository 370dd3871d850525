//! Crop detail screen: the representative varieties of one crop in one
//! prefecture, followed by the varieties registered during the session.

use crate::net::fetch_json;
use common::model::detail::{detail_file_name, CropDetailFile};
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod view;

pub use messages::Msg;
pub use props::DetailProps;
pub use state::{DetailComponent, DetailState};

impl Component for DetailComponent {
    type Message = Msg;
    type Properties = DetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DetailComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(detail) => {
                self.state = DetailState::Loaded(detail);
                true
            }
            Msg::Failed => {
                self.state = DetailState::Failed;
                true
            }
            Msg::Navigate(page) => {
                ctx.props().on_navigate.emit(page);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.requested {
            return;
        }
        self.requested = true;

        let props = ctx.props();
        let Some(file_name) = detail_file_name(&props.region) else {
            ctx.link().send_message(Msg::Loaded(None));
            return;
        };

        let url = props.context.config.detail_url(&file_name);
        let crop = props.crop.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match fetch_json::<CropDetailFile>(&url).await {
                Ok(mut file) => link.send_message(Msg::Loaded(file.remove(&crop))),
                Err(e) => {
                    log::error!("cannot load {}: {}", url, e);
                    link.send_message(Msg::Failed);
                }
            }
        });
    }
}
