//! Root component: loads the configuration and lookup data once, picks the
//! record source and owns the session store shared by all screens.

use crate::components::detail::DetailComponent;
use crate::components::register::{RegisterComponent, RegisterMode};
use crate::components::search::SearchComponent;
use crate::config::{AppConfig, PULLDOWN_URL, REGION_MAP_URL};
use crate::net::{fetch_json, fetch_text};
use crate::session::SessionStore;
use crate::sources::{CropSource, RemoteMirror, RemoteStoreSource};
use common::dataset::{StaticDataset, StaticDatasetSource};
use common::model::options::{PulldownOptions, RegionMap};
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Screens of the client.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Search,
    Detail { region: String, crop: String },
    Register(RegisterMode),
}

/// Everything a screen needs from the running session.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub options: Rc<PulldownOptions>,
    pub region_map: Rc<RegionMap>,
    pub source: CropSource,
    pub session: SessionStore,
}

pub enum Msg {
    Ready(AppContext),
    Navigate(Page),
}

pub struct App {
    context: Option<AppContext>,
    page: Page,
    loaded: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            context: None,
            page: Page::Search,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Ready(context) => {
                self.context = Some(context);
                true
            }
            Msg::Navigate(page) => {
                if self.page == page {
                    return false;
                }
                self.page = page;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let navigate = ctx.link().callback(Msg::Navigate);
        let home = ctx.link().callback(|_| Msg::Navigate(Page::Search));

        let body = match &self.context {
            None => html! { <p>{"読み込み中…"}</p> },
            Some(context) => match &self.page {
                Page::Search => html! {
                    <SearchComponent context={context.clone()} on_navigate={navigate} />
                },
                Page::Detail { region, crop } => html! {
                    <DetailComponent
                        context={context.clone()}
                        region={region.clone()}
                        crop={crop.clone()}
                        on_navigate={navigate}
                    />
                },
                Page::Register(mode) => html! {
                    <RegisterComponent context={context.clone()} mode={mode.clone()} on_navigate={navigate} />
                },
            },
        };

        html! {
            <>
                <header class="app-header">
                    <strong>{"農作物検索アプリ"}</strong>
                    <button onclick={home}>{"Topページ"}</button>
                </header>
                <main class="page">{ body }</main>
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let context = load_context().await;
                link.send_message(Msg::Ready(context));
            });
        }
    }
}

/// Loads configuration and lookup data. Failures fall back to empty data so
/// the client stays usable.
async fn load_context() -> AppContext {
    let config = AppConfig::load().await;

    let options = fetch_json::<PulldownOptions>(PULLDOWN_URL)
        .await
        .unwrap_or_else(|e| {
            log::error!("cannot load {}: {}", PULLDOWN_URL, e);
            PulldownOptions::default()
        });
    let region_map = fetch_json::<RegionMap>(REGION_MAP_URL)
        .await
        .unwrap_or_else(|e| {
            log::error!("cannot load {}: {}", REGION_MAP_URL, e);
            RegionMap::default()
        });

    let (source, session) = if config.remote_mode {
        let mirror: Box<dyn common::reconcile::RecordMirror> = Box::new(RemoteMirror::new(&config));
        (
            CropSource::Remote(RemoteStoreSource::new(&config)),
            SessionStore::new(Some(mirror)),
        )
    } else {
        let dataset = load_dataset(&config.dataset_url).await;
        (
            CropSource::Static(StaticDatasetSource::new(dataset)),
            SessionStore::new(None),
        )
    };

    AppContext {
        config: Rc::new(config),
        options: Rc::new(options),
        region_map: Rc::new(region_map),
        source,
        session,
    }
}

async fn load_dataset(url: &str) -> StaticDataset {
    let loaded = fetch_text(url)
        .await
        .and_then(|raw| StaticDataset::from_json(&raw));
    loaded.unwrap_or_else(|e| {
        log::error!("作物データの取得に失敗しました ({}): {}", url, e);
        StaticDataset::default()
    })
}
