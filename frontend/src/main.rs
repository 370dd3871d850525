use crate::app::App;

mod app;
mod components;
mod config;
mod net;
mod session;
mod sources;

fn main() {
    console_log::init_with_level(log::Level::Info).ok();
    yew::Renderer::<App>::new().render();
}
