use super::messages::Msg;
use super::state::{DetailComponent, DetailState};
use crate::app::Page;
use crate::components::register::RegisterMode;
use common::model::detail::VarietyEntry;
use yew::prelude::*;

pub fn view(component: &DetailComponent, ctx: &Context<DetailComponent>) -> Html {
    let props = ctx.props();
    let link = ctx.link();

    let body = build_body(&component.state, ctx);

    let register = Page::Register(RegisterMode::Variety {
        region: props.region.clone(),
        crop: props.crop.clone(),
    });

    html! {
        <div class="detail-root">
            <h2>{ format!("{}（{}）の代表的な品種", props.crop, props.region) }</h2>
            { body }
            <div class="detail-actions">
                <button onclick={link.callback(|_| Msg::Navigate(Page::Search))}>{"戻る"}</button>
                <button onclick={link.callback(move |_| Msg::Navigate(register.clone()))}>{"品種新規登録"}</button>
            </div>
        </div>
    }
}

fn build_body(state: &DetailState, ctx: &Context<DetailComponent>) -> Html {
    let props = ctx.props();
    let session = props.context.session.borrow();
    let Some(entries) = state.entries(session.added_varieties(&props.region, &props.crop)) else {
        return html! { <p>{"読み込み中…"}</p> };
    };

    let notice = match state {
        DetailState::Failed => html! { <p class="validation-error">{"データが読み込めませんでした"}</p> },
        _ if entries.is_empty() => html! { <p>{"作物データが見つかりません"}</p> },
        _ => Html::default(),
    };
    let summary = match state.detail() {
        Some(d) => html! { <p>{ format!("季節: {} / カテゴリ: {}", d.season, d.category) }</p> },
        None => Html::default(),
    };

    html! {
        <>
            { notice }
            { summary }
            { for entries.iter().map(variety_card) }
        </>
    }
}

fn variety_card(entry: &VarietyEntry) -> Html {
    let notes = entry.notes.clone().unwrap_or_default();
    html! {
        <div class={classes!("variety-card", entry.added.then_some("added"))}>
            <h3>{ &entry.name }</h3>
            {
                match &entry.character {
                    Some(character) => html! { <p>{ character }</p> },
                    None => Html::default(),
                }
            }
            <dl>
                <dt>{"種植え時期"}</dt><dd>{ notes.sowing }</dd>
                <dt>{"育苗方法"}</dt><dd>{ notes.nursery }</dd>
                <dt>{"収穫時期"}</dt><dd>{ notes.harvest }</dd>
            </dl>
        </div>
    }
}
