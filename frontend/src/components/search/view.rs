//! View of the search screen: the criteria card, the result table with its
//! selection checkboxes, and the pager.

use super::messages::Msg;
use super::state::SearchComponent;
use crate::components::helpers::event_value;
use common::model::crop::{CropRecord, MonthRange, UNSET};
use common::reconcile::Phase;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &SearchComponent, ctx: &Context<SearchComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="search-root">
            <h2>{"検索条件"}</h2>
            { build_criteria(component, ctx) }
            {
                if component.reconciler.is_loading() {
                    html! { <p>{"検索中…"}</p> }
                } else if component.reconciler.phase() == Phase::Searched {
                    build_results(component, link)
                } else {
                    Html::default()
                }
            }
        </div>
    }
}

fn build_criteria(component: &SearchComponent, ctx: &Context<SearchComponent>) -> Html {
    let link = ctx.link();
    let context = &ctx.props().context;
    let climate = context.region_map.get(&component.region).cloned();
    let region = component.region.clone();

    html! {
        <>
            <div class="search-form">
                <label>{"都道府県"}</label>
                <div>
                    { select_box(&context.options.prefectures, &component.region, "選択してください",
                        link.callback(|e: Event| Msg::SetRegion(event_value(&e)))) }
                    {
                        match climate {
                            Some(label) => html! { <span class="climate-label">{ format!(" 地域: {}", label) }</span> },
                            None => Html::default(),
                        }
                    }
                </div>

                <label>{"季節"}</label>
                { select_box(&context.options.seasons, &component.season, "すべて",
                    link.callback(|e: Event| Msg::SetSeason(event_value(&e)))) }

                <label>{"カテゴリ"}</label>
                { select_box(&context.options.categories, &component.category, "すべて",
                    link.callback(|e: Event| Msg::SetCategory(event_value(&e)))) }
            </div>

            {
                match component.reconciler.validation_error() {
                    Some(error) => html! { <p class="validation-error">{ error.to_string() }</p> },
                    None => Html::default(),
                }
            }

            <div class="search-actions">
                <button onclick={link.callback(|_| Msg::Search)}>{"検索"}</button>
                <button onclick={link.callback(|_| Msg::Clear)}>{"クリア"}</button>
                <button onclick={link.callback(move |_| Msg::Register {
                    region: region.clone(),
                    crop: String::new(),
                })}>{"新規作成"}</button>
            </div>
        </>
    }
}

fn select_box(choices: &[String], current: &str, placeholder: &str, onchange: Callback<Event>) -> Html {
    html! {
        <select {onchange}>
            <option value="" selected={current.is_empty()}>{ placeholder }</option>
            { for choices.iter().map(|choice| html! {
                <option value={choice.clone()} selected={choice == current}>{ choice }</option>
            }) }
        </select>
    }
}

fn build_results(component: &SearchComponent, link: &Scope<SearchComponent>) -> Html {
    let reconciler = &component.reconciler;
    let window = reconciler.window();

    if window.is_empty() {
        return html! { <p>{"該当する作物がありません"}</p> };
    }

    let selected = reconciler.selection().len();
    html! {
        <div class="results">
            <h2>{"検索結果"}</h2>
            <p>{ format!("{}件中 {}〜{}件表示中", reconciler.results().len(), window.display_start, window.display_end) }</p>
            <table class="results-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>{"作物名"}</th>
                        <th>{"季節"}</th>
                        <th>{"カテゴリ"}</th>
                        <th>{"種植え時期"}</th>
                        <th>{"収穫時期"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for reconciler.page().iter().map(|record| build_row(component, record, link)) }
                </tbody>
            </table>
            { build_pager(window.current_page, window.total_pages, link) }
            <div class="delete-actions">
                <button
                    disabled={selected == 0 || component.deleting}
                    onclick={link.callback(|_| Msg::DeleteSelected)}
                >
                    { format!("選択した作物を削除 ({})", selected) }
                </button>
            </div>
        </div>
    }
}

fn build_row(component: &SearchComponent, record: &CropRecord, link: &Scope<SearchComponent>) -> Html {
    let key = record.identity();
    let checked = component.reconciler.selection().contains(&key);
    let on_toggle = link.callback(move |_| Msg::ToggleSelect(key.clone()));

    let region = record.region_name.clone();
    let crop = record.crop_name.clone();
    let action = if record.has_detail {
        html! {
            <button onclick={link.callback(move |_| Msg::OpenDetail {
                region: region.clone(),
                crop: crop.clone(),
            })}>{"詳細"}</button>
        }
    } else {
        html! {
            <button onclick={link.callback(move |_| Msg::Register {
                region: region.clone(),
                crop: crop.clone(),
            })}>{"新規作成"}</button>
        }
    };

    html! {
        <tr>
            <td><input type="checkbox" {checked} onchange={on_toggle} /></td>
            <td>{ &record.crop_name }</td>
            <td>{ &record.season }</td>
            <td>{ &record.category }</td>
            <td>{ month_range(record.sowing_range) }</td>
            <td>{ month_range(record.harvest_range) }</td>
            <td>{ action }</td>
        </tr>
    }
}

fn month_range(range: Option<MonthRange>) -> String {
    match range {
        Some(r) if r.start == r.end => format!("{}月", r.start),
        Some(r) => format!("{}月〜{}月", r.start, r.end),
        None => UNSET.to_string(),
    }
}

fn build_pager(current: usize, total: usize, link: &Scope<SearchComponent>) -> Html {
    if total <= 1 {
        return Html::default();
    }
    html! {
        <div class="pagination">
            <button disabled={current <= 1} onclick={link.callback(move |_| Msg::Paginate(current.saturating_sub(1)))}>{"‹"}</button>
            { for (1..=total).map(|page| html! {
                <button
                    class={classes!((page == current).then_some("current"))}
                    onclick={link.callback(move |_| Msg::Paginate(page))}
                >
                    { page }
                </button>
            }) }
            <button disabled={current >= total} onclick={link.callback(move |_| Msg::Paginate(current + 1))}>{"›"}</button>
        </div>
    }
}
