//! Update function of the search screen.
//!
//! Searches and deletes are split around the asynchronous source call: the
//! reconciler hands out a ticket or a delete plan, the source is queried in a
//! `spawn_local` task, and the answer comes back as a message. Answers to a
//! search that has since been superseded or cleared are dropped by the
//! reconciler.

use super::messages::Msg;
use super::state::SearchComponent;
use crate::app::Page;
use crate::components::helpers::show_toast;
use crate::components::register::RegisterMode;
use common::reconcile::{RecordSource, SearchCriteria};
use yew::platform::spawn_local;
use yew::prelude::*;

pub fn update(component: &mut SearchComponent, ctx: &Context<SearchComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetRegion(region) => {
            component.region = region;
            true
        }
        Msg::SetSeason(season) => {
            component.season = season;
            true
        }
        Msg::SetCategory(category) => {
            component.category = category;
            true
        }
        Msg::Search => {
            let criteria = SearchCriteria::region(&component.region)
                .with_season(&component.season)
                .with_category(&component.category);

            let Ok(ticket) = component.reconciler.begin_search(criteria) else {
                return true;
            };

            let source = ctx.props().context.source.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let fetched = source.query_by_region(ticket.region()).await;
                link.send_message(Msg::SearchFinished(ticket, fetched));
            });
            true
        }
        Msg::SearchFinished(ticket, fetched) => {
            let failed = fetched.is_err();
            let session = ctx.props().context.session.borrow();
            let applied = component.reconciler.complete_search(ticket, fetched, &session);
            if applied && failed {
                show_toast("作物データの取得に失敗しました");
            }
            applied
        }
        Msg::Clear => {
            component.region.clear();
            component.season.clear();
            component.category.clear();
            component.reconciler.clear();
            true
        }
        Msg::Paginate(page) => {
            component.reconciler.paginate(page);
            true
        }
        Msg::ToggleSelect(key) => {
            component.reconciler.toggle_select(&key);
            true
        }
        Msg::DeleteSelected => {
            if component.deleting {
                return false;
            }
            let source = ctx.props().context.source.clone();
            let Some(plan) = component.reconciler.begin_bulk_delete(source.is_remote()) else {
                return false;
            };
            if !confirm_delete(plan.targets.len()) {
                return false;
            }

            component.deleting = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let mut failed = Vec::new();
                for id in plan.remote_ids() {
                    if let Err(e) = source.delete_by_id(id).await {
                        log::error!("failed to delete document {}: {}", id, e);
                        failed.push(id.to_string());
                    }
                }
                link.send_message(Msg::DeleteFinished(plan, failed));
            });
            true
        }
        Msg::DeleteFinished(plan, failed) => {
            component.deleting = false;
            let mut session = ctx.props().context.session.borrow_mut();
            let report = component
                .reconciler
                .complete_bulk_delete(plan, &failed, &mut session);

            if report.failed.is_empty() {
                show_toast(&format!("{}件削除しました", report.removed));
            } else {
                show_toast(&format!(
                    "{}件削除しました（{}件は削除できませんでした）",
                    report.removed,
                    report.failed.len()
                ));
            }
            true
        }
        Msg::OpenDetail { region, crop } => {
            ctx.props().on_navigate.emit(Page::Detail { region, crop });
            false
        }
        Msg::Register { region, crop } => {
            ctx.props()
                .on_navigate
                .emit(Page::Register(RegisterMode::Crop { region, crop }));
            false
        }
    }
}

fn confirm_delete(count: usize) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("選択した{}件を削除しますか？", count))
                .ok()
        })
        .unwrap_or(false)
}
