//! Update function of the registration screens.
//!
//! Submitting validates the draft and asks for confirmation. Only a confirmed
//! draft is written into the session store, after which the user either
//! continues registering or moves on to the crop's detail page.

use super::messages::Msg;
use super::props::RegisterMode;
use super::state::{RegisterComponent, Step};
use crate::app::Page;
use crate::components::helpers::{new_variety_id, show_toast};
use yew::prelude::*;

pub fn update(
    component: &mut RegisterComponent,
    ctx: &Context<RegisterComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetRegion(region) => {
            component.region = region;
            true
        }
        Msg::SetCropName(name) => {
            component.crop_name = name;
            true
        }
        Msg::SetField(field, value) => {
            *component.field_mut(field) = value;
            true
        }
        Msg::Submit => {
            match component.draft(&ctx.props().mode).validate() {
                Ok(()) => {
                    component.error = None;
                    component.step = Step::Confirming;
                }
                Err(e) => component.error = Some(e),
            }
            true
        }
        Msg::BackToEdit => {
            component.step = Step::Editing;
            true
        }
        Msg::Confirm => {
            let props = ctx.props();
            let draft = component.draft(&props.mode);
            let result = draft.submit(new_variety_id(), &mut props.context.session.borrow_mut());

            match result {
                Ok(record) => {
                    log::info!(
                        "registered variety {} for {} / {}",
                        record.variety,
                        record.region_name,
                        record.crop_name
                    );
                    show_toast("新しい品種を登録しました！");
                    component.step = Step::Registered(record);
                }
                Err(e) => {
                    component.error = Some(e);
                    component.step = Step::Editing;
                }
            }
            true
        }
        Msg::Reset => {
            *component = RegisterComponent::new(&ctx.props().mode);
            true
        }
        Msg::OpenRegistered => {
            if let Step::Registered(record) = &component.step {
                ctx.props().on_navigate.emit(Page::Detail {
                    region: record.region_name.clone(),
                    crop: record.crop_name.clone(),
                });
            }
            false
        }
        Msg::Cancel => {
            let page = match &ctx.props().mode {
                RegisterMode::Crop { .. } => Page::Search,
                RegisterMode::Variety { region, crop } => Page::Detail {
                    region: region.clone(),
                    crop: crop.clone(),
                },
            };
            ctx.props().on_navigate.emit(page);
            false
        }
    }
}
