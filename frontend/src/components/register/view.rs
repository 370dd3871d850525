use super::messages::{Field, Msg};
use super::props::RegisterMode;
use super::state::{RegisterComponent, Step};
use crate::components::helpers::event_value;
use common::model::crop::UNSELECTED_REGION;
use yew::html::Scope;
use yew::prelude::*;

const CROP_FORM_FIELDS: [(Field, &str, &str); 5] = [
    (Field::Variety, "品種名", "例: コシヒカリ"),
    (Field::Character, "品種の特徴", "例: 粘りが強く甘みがある"),
    (Field::Sowing, "種植え時期", "例: 4月中旬"),
    (Field::Nursery, "育苗方法", "例: ハウスで30日育苗"),
    (Field::Harvest, "収穫時期", "例: 9月下旬"),
];

const VARIETY_FORM_FIELDS: [(Field, &str, &str); 5] = [
    (Field::Variety, "品種名", ""),
    (Field::Character, "特徴", ""),
    (Field::Sowing, "種まき時期", ""),
    (Field::Nursery, "育苗方法", ""),
    (Field::Harvest, "収穫時期", ""),
];

pub fn view(component: &RegisterComponent, ctx: &Context<RegisterComponent>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    let (title, header, fields) = match &props.mode {
        RegisterMode::Crop { .. } => (
            "作物新規登録",
            build_crop_header(component, ctx),
            CROP_FORM_FIELDS,
        ),
        RegisterMode::Variety { region, crop } => (
            "品種新規登録",
            html! {
                <>
                    <label>{"都道府県"}</label><span>{ region }</span>
                    <label>{"作物名"}</label><span>{ crop }</span>
                </>
            },
            VARIETY_FORM_FIELDS,
        ),
    };

    html! {
        <div class="register-root">
            <h2>{ title }</h2>
            <div class="register-form">
                { header }
                { for fields.iter().map(|(field, label, placeholder)| text_field(component, link, *field, label, placeholder)) }
            </div>
            {
                match &component.error {
                    Some(error) => html! { <p class="validation-error">{ error.to_string() }</p> },
                    None => Html::default(),
                }
            }
            {
                match &component.step {
                    Step::Editing => html! {
                        <div class="register-actions">
                            <button onclick={link.callback(|_| Msg::Submit)}>{"登録"}</button>
                            <button onclick={link.callback(|_| Msg::Reset)}>{"クリア"}</button>
                            <button onclick={link.callback(|_| Msg::Cancel)}>{"キャンセル"}</button>
                        </div>
                    },
                    Step::Confirming => build_confirmation(component, link, fields),
                    Step::Registered(record) => html! {
                        <div class="register-dialog">
                            <h3>{"登録完了"}</h3>
                            <p>{ format!("新しい品種「{}」を登録しました！", record.variety) }</p>
                            <button onclick={link.callback(|_| Msg::Reset)}>{"続けて登録"}</button>
                            <button onclick={link.callback(|_| Msg::OpenRegistered)}>{"詳細を見る"}</button>
                            <button onclick={link.callback(|_| Msg::Cancel)}>{"検索画面へ戻る"}</button>
                        </div>
                    },
                }
            }
        </div>
    }
}

fn build_confirmation(
    component: &RegisterComponent,
    link: &Scope<RegisterComponent>,
    fields: [(Field, &str, &str); 5],
) -> Html {
    html! {
        <div class="register-dialog">
            <h3>{"登録確認"}</h3>
            <p>{ format!("{} / {}", component.region, component.crop_name) }</p>
            <dl>
                { for fields.iter().map(|(field, label, _)| html! {
                    <>
                        <dt>{ label.to_string() }</dt>
                        <dd>{ component.field(*field).to_string() }</dd>
                    </>
                }) }
            </dl>
            <p>{"この内容で登録しますか？"}</p>
            <button onclick={link.callback(|_| Msg::Confirm)}>{"登録"}</button>
            <button onclick={link.callback(|_| Msg::BackToEdit)}>{"戻る"}</button>
        </div>
    }
}

fn build_crop_header(component: &RegisterComponent, ctx: &Context<RegisterComponent>) -> Html {
    let link = ctx.link();
    let prefectures = &ctx.props().context.options.prefectures;

    html! {
        <>
            <label>{"都道府県"}</label>
            <select onchange={link.callback(|e: Event| Msg::SetRegion(event_value(&e)))}>
                <option value={UNSELECTED_REGION} selected={component.region == UNSELECTED_REGION}>
                    { UNSELECTED_REGION }
                </option>
                { for prefectures.iter().map(|p| html! {
                    <option value={p.clone()} selected={*p == component.region}>{ p }</option>
                }) }
            </select>
            <label>{"作物名"}</label>
            <input
                type="text"
                placeholder="例: 米"
                value={component.crop_name.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetCropName(event_value(&e)))}
            />
        </>
    }
}

fn text_field(
    component: &RegisterComponent,
    link: &Scope<RegisterComponent>,
    field: Field,
    label: &str,
    placeholder: &str,
) -> Html {
    html! {
        <>
            <label>{ label.to_string() }</label>
            <input
                type="text"
                placeholder={placeholder.to_string()}
                value={component.field(field).to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::SetField(field, event_value(&e)))}
            />
        </>
    }
}
