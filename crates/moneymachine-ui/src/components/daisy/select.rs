use super::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    #[prop_or_default]
    pub(crate) options: Vec<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub(crate) value: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) placeholder: Option<AttrValue>,
    #[prop_or(DaisySize::Md)]
    pub(crate) size: DaisySize,
    #[prop_or_default]
    pub(crate) id: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onchange: Callback<AttrValue>,
}

#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let size = props.size.with_prefix("select");
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                onchange.emit(target.value().into());
            }
        })
    };

    html! {
        <select
            class={classes!("select", size, props.class.clone())}
            id={props.id.clone()}
            value={props.value.clone()}
            onchange={onchange}
        >
            {props.placeholder.clone().map(|text| html!{
                <option selected={props.value.is_none()} value="">
                    {text}
                </option>
            }).unwrap_or_default()}
            {for props.options.iter().map(|(value, label)| {
                let selected = props.value.as_ref().is_some_and(|v| v == value);
                html! { <option value={value.clone()} selected={selected}>{label.clone()}</option> }
            })}
        </select>
    }
}
