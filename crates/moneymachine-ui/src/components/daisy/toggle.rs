use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToggleProps {
    #[prop_or_default]
    pub(crate) label: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) checked: bool,
    #[prop_or_default]
    pub(crate) onchange: Callback<bool>,
}

#[function_component(Toggle)]
pub(crate) fn toggle(props: &ToggleProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };

    html! {
        <label class="label cursor-pointer gap-2">
            {props.label.clone().map(|text| html! { <span>{text}</span> }).unwrap_or_default()}
            <input
                type="checkbox"
                class="toggle toggle-primary"
                checked={props.checked}
                onchange={onchange}
            />
        </label>
    }
}
