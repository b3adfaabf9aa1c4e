use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextareaProps {
    #[prop_or_default]
    pub(crate) value: AttrValue,
    #[prop_or_default]
    pub(crate) placeholder: Option<AttrValue>,
    #[prop_or(3u32)]
    pub(crate) rows: u32,
    #[prop_or_default]
    pub(crate) oninput: Callback<String>,
}

#[function_component(Textarea)]
pub(crate) fn textarea(props: &TextareaProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                oninput.emit(input.value());
            }
        })
    };
    html! {
        <textarea
            class="textarea textarea-md w-full"
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            rows={props.rows.to_string()}
            oninput={oninput}
        />
    }
}
