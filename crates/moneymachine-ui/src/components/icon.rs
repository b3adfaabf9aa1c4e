use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FeatherIconProps {
    pub(crate) name: &'static str,
}

/// Placeholder element replaced by the feather icon script.
#[function_component(FeatherIcon)]
pub(crate) fn feather_icon(props: &FeatherIconProps) -> Html {
    html! {
        <i class="feather-icon" data-feather={props.name} aria-hidden="true"></i>
    }
}
