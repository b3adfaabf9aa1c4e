use crate::components::icon::FeatherIcon;
use moneymachine_config::SectionDescriptor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SectionCardProps {
    pub(crate) descriptor: SectionDescriptor,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Card framing the active panel with its registry title and summary.
#[function_component(SectionCard)]
pub(crate) fn section_card(props: &SectionCardProps) -> Html {
    let descriptor = props.descriptor;
    html! {
        <article class="card bg-base-200 settings-card" id={format!("settings-{}", descriptor.id)}>
            <div class="card-body gap-4">
                <header class="flex items-start gap-3">
                    <FeatherIcon name={descriptor.icon} />
                    <div>
                        <h2 class="card-title">{descriptor.title}</h2>
                        <p class="text-sm opacity-70">{descriptor.summary}</p>
                    </div>
                </header>
                { for props.children.iter() }
            </div>
        </article>
    }
}
