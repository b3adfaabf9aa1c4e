use crate::components::icon::FeatherIcon;
use crate::core::menu::MenuEntry;
use moneymachine_config::SectionId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsMenuProps {
    pub(crate) entries: Vec<MenuEntry>,
    pub(crate) on_select: Callback<SectionId>,
}

/// Side menu listing every section.
#[function_component(SettingsMenu)]
pub(crate) fn settings_menu(props: &SettingsMenuProps) -> Html {
    html! {
        <nav class="settings-menu" aria-label="settings">
            <ul class="menu bg-base-200 rounded-box w-72">
                {for props.entries.iter().map(|entry| {
                    let id = entry.id;
                    let onclick = props.on_select.reform(move |_: MouseEvent| id);
                    html! {
                        <li key={entry.id.as_str()}>
                            <button
                                type="button"
                                class={classes!("flex", "items-start", "gap-3", entry.active.then_some("menu-active"))}
                                aria-current={entry.active.then_some("page")}
                                onclick={onclick}
                            >
                                <FeatherIcon name={entry.icon} />
                                <span class="flex flex-col text-left">
                                    <span class="font-medium">{entry.title}</span>
                                    <span class="text-xs opacity-60">{entry.description}</span>
                                </span>
                            </button>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
