//! One component per settings section.

mod account;
mod appearance;
mod currency;
mod invoicing;
mod language;
mod printer;
mod system;
mod taxes;

pub(crate) use account::AccountPanel;
pub(crate) use appearance::AppearancePanel;
pub(crate) use currency::CurrencyPanel;
pub(crate) use invoicing::InvoicingPanel;
pub(crate) use language::LanguagePanel;
pub(crate) use printer::PrinterPanel;
pub(crate) use system::SystemPanel;
pub(crate) use taxes::TaxesPanel;

use crate::components::daisy::{Button, DaisyColor, DaisyVariant};
use crate::core::options::Choice;
use yew::prelude::*;

/// Callback that applies `apply` to a copy of the draft and stores it back.
fn edit<F, V>(state: &UseStateHandle<F>, apply: impl Fn(&mut F, V) + 'static) -> Callback<V>
where
    F: Clone + 'static,
    V: 'static,
{
    let state = state.clone();
    Callback::from(move |value: V| {
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}

/// Grid of buttons with the stored choice highlighted.
fn choice_buttons<T: Copy + 'static>(
    choices: Vec<Choice<T>>,
    label: impl Fn(&Choice<T>) -> String,
    on_pick: &Callback<T>,
) -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
            {for choices.into_iter().map(|choice| {
                let value = choice.value;
                let variant = if choice.active { DaisyVariant::Solid } else { DaisyVariant::Outline };
                html! {
                    <Button
                        tone={Some(DaisyColor::Primary)}
                        variant={variant}
                        full_width={true}
                        onclick={on_pick.reform(move |_: MouseEvent| value)}
                    >
                        <span>{label(&choice)}</span>
                        {if choice.detail.is_empty() {
                            html! {}
                        } else {
                            html! { <span class="opacity-70 text-xs">{choice.detail.clone()}</span> }
                        }}
                    </Button>
                }
            })}
        </div>
    }
}
