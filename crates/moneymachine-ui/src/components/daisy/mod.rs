//! DaisyUI-styled form controls used by the settings panels.

mod button;
mod foundations;
mod input;
mod select;
mod textarea;
mod toggle;

pub(crate) use button::Button;
pub(crate) use foundations::{DaisyColor, DaisySize, DaisyVariant};
pub(crate) use input::Input;
pub(crate) use select::Select;
pub(crate) use textarea::Textarea;
pub(crate) use toggle::Toggle;
