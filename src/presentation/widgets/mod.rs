mod selector;
mod status_bar;

pub use selector::{Selector, SelectorAction, SelectorDropdown, SelectorWidget};
pub use status_bar::{StatusBar, StatusLevel};
