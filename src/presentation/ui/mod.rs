//! UI screens.

mod app;
mod home_screen;
mod notification_popup;

pub use app::App;
pub use home_screen::{HomeAction, HomeFocus, HomeScreen};
pub use notification_popup::NotificationPopup;
