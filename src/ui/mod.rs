//! Panels and widgets. Everything here draws into a `Ui` handed down from
//! the application frame and mutates [`crate::state::AppState`] directly.

pub mod panels;
pub mod results;
