//! Shared UI components

pub mod error_panel;
pub mod spinner;
pub mod toast;

pub use error_panel::render_error_panel;
pub use spinner::Spinner;
pub use toast::{Toast, ToastManager};
