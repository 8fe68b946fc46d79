pub mod form;
pub mod log_panel;
pub mod preview;

pub use form::{FormState, show_controls};
pub use log_panel::show_log_panel;
pub use preview::{PreviewState, show_preview};
