pub mod use_form;
pub mod use_order_tracker;
pub mod use_toast;

pub use use_form::{use_form, UseFormHandle, ValidationMode};
pub use use_order_tracker::use_order_tracker;
pub use use_toast::use_toast;
