pub mod catalog;
pub mod navigation;
pub mod toast;

pub use catalog::{use_catalog, CatalogContext};
pub use navigation::{use_navigator, use_route, NavigationContext};
pub use toast::{Toast, ToastAction, ToastContext, ToastQueue, ToastVariant};
