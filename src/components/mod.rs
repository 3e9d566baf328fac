pub mod app;
pub mod cart_summary;
pub mod cuisine_filter;
pub mod footer;
pub mod form_field;
pub mod header;
pub mod live_order_tracker;
pub mod menu_item_card;
pub mod restaurant_card;
pub mod toaster;

pub use app::App;
pub use cart_summary::CartSummary;
pub use cuisine_filter::CuisineCategoryFilter;
pub use footer::Footer;
pub use form_field::FormField;
pub use header::Header;
pub use live_order_tracker::LiveOrderTracker;
pub use menu_item_card::MenuItemCard;
pub use restaurant_card::RestaurantCard;
pub use toaster::ToastProvider;
