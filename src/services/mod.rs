pub mod catalog;
pub mod order_service;
pub mod order_tracker;
pub mod ticker;

pub use catalog::{Catalog, ListingQuery, SortBy};
pub use order_service::{place_order, save_profile, CheckoutError};
pub use order_tracker::{start_ticking, AdvanceOutcome, OrderProgressTracker, TrackerState};
pub use ticker::{BrowserTicker, TickFlow, TickHandle, Ticker};
