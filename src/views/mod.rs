pub mod checkout;
pub mod home;
pub mod order_status_profile;
pub mod restaurant_listing;
pub mod restaurant_menu;

pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use order_status_profile::OrderStatusProfilePage;
pub use restaurant_listing::RestaurantListingPage;
pub use restaurant_menu::RestaurantMenuPage;
