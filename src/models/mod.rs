pub mod cart;
pub mod cuisine;
pub mod demo;
pub mod forms;
pub mod menu;
pub mod order;
pub mod order_stage;
pub mod restaurant;
pub mod route;

pub use cart::{Cart, CartItem, OrderSummary};
pub use cuisine::{CuisineCategory, CuisineFilter, CUISINE_CATEGORIES};
pub use forms::{CheckoutForm, FormErrors, PaymentMethod, ProfileForm};
pub use menu::{AddOn, Customization, ItemSize, MenuCategory, MenuItem, RestaurantMenu};
pub use order::{PastOrder, PastOrderStatus, PlacedOrder};
pub use order_stage::{OrderStage, StepStatus, STAGE_COUNT};
pub use restaurant::Restaurant;
pub use route::Route;
