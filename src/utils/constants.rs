/// Marca del storefront
pub const BRAND_NAME: &str = "ChowNow Express";
pub const BRAND_TAGLINE: &str = "Your favorite local food, delivered fast.";
pub const BRAND_ICON: &str = "🍴";

// Imágenes de reemplazo cuando el catálogo no trae una
pub const RESTAURANT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x225?text=Restaurant";
pub const MENU_ITEM_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300.png?text=ChowNow+Express";
pub const CART_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=1920&h=768&fit=crop&q=80";
