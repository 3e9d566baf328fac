use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::navigation::{use_navigator, use_route};
use crate::models::route::Route;
use crate::utils::constants::{BRAND_ICON, BRAND_NAME};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or(0)]
    pub cart_count: u32,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let navigate = use_navigator();
    let current = use_route();
    let search_ref = use_node_ref();

    use_effect_with((), |_| {
        log::info!("📄 Header cargado");
        || ()
    });

    let go = |route: Route| {
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(route.clone());
        })
    };

    let on_search = {
        let navigate = navigate.clone();
        let search_ref = search_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = search_ref.cast::<HtmlInputElement>() {
                navigate.emit(Route::search(&input.value()));
            }
        })
    };

    html! {
        <header class="site-header">
            <div class="container header-inner">
                <a href={Route::Home.path()} class="brand" onclick={go(Route::Home)}>
                    <span class="brand-icon">{BRAND_ICON}</span>
                    <span class="brand-name">{BRAND_NAME}</span>
                </a>

                <form class="header-search" onsubmit={on_search}>
                    <span class="search-icon">{"🔍"}</span>
                    <input
                        ref={search_ref}
                        type="search"
                        class="input"
                        placeholder="Search for restaurants or dishes..."
                    />
                </form>

                <nav class="header-actions">
                    <a
                        href={Route::OrderStatusProfile.path()}
                        class={nav_link_class(&current, &Route::OrderStatusProfile)}
                        aria-current={is_current(&current, &Route::OrderStatusProfile).then_some("page")}
                        onclick={go(Route::OrderStatusProfile)}
                    >
                        {"👤"}
                        <span class="sr-only">{"Profile"}</span>
                    </a>
                    <a
                        href={Route::Checkout.path()}
                        class={nav_link_class(&current, &Route::Checkout)}
                        aria-current={is_current(&current, &Route::Checkout).then_some("page")}
                        onclick={go(Route::Checkout)}
                    >
                        {"🛒"}
                        if props.cart_count > 0 {
                            <span class="cart-count">{props.cart_count}</span>
                        }
                        <span class="sr-only">{"Cart"}</span>
                    </a>
                </nav>
            </div>
        </header>
    }
}

fn is_current(current: &Route, target: &Route) -> bool {
    current == target
}

/// Resalta el enlace de la página activa
fn nav_link_class(current: &Route, target: &Route) -> Classes {
    classes!(
        "btn",
        "btn-ghost",
        "btn-icon",
        is_current(current, target).then_some("active")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_nav_link_follows_route() {
        let on_checkout = nav_link_class(&Route::Checkout, &Route::Checkout);
        assert!(on_checkout.contains("active"));
        assert!(on_checkout.contains("btn-icon"));

        let elsewhere = nav_link_class(&Route::Home, &Route::Checkout);
        assert!(!elsewhere.contains("active"));
        assert!(!is_current(&Route::Checkout, &Route::OrderStatusProfile));
    }
}
