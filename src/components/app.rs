use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{Footer, Header, ToastProvider};
use crate::context::catalog::CatalogContext;
use crate::context::navigation::NavigationContext;
use crate::models::cart::Cart;
use crate::models::route::Route;
use crate::services::catalog::Catalog;
use crate::views::{CheckoutPage, HomePage, OrderStatusProfilePage, RestaurantListingPage, RestaurantMenuPage};

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_path(&hash))
        .unwrap_or_default()
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state_eq(current_route);
    let catalog = use_memo((), |_| CatalogContext::new(Catalog::demo()));
    // Un único carrito para la carta y el checkout
    let cart: Rc<Cart> = use_memo(catalog.clone(), |ctx| ctx.catalog.cart.clone());

    // Back/forward y enlaces con href="#/..."
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
                route.set(current_route());
            });

            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref()) {
                    log::error!("❌ No se pudo escuchar hashchange: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    if let Err(e) = window.remove_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref()) {
                        log::warn!("⚠️ No se pudo quitar el listener de hashchange: {:?}", e);
                    }
                }
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            log::info!("🧭 Navegando a {}", next.path());
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_hash(&next.path()) {
                    log::warn!("⚠️ No se pudo actualizar el hash: {:?}", e);
                }
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            route.set(next);
        })
    };

    let navigation = NavigationContext {
        route: (*route).clone(),
        navigate,
    };

    let page = match &*route {
        Route::Home => html! { <HomePage /> },
        Route::RestaurantListing { query } => html! { <RestaurantListingPage query={query.clone()} /> },
        Route::RestaurantMenu { restaurant_id } => html! {
            <RestaurantMenuPage restaurant_id={restaurant_id.clone()} cart={cart.clone()} />
        },
        Route::Checkout => html! { <CheckoutPage cart={cart.clone()} /> },
        Route::OrderStatusProfile => html! { <OrderStatusProfilePage /> },
    };

    html! {
        <ContextProvider<CatalogContext> context={(*catalog).clone()}>
            <ContextProvider<NavigationContext> context={navigation}>
                <ToastProvider>
                    <div class="app-shell">
                        <Header cart_count={cart.item_count()} />
                        <main class="app-main">{page}</main>
                        <Footer />
                    </div>
                </ToastProvider>
            </ContextProvider<NavigationContext>>
        </ContextProvider<CatalogContext>>
    }
}
