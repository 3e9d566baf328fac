use std::collections::BTreeSet;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::{CartSummary, MenuItemCard};
use crate::context::catalog::use_catalog;
use crate::models::cart::Cart;

#[derive(Properties, PartialEq)]
pub struct RestaurantMenuProps {
    pub restaurant_id: String,
    pub cart: Rc<Cart>,
}

#[function_component(RestaurantMenuPage)]
pub fn restaurant_menu_page(props: &RestaurantMenuProps) -> Html {
    let catalog = use_catalog();
    let menu = catalog.menu_for(&props.restaurant_id).cloned();

    // Categorías abiertas del acordeón (varias a la vez)
    let open = {
        let defaults = menu.as_ref().map(|m| m.default_open_categories()).unwrap_or_default();
        use_state(move || defaults.into_iter().collect::<BTreeSet<String>>())
    };

    {
        let open = open.clone();
        let defaults = menu.as_ref().map(|m| m.default_open_categories()).unwrap_or_default();
        use_effect_with(props.restaurant_id.clone(), move |id| {
            log::info!("📖 RestaurantMenuPage cargada para {}", id);
            let next: BTreeSet<String> = defaults.into_iter().collect();
            if *open != next {
                open.set(next);
            }
            || ()
        });
    }

    let Some(menu) = menu else {
        return html! {
            <div class="page menu-page">
                <div class="container empty-state">
                    <p class="muted">{"This restaurant has no menu yet."}</p>
                </div>
            </div>
        };
    };

    let on_toggle = |name: String| {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*open).clone();
            if !next.remove(&name) {
                next.insert(name.clone());
            }
            open.set(next);
        })
    };

    html! {
        <div class="page menu-page">
            <div class="container">
                <section class="menu-banner">
                    <div class="banner-image">
                        <img src={menu.banner_url.clone()} alt={format!("{} interior", menu.name)} />
                        <div class="banner-overlay"></div>
                    </div>
                    <h1>{&menu.name}</h1>
                    <div class="menu-meta">
                        <span class="rating">
                            {"⭐ "}<strong>{format!("{:.1}", menu.rating)}</strong>{" "}{menu.rating_count_label()}
                        </span>
                        <span class="dot">{"•"}</span>
                        <span class="address">{"📍 "}{&menu.address}</span>
                    </div>
                </section>

                <div class="menu-layout">
                    <div class="menu-column">
                        <h2>{"Menu"}</h2>
                        <div class="accordion">
                            { for menu.categories.iter().map(|category| {
                                let is_open = open.contains(&category.name);
                                html! {
                                    <div key={category.name.clone()} class={classes!("accordion-item", is_open.then_some("open"))}>
                                        <button
                                            type="button"
                                            class="accordion-trigger"
                                            aria-expanded={is_open.to_string()}
                                            onclick={on_toggle(category.name.clone())}
                                        >
                                            {&category.name}
                                            <span class="chevron">{ if is_open { "▴" } else { "▾" } }</span>
                                        </button>
                                        if is_open {
                                            <div class="accordion-content menu-item-grid">
                                                { for category.items.iter().map(|item| html! {
                                                    <MenuItemCard key={item.id.clone()} item={item.clone()} />
                                                })}
                                            </div>
                                        }
                                    </div>
                                }
                            })}
                        </div>
                    </div>

                    <aside class="cart-column">
                        <div class="sticky">
                            <CartSummary cart={props.cart.clone()} />
                        </div>
                    </aside>
                </div>
            </div>
        </div>
    }
}
