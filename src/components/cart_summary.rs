use std::rc::Rc;
use yew::prelude::*;

use crate::context::navigation::use_navigator;
use crate::models::cart::Cart;
use crate::models::route::Route;
use crate::utils::format::format_price;

#[derive(Properties, PartialEq)]
pub struct CartSummaryProps {
    pub cart: Rc<Cart>,
}

#[function_component(CartSummary)]
pub fn cart_summary(props: &CartSummaryProps) -> Html {
    let navigate = use_navigator();
    let cart = &props.cart;
    let subtotal = use_memo(cart.clone(), |cart| cart.subtotal());

    use_effect_with((), |_| {
        log::info!("🛒 CartSummary cargado");
        || ()
    });

    // Sin estado compartido de carrito: las acciones solo se registran
    let on_quantity = |id: String, quantity: u32| {
        Callback::from(move |_: MouseEvent| {
            log::info!("🔢 Actualizando item {} a cantidad {}", id, quantity);
        })
    };

    let on_remove = |id: String| {
        Callback::from(move |_: MouseEvent| {
            log::info!("🗑️ Eliminando item {}", id);
        })
    };

    let on_checkout = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigate.emit(Route::Checkout);
    });

    html! {
        <div class="cart-summary">
            <div class="cart-summary-header">
                <h2>{"Your Cart"}</h2>
            </div>

            if cart.is_empty() {
                <div class="cart-empty">
                    <span class="cart-empty-icon">{"🛒"}</span>
                    <h3>{"Your cart is empty"}</h3>
                    <p class="muted">{"Add items from a restaurant to get started."}</p>
                </div>
            } else {
                <div class="cart-items">
                    { for cart.items.iter().map(|item| html! {
                        <div key={item.id.clone()} class="cart-item">
                            <div class="cart-item-thumb">
                                <img src={item.image_or_placeholder().to_string()} alt={item.name.clone()} />
                            </div>
                            <div class="cart-item-info">
                                <p class="cart-item-name">{&item.name}</p>
                                <div class="quantity-controls">
                                    <button
                                        class="btn btn-outline btn-icon-sm"
                                        aria-label="Decrease quantity"
                                        disabled={!item.can_decrease()}
                                        onclick={on_quantity(item.id.clone(), item.quantity.saturating_sub(1))}
                                    >{"−"}</button>
                                    <span class="quantity">{item.quantity}</span>
                                    <button
                                        class="btn btn-outline btn-icon-sm"
                                        aria-label="Increase quantity"
                                        onclick={on_quantity(item.id.clone(), item.quantity + 1)}
                                    >{"+"}</button>
                                </div>
                            </div>
                            <div class="cart-item-total">
                                <p>{format_price(item.line_total())}</p>
                                <button
                                    class="btn btn-ghost btn-icon"
                                    aria-label="Remove item"
                                    onclick={on_remove(item.id.clone())}
                                >{"🗑️"}</button>
                            </div>
                        </div>
                    })}
                </div>

                <div class="cart-summary-footer">
                    <div class="cart-subtotal">
                        <span>{"Subtotal"}</span>
                        <span>{format_price(*subtotal)}</span>
                    </div>
                    <hr class="separator" />
                    <a href={Route::Checkout.path()} class="btn btn-lg btn-block" onclick={on_checkout}>
                        {"Proceed to Checkout"}
                    </a>
                </div>
            }
        </div>
    }
}
