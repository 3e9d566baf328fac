use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::FormField;
use crate::config::CONFIG;
use crate::context::navigation::use_navigator;
use crate::context::toast::Toast;
use crate::hooks::{use_form, use_toast, ValidationMode};
use crate::models::cart::{Cart, OrderSummary};
use crate::models::forms::{CheckoutForm, PaymentMethod};
use crate::models::route::Route;
use crate::services::order_service::{place_order, CheckoutError};
use crate::utils::format::format_price;

#[derive(Properties, PartialEq)]
pub struct CheckoutProps {
    pub cart: Rc<Cart>,
}

#[function_component(CheckoutPage)]
pub fn checkout_page(props: &CheckoutProps) -> Html {
    let navigate = use_navigator();
    let toast = use_toast();
    let form = use_form(CheckoutForm::default(), ValidationMode::OnSubmit);
    let summary = use_memo(props.cart.clone(), |cart| {
        OrderSummary::from_cart(cart, CONFIG.checkout.delivery_fee)
    });
    let redirect = use_mut_ref(|| None::<Timeout>);

    {
        let redirect = redirect.clone();
        use_effect_with((), move |_| {
            log::info!("💳 CheckoutPage cargada");
            // Si se sale antes de tiempo, la redirección pendiente se descarta
            move || {
                redirect.borrow_mut().take();
            }
        });
    }

    let on_valid = {
        let summary = summary.clone();
        Callback::from(move |values: CheckoutForm| match place_order(&values, &summary) {
            Ok(order) => {
                log::info!("✅ Pedido {} confirmado", order.reference);
                toast.emit(Toast::new("Order Placed!").with_description("Your delicious meal is on its way."));

                let navigate = navigate.clone();
                let timeout = Timeout::new(CONFIG.checkout.redirect_delay_ms, move || {
                    navigate.emit(Route::OrderStatusProfile);
                });
                *redirect.borrow_mut() = Some(timeout);
            }
            Err(CheckoutError::EmptyCart) => {
                toast.emit(Toast::new("Your cart is empty").destructive());
            }
            Err(CheckoutError::InvalidForm(errors)) => {
                log::warn!("⚠️ Checkout inválido: {}", errors);
            }
        })
    };

    let on_payment = |method: PaymentMethod| {
        let bind = form.bind(|f, value| {
            if let Ok(method) = value.parse() {
                f.payment_method = method;
            }
        });
        Callback::from(move |_: Event| bind.emit(method.value().to_string()))
    };

    let values = &*form.values;

    html! {
        <div class="page checkout-page">
            <div class="container">
                <h1>{"Checkout"}</h1>
                <form class="checkout-layout" onsubmit={form.on_submit(on_valid)}>
                    <div class="checkout-form">
                        <div class="card">
                            <div class="card-header">
                                <h2 class="card-title">{"🚚 Delivery Information"}</h2>
                            </div>
                            <div class="card-content form-grid">
                                <FormField
                                    id="full_name"
                                    label="Full Name"
                                    placeholder="John Doe"
                                    value={values.full_name.clone()}
                                    error={form.error("full_name")}
                                    on_input={form.bind(|f, v| f.full_name = v)}
                                />
                                <FormField
                                    id="address"
                                    label="Street Address"
                                    placeholder="123 Main St"
                                    value={values.address.clone()}
                                    error={form.error("address")}
                                    on_input={form.bind(|f, v| f.address = v)}
                                />
                                <FormField
                                    id="city"
                                    label="City"
                                    placeholder="Anytown"
                                    value={values.city.clone()}
                                    error={form.error("city")}
                                    on_input={form.bind(|f, v| f.city = v)}
                                />
                                <FormField
                                    id="postal_code"
                                    label="Postal Code"
                                    placeholder="12345"
                                    value={values.postal_code.clone()}
                                    error={form.error("postal_code")}
                                    on_input={form.bind(|f, v| f.postal_code = v)}
                                />
                            </div>
                        </div>

                        <div class="card">
                            <div class="card-header">
                                <h2 class="card-title">{"💳 Payment Method"}</h2>
                            </div>
                            <div class="card-content payment-options" role="radiogroup">
                                { for PaymentMethod::ALL.into_iter().map(|method| html! {
                                    <label key={method.value()} for={method.value()} class="payment-option">
                                        <input
                                            type="radio"
                                            class="sr-only"
                                            id={method.value()}
                                            name="payment_method"
                                            value={method.value()}
                                            checked={values.payment_method == method}
                                            onchange={on_payment(method)}
                                        />
                                        {method.label()}
                                    </label>
                                })}
                            </div>
                        </div>

                        <button type="submit" class="btn btn-lg btn-block">
                            {format!("Place Order - {}", format_price(summary.total))}
                        </button>
                    </div>

                    <div class="card order-summary sticky">
                        <div class="card-header">
                            <h2 class="card-title">{"Order Summary"}</h2>
                        </div>
                        <div class="card-content">
                            <div class="summary-items">
                                { for summary.items.iter().map(|item| html! {
                                    <div key={item.id.clone()} class="summary-item">
                                        <div>
                                            <p class="summary-item-name">{&item.name}</p>
                                            <p class="muted">{format!("Qty: {}", item.quantity)}</p>
                                        </div>
                                        <p>{format_price(item.line_total())}</p>
                                    </div>
                                })}
                            </div>
                            <hr class="separator" />
                            <div class="summary-row">
                                <p>{"Subtotal"}</p>
                                <p>{format_price(summary.subtotal)}</p>
                            </div>
                            <div class="summary-row">
                                <p>{"Delivery Fee"}</p>
                                <p>{format_price(summary.delivery_fee)}</p>
                            </div>
                            <hr class="separator" />
                            <FormField
                                id="promo_code"
                                label="Promotional Code"
                                placeholder="Enter code"
                                value={values.promo_code.clone()}
                                on_input={form.bind(|f, v| f.promo_code = v)}
                            />
                        </div>
                        <div class="card-footer summary-total">
                            <p>{"Total"}</p>
                            <p>{format_price(summary.total)}</p>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}
