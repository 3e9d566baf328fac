use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::context::toast::Toast;
use crate::hooks::use_toast;
use crate::models::menu::{AddOn, Customization, ItemSize, MenuItem};
use crate::utils::format::format_price;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuItemCardProps {
    pub item: MenuItem,
}

#[function_component(MenuItemCard)]
pub fn menu_item_card(props: &MenuItemCardProps) -> Html {
    let item = &props.item;
    let toast = use_toast();
    let dialog_open = use_state(|| false);

    {
        let name = item.name.clone();
        use_effect_with(item.id.clone(), move |_| {
            log::info!("🍣 MenuItemCard cargada: {}", name);
            || ()
        });
    }

    let on_simple_add = {
        let (id, name) = (item.id.clone(), item.name.clone());
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("🛒 Producto simple {} añadido al carrito", id);
            toast.emit(Toast::new(format!("{} added to cart!", name)).success());
        })
    };

    let on_open = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| dialog_open.set(true))
    };

    let on_close = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: ()| dialog_open.set(false))
    };

    let on_custom_add = {
        let (id, name) = (item.id.clone(), item.name.clone());
        let dialog_open = dialog_open.clone();
        Callback::from(move |customization: Customization| {
            log::info!(
                "🛒 Producto personalizado {} añadido al carrito ({})",
                id,
                serde_json::to_string(&customization).unwrap_or_default()
            );
            toast.emit(Toast::new(format!("Customized {} added to cart!", name)).success());
            dialog_open.set(false);
        })
    };

    html! {
        <div class="card menu-item-card">
            <div class="menu-item-media">
                <img src={item.image_or_placeholder().to_string()} alt={item.name.clone()} />
            </div>
            <div class="menu-item-body">
                <div class="menu-item-text">
                    <h3>{&item.name}</h3>
                    <p class="muted line-clamp-2">{&item.description}</p>
                </div>
                <div class="menu-item-footer">
                    <p class="price">{format_price(item.price)}</p>
                    if item.has_customizations {
                        <button class="btn btn-sm" onclick={on_open}>{"➕ Add"}</button>
                    } else {
                        <button class="btn btn-sm" onclick={on_simple_add}>{"➕ Add"}</button>
                    }
                </div>
            </div>
            if *dialog_open {
                <CustomizationDialog item={item.clone()} on_add={on_custom_add} on_close={on_close} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CustomizationDialogProps {
    item: MenuItem,
    on_add: Callback<Customization>,
    on_close: Callback<()>,
}

/// Diálogo de tamaño, extras e instrucciones
#[function_component(CustomizationDialog)]
fn customization_dialog(props: &CustomizationDialogProps) -> Html {
    let customization = use_state(Customization::default);
    let id = &props.item.id;

    let on_size = |size: ItemSize| {
        let customization = customization.clone();
        Callback::from(move |_: Event| {
            let mut next = (*customization).clone();
            next.size = size;
            customization.set(next);
        })
    };

    let on_add_on = |add_on: AddOn| {
        let customization = customization.clone();
        Callback::from(move |_: Event| {
            let mut next = (*customization).clone();
            next.toggle_add_on(add_on);
            customization.set(next);
        })
    };

    let on_instructions = {
        let customization = customization.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlTextAreaElement>()
                .map(|t| t.value())
                .unwrap_or_default();
            let mut next = (*customization).clone();
            next.special_instructions = value;
            customization.set(next);
        })
    };

    let on_submit = {
        let customization = customization.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit((*customization).clone()))
    };

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class="dialog-backdrop" onclick={on_backdrop}>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                onkeydown={on_keydown}
            >
                <div class="dialog-header">
                    <h2>{&props.item.name}</h2>
                    <p class="muted">{"Customize your item and add it to your order."}</p>
                </div>

                <div class="dialog-body">
                    <fieldset class="field">
                        <legend>{"Size"}</legend>
                        <div class="radio-group">
                            { for ItemSize::ALL.into_iter().map(|size| {
                                let input_id = format!("size-{}-{}", size.value(), id);
                                html! {
                                    <label key={size.value()} for={input_id.clone()} class="radio">
                                        <input
                                            type="radio"
                                            id={input_id}
                                            name={format!("size-{}", id)}
                                            value={size.value()}
                                            checked={customization.size == size}
                                            onchange={on_size(size)}
                                        />
                                        {size.label()}
                                    </label>
                                }
                            })}
                        </div>
                    </fieldset>

                    <fieldset class="field">
                        <legend>{"Add-ons"}</legend>
                        { for AddOn::ALL.into_iter().map(|add_on| {
                            let input_id = format!("addon-{:?}-{}", add_on, id).to_lowercase();
                            html! {
                                <label key={input_id.clone()} for={input_id.clone()} class="checkbox">
                                    <input
                                        type="checkbox"
                                        id={input_id}
                                        checked={customization.has_add_on(add_on)}
                                        onchange={on_add_on(add_on)}
                                    />
                                    {add_on.label()}
                                </label>
                            }
                        })}
                    </fieldset>

                    <div class="field">
                        <label for={format!("instructions-{}", id)}>{"Special Instructions"}</label>
                        <textarea
                            id={format!("instructions-{}", id)}
                            class="input"
                            placeholder="e.g. no onions, extra spicy"
                            value={customization.special_instructions.clone()}
                            oninput={on_instructions}
                        />
                    </div>
                </div>

                <div class="dialog-footer">
                    <span class="price">{format_price(customization.unit_price(props.item.price))}</span>
                    <button type="button" class="btn" onclick={on_submit}>{"Add to Order"}</button>
                </div>
            </div>
        </div>
    }
}
