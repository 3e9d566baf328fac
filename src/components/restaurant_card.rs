use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::navigation::use_navigator;
use crate::models::restaurant::Restaurant;
use crate::models::route::Route;
use crate::utils::format::format_minutes;

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantCardProps {
    pub restaurant: Restaurant,
}

#[function_component(RestaurantCard)]
pub fn restaurant_card(props: &RestaurantCardProps) -> Html {
    let r = &props.restaurant;
    let navigate = use_navigator();

    {
        let (name, id) = (r.name.clone(), r.id.clone());
        use_effect_with(id, move |id| {
            log::info!("🍽️ RestaurantCard cargada: {} (id {})", name, id);
            || ()
        });
    }

    let route = Route::RestaurantMenu {
        restaurant_id: r.id.clone(),
    };

    let on_click = {
        let route = route.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(route.clone());
        })
    };

    html! {
        <a
            href={route.path()}
            class="restaurant-card-link"
            aria-label={format!("View menu for {}", r.name)}
            onclick={on_click}
        >
            <div class="card restaurant-card">
                <div class="card-media aspect-16-9">
                    <img src={r.image_or_placeholder().to_string()} alt={format!("Image of {}", r.name)} />
                </div>
                <div class="card-content">
                    <div class="restaurant-card-title">
                        <h3 class="card-title">{&r.name}</h3>
                        <div class="rating">
                            <span class="star">{"⭐"}</span>
                            <span>{r.rating_label()}</span>
                        </div>
                    </div>
                    <div class="badges">
                        { for r.badges(CONFIG.ui.max_cuisine_badges).iter().map(|cuisine| html! {
                            <span key={cuisine.clone()} class="badge badge-secondary">{cuisine}</span>
                        })}
                    </div>
                </div>
                <div class="card-footer">
                    <span class="delivery-time">{"🕒 "}{format_minutes(r.delivery_time)}</span>
                    <span class="delivery-cost">{"🚚 "}{r.delivery_cost_label()}</span>
                </div>
            </div>
        </a>
    }
}
