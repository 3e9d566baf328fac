use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{CuisineCategoryFilter, RestaurantCard};
use crate::config::CONFIG;
use crate::context::catalog::use_catalog;
use crate::models::cuisine::CuisineFilter;
use crate::services::catalog::{ListingQuery, SortBy};

#[derive(Properties, PartialEq)]
pub struct RestaurantListingProps {
    #[prop_or_default]
    pub query: Option<String>,
}

#[function_component(RestaurantListingPage)]
pub fn restaurant_listing_page(props: &RestaurantListingProps) -> Html {
    let catalog = use_catalog();
    let max_cost = CONFIG.ui.max_delivery_cost_filter;

    let listing = {
        let text = props.query.clone();
        use_state(move || ListingQuery {
            text,
            ..ListingQuery::new(f64::from(max_cost))
        })
    };

    // Una nueva búsqueda desde el header reemplaza el texto
    {
        let listing = listing.clone();
        use_effect_with(props.query.clone(), move |query| {
            log::info!("📋 RestaurantListingPage cargada (búsqueda: {:?})", query);
            if listing.text != *query {
                listing.set(ListingQuery {
                    text: query.clone(),
                    ..(*listing).clone()
                });
            }
            || ()
        });
    }

    let on_free_delivery = {
        let listing = listing.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                listing.set(ListingQuery {
                    free_delivery_only: input.checked(),
                    ..(*listing).clone()
                });
            }
        })
    };

    let on_sort = {
        let listing = listing.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*listing).clone();
                next.sort_by = SortBy::from_value(&select.value());
                listing.set(next);
            }
        })
    };

    let on_cost = {
        let listing = listing.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*listing).clone();
                next.max_delivery_cost = input.value_as_number().clamp(0.0, f64::from(max_cost));
                listing.set(next);
            }
        })
    };

    let on_cuisine = {
        let listing = listing.clone();
        Callback::from(move |filter: CuisineFilter| {
            listing.set(ListingQuery {
                cuisine: filter,
                ..(*listing).clone()
            });
        })
    };

    let found = catalog.search(&listing);

    html! {
        <div class="page listing-page">
            <div class="container listing-layout">
                <aside class="listing-sidebar">
                    <div class="card sticky">
                        <div class="card-header">
                            <h2 class="card-title">{"Filter & Sort"}</h2>
                        </div>
                        <div class="card-content">
                            <div class="field">
                                <label for="sort-by">{"Sort by"}</label>
                                <select id="sort-by" class="input" onchange={on_sort}>
                                    { for SortBy::ALL.into_iter().map(|sort| html! {
                                        <option key={sort.value()} value={sort.value()} selected={listing.sort_by == sort}>
                                            {sort.label()}
                                        </option>
                                    })}
                                </select>
                            </div>

                            <div class="field">
                                <label for="price-range">
                                    {format!("Max Delivery Cost (${})", listing.max_delivery_cost)}
                                </label>
                                <input
                                    id="price-range"
                                    type="range"
                                    min="0"
                                    max={max_cost.to_string()}
                                    step="1"
                                    value={listing.max_delivery_cost.to_string()}
                                    oninput={on_cost}
                                />
                            </div>

                            <div class="field">
                                <label class="checkbox" for="free-delivery">
                                    <input
                                        id="free-delivery"
                                        type="checkbox"
                                        checked={listing.free_delivery_only}
                                        onchange={on_free_delivery}
                                    />
                                    {"Free Delivery"}
                                </label>
                                <label class="checkbox" for="open-now">
                                    <input id="open-now" type="checkbox" />
                                    {"Open Now"}
                                </label>
                            </div>
                        </div>
                    </div>
                </aside>

                <div class="listing-results">
                    <CuisineCategoryFilter selected={listing.cuisine.clone()} on_select={on_cuisine} />
                    <h2 class="results-count">{format!("{} Restaurants Found", found.len())}</h2>
                    <div class="restaurant-grid">
                        { for found.iter().map(|r| html! {
                            <RestaurantCard key={r.id.clone()} restaurant={(*r).clone()} />
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
