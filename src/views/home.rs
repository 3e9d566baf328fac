use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{CuisineCategoryFilter, RestaurantCard};
use crate::context::catalog::use_catalog;
use crate::context::navigation::use_navigator;
use crate::models::cuisine::CuisineFilter;
use crate::models::route::Route;
use crate::utils::constants::HERO_IMAGE;

/// Título de la sección de destacados según el filtro
pub fn featured_heading(filter: &CuisineFilter) -> String {
    match filter {
        CuisineFilter::All => "Featured Restaurants".to_string(),
        CuisineFilter::Cuisine(name) => format!("Showing {}", name),
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let catalog = use_catalog();
    let navigate = use_navigator();
    let selected = use_state(CuisineFilter::default);
    let search_query = use_state(String::new);

    use_effect_with((), |_| {
        log::info!("🏠 HomePage cargada");
        || ()
    });

    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search_query.set(input.value());
            }
        })
    };

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            navigate.emit(Route::search(&search_query));
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |filter: CuisineFilter| {
            log::info!("🍽️ Cocina seleccionada: {}", filter.name());
            selected.set(filter);
        })
    };

    let featured = catalog.featured_by_cuisine(&selected);

    html! {
        <div class="page home-page">
            <section class="hero" style={format!("background-image: url('{}')", HERO_IMAGE)}>
                <div class="hero-overlay" aria-hidden="true"></div>
                <div class="container hero-content">
                    <h1>{"Food for any mood, delivered."}</h1>
                    <p>{"Discover and order from the best local restaurants."}</p>
                    <form class="hero-search" onsubmit={on_search}>
                        <input
                            type="search"
                            class="input input-lg"
                            placeholder="Enter restaurant or cuisine..."
                            value={(*search_query).clone()}
                            oninput={on_search_input}
                        />
                        <button type="submit" class="btn btn-lg">{"Search"}</button>
                    </form>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container">
                    <h2 class="section-title">{"Or Browse by Cuisine"}</h2>
                    <p class="section-subtitle">{"Explore a world of flavors."}</p>
                    <CuisineCategoryFilter selected={(*selected).clone()} on_select={on_select} />
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="section-title">{featured_heading(&selected)}</h2>
                    <div class="restaurant-grid">
                        { for featured.iter().map(|r| html! {
                            <RestaurantCard key={r.id.clone()} restaurant={(*r).clone()} />
                        })}
                    </div>
                    if featured.is_empty() {
                        <div class="empty-state">
                            <p class="muted">
                                {format!("No restaurants found for \"{}\". Try another category!", selected.name())}
                            </p>
                        </div>
                    }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_heading() {
        assert_eq!(featured_heading(&CuisineFilter::All), "Featured Restaurants");
        assert_eq!(featured_heading(&CuisineFilter::from_name("Sushi")), "Showing Sushi");
    }
}
