use yew::prelude::*;

use crate::models::cuisine::{CuisineFilter, CUISINE_CATEGORIES};

#[derive(Properties, PartialEq)]
pub struct CuisineCategoryFilterProps {
    pub selected: CuisineFilter,
    pub on_select: Callback<CuisineFilter>,
}

#[function_component(CuisineCategoryFilter)]
pub fn cuisine_category_filter(props: &CuisineCategoryFilterProps) -> Html {
    use_effect_with((), |_| {
        log::info!("📄 CuisineCategoryFilter cargado");
        || ()
    });

    html! {
        <div class="cuisine-filter">
            <div class="cuisine-filter-track">
                { for CUISINE_CATEGORIES.iter().map(|category| {
                    let is_selected = props.selected.is_selected(category);
                    let filter = CuisineFilter::from_name(category.name);

                    let on_click = {
                        let on_select = props.on_select.clone();
                        let filter = filter.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(filter.clone()))
                    };

                    // Enter o espacio seleccionan, como un botón
                    let on_keydown = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |e: KeyboardEvent| {
                            if e.key() == "Enter" || e.key() == " " {
                                e.prevent_default();
                                on_select.emit(filter.clone());
                            }
                        })
                    };

                    html! {
                        <div
                            key={category.name}
                            class={classes!("cuisine-chip", is_selected.then_some("selected"))}
                            role="button"
                            tabindex="0"
                            aria-pressed={is_selected.to_string()}
                            onclick={on_click}
                            onkeydown={on_keydown}
                        >
                            <span class="cuisine-icon">{category.icon}</span>
                            <span class="cuisine-name">{category.name}</span>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
