use yew::prelude::*;

use crate::utils::constants::{BRAND_ICON, BRAND_NAME, BRAND_TAGLINE};

const LINK_COLUMNS: &[(&str, &[(&str, &str)])] = &[
    ("Company", &[("About Us", "about"), ("Careers", "careers"), ("Press", "press")]),
    ("Support", &[("Contact", "contact"), ("FAQ", "faq")]),
    ("Legal", &[("Terms of Service", "terms-of-service"), ("Privacy Policy", "privacy-policy")]),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    // Año calculado una sola vez por montaje
    let current_year = use_memo((), |_| js_sys::Date::new_0().get_full_year());

    use_effect_with((), |_| {
        log::info!("📄 Footer cargado");
        || ()
    });

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="brand">
                            <span class="brand-icon">{BRAND_ICON}</span>
                            <span class="brand-name">{BRAND_NAME}</span>
                        </div>
                        <p>{BRAND_TAGLINE}</p>
                    </div>

                    <div class="footer-links">
                        { for LINK_COLUMNS.iter().map(|(title, links)| html! {
                            <div key={*title}>
                                <h3>{*title}</h3>
                                <nav>
                                    { for links.iter().map(|(label, slug)| html! {
                                        <a key={*slug} href={format!("#/{}", slug)}>{*label}</a>
                                    })}
                                </nav>
                            </div>
                        })}
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. All Rights Reserved.", *current_year, BRAND_NAME)}</p>
                </div>
            </div>
        </footer>
    }
}
