use yew::prelude::*;

use crate::models::route::Route;

/// Ruta actual + callback para navegar
#[derive(Clone, PartialEq)]
pub struct NavigationContext {
    pub route: Route,
    pub navigate: Callback<Route>,
}

#[hook]
pub fn use_navigator() -> Callback<Route> {
    use_context::<NavigationContext>()
        .map(|ctx| ctx.navigate)
        .unwrap_or_else(|| Callback::from(|route: Route| log::warn!("⚠️ Sin NavigationContext, ignorando {:?}", route)))
}

#[hook]
pub fn use_route() -> Route {
    use_context::<NavigationContext>()
        .map(|ctx| ctx.route)
        .unwrap_or_default()
}
