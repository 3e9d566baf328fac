// ============================================================================
// CHOWNOW EXPRESS - STOREFRONT (YEW + WASM)
// ============================================================================
// - Components: piezas de UI reutilizables + shell de la app
// - Views: páginas enrutadas
// - Hooks: estado con ciclo de vida (tracker, formularios, toasts)
// - Services: lógica sin UI (catálogo, seguimiento, pedidos)
// - Models: datos del dominio
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

use crate::components::App;
use crate::config::CONFIG;

/// Punto de entrada: inicializa logging y monta la app en <body>
pub fn run() {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 ChowNow Express ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
