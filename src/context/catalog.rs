use std::rc::Rc;
use yew::prelude::*;

use crate::services::catalog::Catalog;

/// Catálogo de solo lectura compartido por todas las vistas
#[derive(Clone, Debug)]
pub struct CatalogContext {
    pub catalog: Rc<Catalog>,
}

impl PartialEq for CatalogContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl CatalogContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Rc::new(catalog),
        }
    }
}

#[hook]
pub fn use_catalog() -> Rc<Catalog> {
    match use_context::<CatalogContext>() {
        Some(ctx) => ctx.catalog,
        None => {
            log::warn!("⚠️ CatalogContext no encontrado, usando catálogo vacío");
            Rc::new(Catalog::default())
        }
    }
}
