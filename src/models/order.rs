use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::format::format_price;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PastOrderStatus {
    Delivered,
    Cancelled,
}

impl PastOrderStatus {
    /// Variante del badge: default para entregados, destructive para el resto
    pub fn badge_class(&self) -> &'static str {
        match self {
            PastOrderStatus::Delivered => "badge badge-default",
            PastOrderStatus::Cancelled => "badge badge-destructive",
        }
    }
}

impl fmt::Display for PastOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PastOrderStatus::Delivered => write!(f, "Delivered"),
            PastOrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Registro del historial de pedidos
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PastOrder {
    pub id: String,
    pub date: NaiveDate,
    pub restaurant: String,
    pub total: f64,
    pub status: PastOrderStatus,
}

impl PastOrder {
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn total_label(&self) -> String {
        format_price(self.total)
    }
}

/// Pedido confirmado en checkout (sin backend: solo se loguea)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub reference: String,
    pub total: f64,
    pub item_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let order = PastOrder {
            id: "ORD#003".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 18).unwrap(),
            restaurant: "Burger Barn".to_string(),
            total: 18.75,
            status: PastOrderStatus::Cancelled,
        };

        assert_eq!(order.date_label(), "2023-10-18");
        assert_eq!(order.total_label(), "$18.75");
        assert_eq!(order.status.to_string(), "Cancelled");
        assert!(order.status.badge_class().contains("destructive"));
    }
}
