use serde::{Deserialize, Serialize};
use std::fmt;

/// Etapas del pedido en orden de avance (índice = rango de progreso)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderStage {
    OrderPlaced,
    Preparing,
    OutForDelivery,
    Delivered,
}

/// Cantidad de etapas del catálogo
pub const STAGE_COUNT: usize = OrderStage::ALL.len();

impl OrderStage {
    /// Catálogo fijo, en orden
    pub const ALL: [OrderStage; 4] = [
        OrderStage::OrderPlaced,
        OrderStage::Preparing,
        OrderStage::OutForDelivery,
        OrderStage::Delivered,
    ];

    pub fn index(self) -> usize {
        match self {
            OrderStage::OrderPlaced => 0,
            OrderStage::Preparing => 1,
            OrderStage::OutForDelivery => 2,
            OrderStage::Delivered => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStage::OrderPlaced => "Order Placed",
            OrderStage::Preparing => "Preparing",
            OrderStage::OutForDelivery => "Out for Delivery",
            OrderStage::Delivered => "Delivered",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            OrderStage::OrderPlaced => "📦",
            OrderStage::Preparing => "👨‍🍳",
            OrderStage::OutForDelivery => "🚴",
            OrderStage::Delivered => "🏠",
        }
    }

    pub fn is_terminal(self) -> bool {
        self.index() == STAGE_COUNT - 1
    }
}

impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Estado visual de un paso del stepper respecto a la etapa actual
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

impl StepStatus {
    pub fn to_class(&self) -> &'static str {
        match self {
            StepStatus::Completed => "step completed",
            StepStatus::Active => "step active",
            StepStatus::Upcoming => "step upcoming",
        }
    }
}
