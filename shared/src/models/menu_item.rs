//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Fixed set of menu categories
///
/// Ordering of the variants is the display order used when listing the menu.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MenuCategory {
    Breakfast,
    Lunch,
    Dinner,
    Drinks,
    Desserts,
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Drinks => "Drinks",
            Self::Desserts => "Desserts",
        };
        write!(f, "{s}")
    }
}

/// Menu item entity
///
/// The authoritative record the catalog serves. Only admin catalog
/// operations mutate it; order assembly reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Unit price, non-negative
    pub price: f64,
    pub category: MenuCategory,
    #[serde(default = "default_image")]
    pub image: String,
    /// Whether the item can currently be ordered
    #[serde(default = "default_true")]
    pub available: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_image() -> String {
    "https://via.placeholder.com/300x200?text=Menu+Item".to_string()
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    pub image: Option<String>,
    pub available: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<MenuCategory>,
    pub image: Option<String>,
    pub available: Option<bool>,
}

impl MenuItemCreate {
    /// Build the stored entity, filling defaults
    pub fn into_item(self, id: i64, now: i64) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image.unwrap_or_else(default_image),
            available: self.available.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}
