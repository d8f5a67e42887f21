//! Catalog - the authoritative set of sellable menu items
//!
//! Reads serve the public menu and order assembly; writes are admin-only
//! and are the single place catalog invariants (non-negative price, closed
//! category set) are enforced.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::util::{now_millis, snowflake_id};

use crate::db::Store;
use crate::orders::money;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};

/// Catalog service over the record store
#[derive(Clone)]
pub struct Catalog {
    store: Store,
}

impl Catalog {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Resolve a menu item by id, regardless of availability
    ///
    /// Availability only gates ordering and the public listing, not lookup.
    pub fn get(&self, id: i64) -> AppResult<MenuItem> {
        self.store
            .get_menu_item(id)?
            .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound).with_detail("menu_item_id", id))
    }

    /// List available items, ordered by category then name
    pub fn list_available(&self, category: Option<MenuCategory>) -> AppResult<Vec<MenuItem>> {
        let mut items: Vec<MenuItem> = self
            .store
            .list_menu_items()?
            .into_iter()
            .filter(|item| item.available)
            .filter(|item| category.is_none_or(|c| item.category == c))
            .collect();

        items.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
        Ok(items)
    }

    /// Create a menu item (admin operation)
    pub fn create(&self, data: MenuItemCreate) -> AppResult<MenuItem> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
        money::validate_price(data.price, "price")?;

        let item = data.into_item(snowflake_id(), now_millis());
        self.store.put_menu_item(&item)?;

        tracing::info!(id = item.id, name = %item.name, "Menu item created");
        Ok(item)
    }

    /// Update a menu item (admin operation), per-field
    pub fn update(&self, id: i64, data: MenuItemUpdate) -> AppResult<MenuItem> {
        let mut item = self.get(id)?;

        if let Some(name) = data.name {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            item.name = name;
        }
        if let Some(description) = data.description {
            validate_required_text(&description, "description", MAX_NOTE_LEN)?;
            item.description = description;
        }
        if let Some(price) = data.price {
            money::validate_price(price, "price")?;
            item.price = price;
        }
        if let Some(category) = data.category {
            item.category = category;
        }
        if let Some(image) = data.image {
            validate_required_text(&image, "image", MAX_URL_LEN)?;
            item.image = image;
        }
        if let Some(available) = data.available {
            item.available = available;
        }
        item.updated_at = now_millis();

        self.store.put_menu_item(&item)?;
        Ok(item)
    }

    /// Delete a menu item (admin operation)
    ///
    /// Existing orders are unaffected: their lines carry snapshotted
    /// prices and names, not live references.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        if !self.store.delete_menu_item(id)? {
            return Err(AppError::new(ErrorCode::MenuItemNotFound).with_detail("menu_item_id", id));
        }
        tracing::info!(id, "Menu item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(Store::open_in_memory().unwrap())
    }

    fn create_payload(name: &str, price: f64, category: MenuCategory) -> MenuItemCreate {
        MenuItemCreate {
            name: name.to_string(),
            description: "test".to_string(),
            price,
            category,
            image: None,
            available: None,
        }
    }

    #[test]
    fn test_create_and_get() {
        let catalog = catalog();
        let item = catalog
            .create(create_payload("Paella", 12.99, MenuCategory::Dinner))
            .unwrap();

        let loaded = catalog.get(item.id).unwrap();
        assert_eq!(loaded.name, "Paella");
        assert!(loaded.available);
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let err = catalog().get(42).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let err = catalog()
            .create(create_payload("Paella", -1.0, MenuCategory::Dinner))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let err = catalog()
            .create(create_payload("  ", 5.0, MenuCategory::Drinks))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_list_available_orders_by_category_then_name() {
        let catalog = catalog();
        catalog.create(create_payload("Tiramisu", 6.0, MenuCategory::Desserts)).unwrap();
        catalog.create(create_payload("Omelette", 7.0, MenuCategory::Breakfast)).unwrap();
        catalog.create(create_payload("Coffee", 2.0, MenuCategory::Drinks)).unwrap();
        catalog.create(create_payload("Cola", 2.5, MenuCategory::Drinks)).unwrap();

        let hidden = catalog.create(create_payload("Secret", 1.0, MenuCategory::Drinks)).unwrap();
        catalog
            .update(
                hidden.id,
                MenuItemUpdate {
                    name: None,
                    description: None,
                    price: None,
                    category: None,
                    image: None,
                    available: Some(false),
                },
            )
            .unwrap();

        let names: Vec<String> = catalog
            .list_available(None)
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["Omelette", "Coffee", "Cola", "Tiramisu"]);

        let drinks = catalog.list_available(Some(MenuCategory::Drinks)).unwrap();
        assert_eq!(drinks.len(), 2);
    }

    #[test]
    fn test_update_price_does_not_touch_flags() {
        let catalog = catalog();
        let item = catalog
            .create(create_payload("Paella", 12.99, MenuCategory::Dinner))
            .unwrap();

        let updated = catalog
            .update(
                item.id,
                MenuItemUpdate {
                    name: None,
                    description: None,
                    price: Some(15.99),
                    category: None,
                    image: None,
                    available: None,
                },
            )
            .unwrap();

        assert_eq!(updated.price, 15.99);
        assert!(updated.available);
        assert_eq!(updated.name, "Paella");
    }

    #[test]
    fn test_delete() {
        let catalog = catalog();
        let item = catalog
            .create(create_payload("Paella", 12.99, MenuCategory::Dinner))
            .unwrap();

        catalog.delete(item.id).unwrap();
        let err = catalog.delete(item.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
    }
}
