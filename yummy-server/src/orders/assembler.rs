//! Order assembly - cart lines to a priced, validated order
//!
//! The only place client-submitted cart intent meets the authoritative
//! catalog. The client supplies item references and quantities, nothing
//! else; every unit price is re-resolved here and snapshotted into the
//! resulting order line, so later catalog price changes never alter an
//! existing order.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CartLine, Order, OrderLine, OrderStatus};
use shared::util::{now_millis, snowflake_id};

use crate::catalog::Catalog;
use crate::orders::money;

/// Assemble a pending order from client cart lines
///
/// Lines are processed in submitted order; the first failing line aborts
/// the whole assembly, so an order is either fully priced or not created
/// at all.
pub fn assemble(catalog: &Catalog, user_id: i64, cart: &[CartLine]) -> AppResult<Order> {
    if cart.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }

    let mut items = Vec::with_capacity(cart.len());
    for line in cart {
        let item = catalog.get(line.menu_item_id)?;

        if !item.available {
            return Err(AppError::with_message(
                ErrorCode::MenuItemUnavailable,
                format!("{} is not available", item.name),
            )
            .with_detail("menu_item_id", line.menu_item_id));
        }

        money::validate_quantity(line.quantity, line.menu_item_id)?;

        // Catalog invariant: prices are validated non-negative at admin
        // write time. A violation here is a collaborator bug, not user error.
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(AppError::internal(format!(
                "catalog holds an invalid price for menu item {}",
                item.id
            ))
            .with_detail("menu_item_id", item.id));
        }

        items.push(OrderLine {
            menu_item_id: item.id,
            name: item.name,
            quantity: line.quantity,
            price: item.price,
        });
    }

    // Sum in Decimal, round to the minor unit once at the end
    let total: Decimal = money::lines_total(&items);
    let now = now_millis();

    Ok(Order {
        id: snowflake_id(),
        user_id,
        items,
        total_price: money::to_f64(total),
        status: OrderStatus::Pending,
        created_at: now,
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use shared::models::{MenuCategory, MenuItemCreate, MenuItemUpdate};

    fn catalog_with(items: &[(&str, f64, bool)]) -> (Catalog, Vec<i64>) {
        let catalog = Catalog::new(Store::open_in_memory().unwrap());
        let mut ids = Vec::new();
        for (name, price, available) in items {
            let item = catalog
                .create(MenuItemCreate {
                    name: name.to_string(),
                    description: "test".to_string(),
                    price: *price,
                    category: MenuCategory::Dinner,
                    image: None,
                    available: Some(*available),
                })
                .unwrap();
            ids.push(item.id);
        }
        (catalog, ids)
    }

    fn line(menu_item_id: i64, quantity: i32) -> CartLine {
        CartLine {
            menu_item_id,
            quantity,
        }
    }

    #[test]
    fn test_assemble_snapshots_price_and_totals() {
        let (catalog, ids) = catalog_with(&[("Paella", 12.99, true)]);

        let order = assemble(&catalog, 7, &[line(ids[0], 2)]).unwrap();

        assert_eq!(order.user_id, 7);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].price, 12.99);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.total_price, 25.98);
    }

    #[test]
    fn test_assemble_preserves_submission_order() {
        let (catalog, ids) = catalog_with(&[("Paella", 12.99, true), ("Cola", 2.5, true)]);

        let order = assemble(&catalog, 1, &[line(ids[1], 1), line(ids[0], 1)]).unwrap();

        assert_eq!(order.items[0].name, "Cola");
        assert_eq!(order.items[1].name, "Paella");
        assert_eq!(order.total_price, 15.49);
    }

    #[test]
    fn test_assemble_empty_cart() {
        let (catalog, _) = catalog_with(&[("Paella", 12.99, true)]);

        let err = assemble(&catalog, 1, &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
    }

    #[test]
    fn test_assemble_unknown_item() {
        let (catalog, _) = catalog_with(&[("Paella", 12.99, true)]);

        let err = assemble(&catalog, 1, &[line(424242, 1)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
    }

    #[test]
    fn test_assemble_unavailable_item_fails_regardless_of_other_lines() {
        let (catalog, ids) = catalog_with(&[("Paella", 12.99, true), ("Oysters", 24.0, false)]);

        let err = assemble(&catalog, 1, &[line(ids[0], 1), line(ids[1], 1)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemUnavailable);
        assert_eq!(
            err.details.unwrap().get("menu_item_id").unwrap().as_i64(),
            Some(ids[1])
        );
    }

    #[test]
    fn test_assemble_invalid_quantity() {
        let (catalog, ids) = catalog_with(&[("Paella", 12.99, true)]);

        let err = assemble(&catalog, 1, &[line(ids[0], 0)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidQuantity);

        let err = assemble(&catalog, 1, &[line(ids[0], -2)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidQuantity);
    }

    #[test]
    fn test_catalog_price_change_after_assembly_does_not_alter_order() {
        let (catalog, ids) = catalog_with(&[("Paella", 12.99, true)]);

        let order = assemble(&catalog, 1, &[line(ids[0], 2)]).unwrap();

        catalog
            .update(
                ids[0],
                MenuItemUpdate {
                    name: None,
                    description: None,
                    price: Some(19.99),
                    category: None,
                    image: None,
                    available: None,
                },
            )
            .unwrap();

        // The assembled order still carries the price seen at assembly time
        assert_eq!(order.items[0].price, 12.99);
        assert_eq!(order.total_price, 25.98);

        // A new order sees the new price
        let fresh = assemble(&catalog, 1, &[line(ids[0], 2)]).unwrap();
        assert_eq!(fresh.total_price, 39.98);
    }

    #[test]
    fn test_assemble_many_lines_no_float_drift() {
        let (catalog, ids) = catalog_with(&[("Penny candy", 0.01, true)]);

        let cart: Vec<CartLine> = (0..100).map(|_| line(ids[0], 10)).collect();
        let order = assemble(&catalog, 1, &cart).unwrap();
        assert_eq!(order.total_price, 10.0);
    }
}
