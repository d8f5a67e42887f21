//! redb-based storage layer
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `menu_items` | `id` | `MenuItem` | Catalog records |
//! | `orders` | `id` | `Order` | Placed orders (never deleted) |
//! | `reservations` | `id` | `Reservation` | Reservation records |
//! | `reviews` | `id` | `Review` | Reviews (append-only) |
//!
//! Values are JSON-serialized. Every create is a single serialized value in
//! a single commit, so a record is either fully created or not created at
//! all.
//!
//! # Status updates
//!
//! `update_order_status` / `update_reservation_status` perform the
//! read-check-write inside one write transaction and accept an optional
//! `expected` prior status. When the stored status no longer matches,
//! nothing is written and the call fails with a conflict; callers pass the
//! status they observed so racing updates surface instead of overwriting
//! each other.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::error::{AppError, ErrorCode};
use shared::models::{MenuItem, Order, OrderStatus, Reservation, ReservationStatus, Review};
use shared::util::now_millis;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::orders::money;

/// Table for catalog records: key = menu item id, value = JSON-serialized MenuItem
const MENU_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("menu_items");

/// Table for orders: key = order id, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("orders");

/// Table for reservations: key = reservation id, value = JSON-serialized Reservation
const RESERVATIONS_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("reservations");

/// Table for reviews: key = review id, value = JSON-serialized Review
const REVIEWS_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("reviews");

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Order {0} not found")]
    OrderNotFound(i64),

    #[error("Reservation {0} not found")]
    ReservationNotFound(i64),

    #[error("Order {0} status changed concurrently")]
    OrderStatusConflict(i64),

    #[error("Reservation {0} status changed concurrently")]
    ReservationStatusConflict(i64),

    #[error("Order {0} total does not match its lines")]
    OrderTotalMismatch(i64),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::OrderNotFound(id) => {
                AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", id)
            }
            StoreError::ReservationNotFound(id) => {
                AppError::new(ErrorCode::ReservationNotFound).with_detail("reservation_id", id)
            }
            StoreError::OrderStatusConflict(id) => {
                AppError::new(ErrorCode::OrderStatusConflict).with_detail("order_id", id)
            }
            StoreError::ReservationStatusConflict(id) => {
                AppError::new(ErrorCode::ReservationStatusConflict)
                    .with_detail("reservation_id", id)
            }
            StoreError::OrderTotalMismatch(id) => {
                AppError::new(ErrorCode::OrderTotalMismatch).with_detail("order_id", id)
            }
            other => AppError::database(other.to_string()),
        }
    }
}

/// Embedded record store backed by redb
///
/// redb commits are persistent as soon as `commit()` returns (copy-on-write
/// with atomic pointer swap), so the database file is always in a
/// consistent state even across unexpected shutdowns.
#[derive(Clone)]
pub struct Store {
    db: Arc<Database>,
}

impl Store {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    /// Open an in-memory database (for tests and ephemeral runs)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    /// Create all tables so later read transactions never miss one
    fn init_tables(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(MENU_TABLE)?;
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(RESERVATIONS_TABLE)?;
            let _ = write_txn.open_table(REVIEWS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Menu Items ==========

    /// Insert or replace a menu item
    pub fn put_menu_item(&self, item: &MenuItem) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(MENU_TABLE)?;
            let value = serde_json::to_vec(item)?;
            table.insert(item.id, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Get a menu item by id
    pub fn get_menu_item(&self, id: i64) -> StoreResult<Option<MenuItem>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(MENU_TABLE)?;

        match table.get(id)? {
            Some(value) => {
                let item: MenuItem = serde_json::from_slice(value.value())?;
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    /// Get all menu items
    pub fn list_menu_items(&self) -> StoreResult<Vec<MenuItem>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(MENU_TABLE)?;

        let mut items = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let item: MenuItem = serde_json::from_slice(value.value())?;
            items.push(item);
        }

        Ok(items)
    }

    /// Remove a menu item, returning whether it existed
    pub fn delete_menu_item(&self, id: i64) -> StoreResult<bool> {
        let txn = self.db.begin_write()?;
        let existed = {
            let mut table = txn.open_table(MENU_TABLE)?;
            table.remove(id)?.is_some()
        };
        txn.commit()?;
        Ok(existed)
    }

    // ========== Orders ==========

    /// Insert a new order
    ///
    /// Rejects an order whose stored total does not equal the sum of its
    /// lines — that can only happen through a caller bug, and a mismatched
    /// total must never reach disk.
    pub fn insert_order(&self, order: &Order) -> StoreResult<()> {
        let lines_total = money::to_f64(money::lines_total(&order.items));
        if !money::money_eq(order.total_price, lines_total) {
            return Err(StoreError::OrderTotalMismatch(order.id));
        }

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            let value = serde_json::to_vec(order)?;
            table.insert(order.id, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Get an order by id
    pub fn get_order(&self, id: i64) -> StoreResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        match table.get(id)? {
            Some(value) => {
                let order: Order = serde_json::from_slice(value.value())?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    /// Get all orders
    pub fn list_orders(&self) -> StoreResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let mut orders = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let order: Order = serde_json::from_slice(value.value())?;
            orders.push(order);
        }

        Ok(orders)
    }

    /// Get all orders belonging to a user
    pub fn list_orders_for_user(&self, user_id: i64) -> StoreResult<Vec<Order>> {
        let orders = self.list_orders()?;
        Ok(orders.into_iter().filter(|o| o.user_id == user_id).collect())
    }

    /// Update an order's status inside a single write transaction
    ///
    /// When `expected` is supplied and the stored status differs, nothing
    /// is written and the call fails with a conflict.
    pub fn update_order_status(
        &self,
        id: i64,
        new_status: OrderStatus,
        expected: Option<OrderStatus>,
    ) -> StoreResult<Order> {
        let txn = self.db.begin_write()?;
        let updated = {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            let mut order: Order = match table.get(id)? {
                Some(value) => serde_json::from_slice(value.value())?,
                None => return Err(StoreError::OrderNotFound(id)),
            };

            if let Some(expected) = expected
                && order.status != expected
            {
                return Err(StoreError::OrderStatusConflict(id));
            }

            order.status = new_status;
            order.updated_at = now_millis();
            let value = serde_json::to_vec(&order)?;
            table.insert(id, value.as_slice())?;
            order
        };
        txn.commit()?;
        Ok(updated)
    }

    // ========== Reservations ==========

    /// Insert a new reservation
    pub fn insert_reservation(&self, reservation: &Reservation) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(RESERVATIONS_TABLE)?;
            let value = serde_json::to_vec(reservation)?;
            table.insert(reservation.id, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Get a reservation by id
    pub fn get_reservation(&self, id: i64) -> StoreResult<Option<Reservation>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RESERVATIONS_TABLE)?;

        match table.get(id)? {
            Some(value) => {
                let reservation: Reservation = serde_json::from_slice(value.value())?;
                Ok(Some(reservation))
            }
            None => Ok(None),
        }
    }

    /// Get all reservations
    pub fn list_reservations(&self) -> StoreResult<Vec<Reservation>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RESERVATIONS_TABLE)?;

        let mut reservations = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let reservation: Reservation = serde_json::from_slice(value.value())?;
            reservations.push(reservation);
        }

        Ok(reservations)
    }

    /// Update a reservation's status inside a single write transaction
    ///
    /// Same precondition contract as [`Store::update_order_status`].
    pub fn update_reservation_status(
        &self,
        id: i64,
        new_status: ReservationStatus,
        expected: Option<ReservationStatus>,
    ) -> StoreResult<Reservation> {
        let txn = self.db.begin_write()?;
        let updated = {
            let mut table = txn.open_table(RESERVATIONS_TABLE)?;
            let mut reservation: Reservation = match table.get(id)? {
                Some(value) => serde_json::from_slice(value.value())?,
                None => return Err(StoreError::ReservationNotFound(id)),
            };

            if let Some(expected) = expected
                && reservation.status != expected
            {
                return Err(StoreError::ReservationStatusConflict(id));
            }

            reservation.status = new_status;
            reservation.updated_at = now_millis();
            let value = serde_json::to_vec(&reservation)?;
            table.insert(id, value.as_slice())?;
            reservation
        };
        txn.commit()?;
        Ok(updated)
    }

    // ========== Reviews ==========

    /// Insert a new review (reviews are append-only)
    pub fn insert_review(&self, review: &Review) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(REVIEWS_TABLE)?;
            let value = serde_json::to_vec(review)?;
            table.insert(review.id, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Get all reviews
    pub fn list_reviews(&self) -> StoreResult<Vec<Review>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(REVIEWS_TABLE)?;

        let mut reviews = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let review: Review = serde_json::from_slice(value.value())?;
            reviews.push(review);
        }

        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MenuCategory, OrderLine};
    use shared::util::snowflake_id;

    fn sample_item(id: i64, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: "test item".to_string(),
            price,
            category: MenuCategory::Lunch,
            image: String::new(),
            available: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn sample_order(id: i64, user_id: i64, status: OrderStatus) -> Order {
        let items = vec![OrderLine {
            menu_item_id: 1,
            name: "Paella".to_string(),
            quantity: 2,
            price: 12.99,
        }];
        Order {
            id,
            user_id,
            total_price: 25.98,
            items,
            status,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_menu_item_round_trip() {
        let store = Store::open_in_memory().unwrap();
        let item = sample_item(1, "Paella", 12.99);

        store.put_menu_item(&item).unwrap();
        let loaded = store.get_menu_item(1).unwrap().unwrap();
        assert_eq!(loaded.name, "Paella");
        assert_eq!(loaded.price, 12.99);

        assert!(store.get_menu_item(999).unwrap().is_none());
        assert!(store.delete_menu_item(1).unwrap());
        assert!(!store.delete_menu_item(1).unwrap());
    }

    #[test]
    fn test_order_round_trip_and_listing() {
        let store = Store::open_in_memory().unwrap();
        store.insert_order(&sample_order(1, 10, OrderStatus::Pending)).unwrap();
        store.insert_order(&sample_order(2, 20, OrderStatus::Pending)).unwrap();
        store.insert_order(&sample_order(3, 10, OrderStatus::Pending)).unwrap();

        assert_eq!(store.list_orders().unwrap().len(), 3);
        let mine = store.list_orders_for_user(10).unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|o| o.user_id == 10));
    }

    #[test]
    fn test_insert_order_rejects_total_mismatch() {
        let store = Store::open_in_memory().unwrap();
        let mut order = sample_order(1, 10, OrderStatus::Pending);
        order.total_price = 99.99;

        let err = store.insert_order(&order).unwrap_err();
        assert!(matches!(err, StoreError::OrderTotalMismatch(1)));
        assert!(store.get_order(1).unwrap().is_none());
    }

    #[test]
    fn test_update_order_status() {
        let store = Store::open_in_memory().unwrap();
        store.insert_order(&sample_order(1, 10, OrderStatus::Pending)).unwrap();

        let updated = store
            .update_order_status(1, OrderStatus::Processing, Some(OrderStatus::Pending))
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Processing);

        let stored = store.get_order(1).unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Processing);
    }

    #[test]
    fn test_update_order_status_stale_precondition() {
        let store = Store::open_in_memory().unwrap();
        store.insert_order(&sample_order(1, 10, OrderStatus::Processing)).unwrap();

        // A concurrent admin already moved the order on — the stale write fails
        let err = store
            .update_order_status(1, OrderStatus::Cancelled, Some(OrderStatus::Pending))
            .unwrap_err();
        assert!(matches!(err, StoreError::OrderStatusConflict(1)));

        // Nothing was written
        let stored = store.get_order(1).unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Processing);
    }

    #[test]
    fn test_update_order_status_not_found() {
        let store = Store::open_in_memory().unwrap();
        let err = store
            .update_order_status(42, OrderStatus::Processing, None)
            .unwrap_err();
        assert!(matches!(err, StoreError::OrderNotFound(42)));
    }

    #[test]
    fn test_reservation_status_cas() {
        let store = Store::open_in_memory().unwrap();
        let reservation = Reservation {
            id: 1,
            name: "Ada".to_string(),
            phone: "5551234".to_string(),
            email: "ada@example.com".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time: "19:30".to_string(),
            guests: 4,
            special_requests: None,
            status: ReservationStatus::Pending,
            created_at: 0,
            updated_at: 0,
        };
        store.insert_reservation(&reservation).unwrap();

        let updated = store
            .update_reservation_status(1, ReservationStatus::Confirmed, Some(ReservationStatus::Pending))
            .unwrap();
        assert_eq!(updated.status, ReservationStatus::Confirmed);

        let err = store
            .update_reservation_status(1, ReservationStatus::Cancelled, Some(ReservationStatus::Pending))
            .unwrap_err();
        assert!(matches!(err, StoreError::ReservationStatusConflict(1)));
    }

    #[test]
    fn test_reviews_append_only() {
        let store = Store::open_in_memory().unwrap();
        for rating in [5, 3] {
            let review = Review {
                id: snowflake_id(),
                user_id: 1,
                user_name: "Grace".to_string(),
                rating,
                comment: "good".to_string(),
                created_at: 0,
            };
            store.insert_review(&review).unwrap();
        }
        assert_eq!(store.list_reviews().unwrap().len(), 2);
    }

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yummy.redb");

        {
            let store = Store::open(&path).unwrap();
            store.put_menu_item(&sample_item(1, "Paella", 12.99)).unwrap();
        }

        // Reopen and read back
        let store = Store::open(&path).unwrap();
        assert_eq!(store.get_menu_item(1).unwrap().unwrap().name, "Paella");
    }
}
