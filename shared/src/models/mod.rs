//! Domain models
//!
//! One module per entity, each carrying the stored entity plus its
//! create/update payload DTOs.

pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod review;

pub use menu_item::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{CartLine, Order, OrderLine, OrderStatus};
pub use reservation::{
    MAX_GUESTS, MIN_GUESTS, Reservation, ReservationCreate, ReservationStatus,
};
pub use review::{MAX_RATING, MIN_RATING, Review, ReviewCreate, ReviewSummary};
