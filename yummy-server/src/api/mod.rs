//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`menu`] - public menu + admin catalog management
//! - [`orders`] - order placement, listing and status updates
//! - [`reservations`] - reservation intake and status updates
//! - [`reviews`] - review submission and aggregated listing

pub mod health;
pub mod menu;
pub mod orders;
pub mod reservations;
pub mod reviews;
