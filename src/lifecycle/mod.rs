//! # System Lifecycle & Orchestration
//!
//! Starts the store actors, wires them together, and shuts them down.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without their dependencies and receive them at `run(context)`:
//!
//! ```rust,ignore
//! // No dependencies
//! impl ActorEntity for Product {
//!     type Context = ();
//! }
//!
//! // Checks line items against the catalog
//! impl ActorEntity for Order {
//!     type Context = ProductClient;
//! }
//! ```
//!
//! The cart, wishlist and order actors all take a clone of the catalog client.
//!
//! ## Shutdown
//!
//! [`StorefrontSystem::shutdown`] drops every client it holds and waits for the
//! actor tasks. An actor exits once the last clone of its client is gone, so
//! gateways cloned out of the system must be dropped first.

pub mod storefront_system;
pub mod tracing;

pub use self::storefront_system::StorefrontSystem;
pub use self::tracing::setup_tracing;
