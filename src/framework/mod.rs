//! Generic actor framework for record stores.
//!
//! This module provides the building blocks for type-safe actor systems that
//! manage records with CRUD operations, list queries, and custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns one collection
//! - [`ResourceClient`] - Type-safe handle for talking to a `ResourceActor`
//! - [`ListQuery`] / [`Listing`] - Filtered, windowed reads
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test gateways without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
