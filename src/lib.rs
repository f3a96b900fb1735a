#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Storefront
//!
//! > **The state layer of an online shop, on resource-oriented actors.**
//!
//! This crate holds everything a storefront screen needs between the user's click
//! and the data store: the product catalog, carts, wishlists and orders, plus the
//! screen state that sits on top of them (checkbox selection over a paginated
//! product table, cart and wishlist toggles, order totals).
//!
//! ## 🏗️ Design Philosophy
//!
//! Each record type lives in its own **store actor**: a Tokio task that owns the
//! collection and answers create / get / list / update / delete requests over a
//! channel. Screens never talk to an actor directly. They hold a **gateway**, a
//! typed client that turns store replies into domain errors.
//!
//! Screen state is plain data behind `&mut self`. A view calls a gateway, and only
//! after the call succeeds does it touch its own state. There are no optimistic
//! updates anywhere.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each store defines its own error type (`ProductError`, `CartError`, `WishlistError`,
//! `OrderError`). Hook errors raised inside an actor travel back boxed and are
//! unwrapped into the concrete enum by the gateway, so callers can match on them.
//!
//! ### 2. Async Context Injection
//! Dependencies are injected when the actor loop starts (`run(context)`), not at
//! construction. The cart, wishlist and order stores get the catalog client this way
//! and check that products exist before accepting a record.
//!
//! ### 3. Concurrency Model
//! Each store processes its requests sequentially, so its state needs no locks.
//! Different stores run in parallel.
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` and the [`ActorEntity`](framework::ActorEntity) trait,
//! plus [`framework::mock`] for testing gateways without an actor.
//!
//! ### 2. The Stores ([`product_actor`], [`cart_actor`], [`wishlist_actor`], [`order_actor`])
//! `ActorEntity` implementations for the records in [`model`], with their validation rules.
//!
//! ### 3. The Gateways ([`clients`])
//! - [`ProductClient`](clients::ProductClient): upload, bulk upload, paged listing, bulk delete
//! - [`CartClient`](clients::CartClient) / [`WishlistClient`](clients::WishlistClient): per-user membership
//! - [`OrderClient`](clients::OrderClient): place, list, remove
//!
//! ### 4. The Screens ([`views`])
//! - [`SelectionSet`](views::SelectionSet): row checkboxes and the derived select-all box
//! - [`ProductListView`](views::ProductListView): the admin product table
//! - [`MembershipToggler`](views::MembershipToggler): cart button and wishlist heart
//! - [`OrderList`](views::OrderList): order totals and free-shipping check
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`StorefrontSystem`](lifecycle::StorefrontSystem) starts and wires the stores;
//! [`config`] supplies buffer sizes, page size and shipping rules.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod product_actor;
pub mod session;
pub mod views;
pub mod wishlist_actor;
