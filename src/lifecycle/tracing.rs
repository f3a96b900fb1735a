//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber. Call it once, from the
//! binary; the library itself only emits events.
//!
//! ## Configuration
//!
//! Compact format, no module prefix (`with_target(false)`). Store actors tag their
//! events with `entity_type` instead. Levels come from `RUST_LOG`:
//!
//! ```bash
//! # Lifecycle and writes
//! RUST_LOG=info cargo run
//!
//! # Every request with its payload
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Store actors**: startup, shutdown, every create / update / delete / action
//! - **Gateways**: one span per call (`#[instrument]`), payloads at `debug`
//! - **Views**: page loads, rejected calls, notices
//!
//! With `RUST_LOG=info` an admin upload followed by a bulk delete reads:
//!
//! ```text
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO Created entity_type="Product" id=product_2 size=2
//! INFO bulk_create: Bulk upload complete created=2
//! INFO Deleted entity_type="Product" id=product_1 size=1
//! INFO delete_by_ids: Products deleted deleted=1
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "bulk_create:")
        .init();
}
