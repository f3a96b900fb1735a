//! Screen state.
//!
//! Each view owns its state outright and is driven through `&mut self` by the
//! single user session holding it. Remote work goes through the gateways in
//! [`clients`](crate::clients); outcomes are reported through a
//! [`Notifier`](crate::notify::Notifier).

pub mod membership;
pub mod order_list;
pub mod product_list;
pub mod selection;

pub use membership::*;
pub use order_list::*;
pub use product_list::*;
pub use selection::*;
