//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod cart;
pub mod order;
pub mod page;
pub mod product;
pub mod user;
pub mod wishlist;

pub use cart::*;
pub use order::*;
pub use page::*;
pub use product::*;
pub use user::*;
pub use wishlist::*;
