use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a signed-in user, as issued by the auth provider.
///
/// The storefront never creates users; it only keys cart, wishlist and order
/// records by the id it finds in the [`Session`](crate::session::Session).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
