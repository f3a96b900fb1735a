//! The signed-in user, as handed over by the auth provider.
//!
//! The storefront only reads the session. Sign-in, sign-up and token refresh
//! live elsewhere.

use crate::model::UserId;
use serde::{Deserialize, Serialize};

/// Account type stored with the user by the auth provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A shopper. The auth provider spells this `indivisual`.
    #[serde(rename = "indivisual", alias = "individual")]
    Individual,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    #[serde(rename = "user_type")]
    pub role: Role,
}

impl Session {
    pub fn new(user_id: impl Into<UserId>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn individual(user_id: &str) -> Self {
        Self::new(user_id, Role::Individual)
    }

    pub fn admin(user_id: &str) -> Self {
        Self::new(user_id, Role::Admin)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
