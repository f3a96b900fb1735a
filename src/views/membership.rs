//! Cart button and wishlist heart: local membership state over a gateway.

use crate::clients::{CartClient, MembershipGateway, WishlistClient};
use crate::model::{ProductId, UserId};
use crate::notify::Notifier;
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// What a successful [`MembershipToggler::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Added,
    Removed,
}

/// Which products are in one of the user's lists, kept in step with the store.
///
/// Nothing changes locally until the gateway call has succeeded. Failures
/// leave the state as it was, raise an error notice, and are returned.
pub struct MembershipToggler<G: MembershipGateway, N: Notifier> {
    gateway: G,
    notifier: N,
    user_id: UserId,
    members: HashSet<ProductId>,
    count: usize,
}

pub type CartToggler<N> = MembershipToggler<CartClient, N>;
pub type WishlistToggler<N> = MembershipToggler<WishlistClient, N>;

impl<G: MembershipGateway, N: Notifier> MembershipToggler<G, N> {
    /// An empty toggler. Call [`sync`](Self::sync) to load the user's list.
    pub fn new(gateway: G, notifier: N, user_id: UserId) -> Self {
        Self {
            gateway,
            notifier,
            user_id,
            members: HashSet::new(),
            count: 0,
        }
    }

    /// Replaces the local set with the store's. Keeps the old set on failure.
    #[instrument(skip(self), fields(kind = self.gateway.kind(), user_id = %self.user_id))]
    pub async fn sync(&mut self) -> Result<(), G::Error> {
        match self.gateway.fetch_members(&self.user_id).await {
            Ok(members) => {
                self.members = members.into_iter().collect();
                self.count = self.members.len();
                debug!(count = self.count, "Synced");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Sync failed");
                self.notifier
                    .error(format!("Could not load your {}: {e}", self.gateway.kind()));
                Err(e)
            }
        }
    }

    pub fn is_member(&self, product_id: ProductId) -> bool {
        self.members.contains(&product_id)
    }

    /// Entry count as last reported by the store. When the store could not
    /// report one after a successful write, the local member count stands in.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn members(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.members.iter().copied()
    }

    /// Removes the product if it is a member, adds it otherwise.
    #[instrument(skip(self), fields(kind = self.gateway.kind()))]
    pub async fn toggle(&mut self, product_id: ProductId) -> Result<Membership, G::Error> {
        if self.is_member(product_id) {
            self.remove(product_id).await?;
            Ok(Membership::Removed)
        } else {
            self.add(product_id).await?;
            Ok(Membership::Added)
        }
    }

    pub async fn add(&mut self, product_id: ProductId) -> Result<(), G::Error> {
        match self.gateway.add(&self.user_id, product_id).await {
            Ok(count) => {
                self.members.insert(product_id);
                self.count = count.unwrap_or(self.members.len());
                Ok(())
            }
            Err(e) => Err(self.report("add to", product_id, e)),
        }
    }

    /// Takes the product out of the list. Never adds.
    pub async fn remove(&mut self, product_id: ProductId) -> Result<(), G::Error> {
        match self.gateway.remove(&self.user_id, product_id).await {
            Ok(count) => {
                self.members.remove(&product_id);
                self.count = count.unwrap_or(self.members.len());
                Ok(())
            }
            Err(e) => Err(self.report("remove from", product_id, e)),
        }
    }

    fn report(&self, verb: &str, product_id: ProductId, error: G::Error) -> G::Error {
        warn!(%product_id, %error, "{} {} failed", verb, self.gateway.kind());
        self.notifier.error(format!(
            "Could not {verb} your {}, please try again: {error}",
            self.gateway.kind()
        ));
        error
    }
}
