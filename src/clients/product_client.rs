use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ListQuery, ResourceClient};
use crate::model::{Page, Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;
use crate::session::Session;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Catalog data gateway.
///
/// Thin request/response wrapper over the product store. It never retries;
/// every failure is handed back to the caller as a [`ProductError`].
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    fn require_admin(session: &Session) -> Result<(), ProductError> {
        if !session.is_admin() {
            warn!(user_id = %session.user_id, "Catalog write refused");
            return Err(ProductError::Forbidden(session.user_id.clone()));
        }
        Ok(())
    }

    /// Uploads one product.
    #[instrument(skip(self, session, product), fields(user_id = %session.user_id))]
    pub async fn create_product(
        &self,
        session: &Session,
        product: ProductCreate,
    ) -> Result<ProductId, ProductError> {
        debug!(?product, "create_product called");
        Self::require_admin(session)?;
        self.inner.create(product).await.map_err(Self::map_error)
    }

    /// Uploads products one after another.
    ///
    /// Not transactional: a rejected product does not stop the upload, and the
    /// products created before and after it stay persisted. If anything was
    /// rejected the call fails with [`ProductError::BulkCreateFailed`], which
    /// lists both the created ids and the rejected input positions.
    #[instrument(skip(self, session, products), fields(user_id = %session.user_id, count = products.len()))]
    pub async fn bulk_create(
        &self,
        session: &Session,
        products: Vec<ProductCreate>,
    ) -> Result<Vec<ProductId>, ProductError> {
        Self::require_admin(session)?;

        let mut created = Vec::with_capacity(products.len());
        let mut failures = Vec::new();
        for (index, product) in products.into_iter().enumerate() {
            match self.inner.create(product).await {
                Ok(id) => created.push(id),
                Err(e) => {
                    let reason = Self::map_error(e).to_string();
                    warn!(index, %reason, "Product rejected");
                    failures.push((index, reason));
                }
            }
        }

        if failures.is_empty() {
            info!(created = created.len(), "Bulk upload complete");
            Ok(created)
        } else {
            Err(ProductError::BulkCreateFailed { created, failures })
        }
    }

    /// Reads one page of the catalog, in creation order, with the total count.
    ///
    /// `page` is 1-based.
    #[instrument(skip(self))]
    pub async fn list_page(&self, page: usize, page_size: usize) -> Result<Page<Product>, ProductError> {
        let invalid = || ProductError::InvalidPage { page, page_size };
        if page == 0 || page_size == 0 {
            return Err(invalid());
        }
        let offset = (page - 1).checked_mul(page_size).ok_or_else(invalid)?;

        let listing = self.list(ListQuery::all().window(offset, page_size)).await?;
        debug!(total = listing.total, returned = listing.items.len(), "Page loaded");
        Ok(Page {
            items: listing.items,
            total: listing.total,
            page,
            page_size,
        })
    }

    /// Deletes the given products one after another.
    ///
    /// Stops at the first failure with [`ProductError::DeleteInterrupted`];
    /// products deleted before it stay deleted. Returns the number deleted.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn delete_by_ids(&self, session: &Session, ids: &[ProductId]) -> Result<usize, ProductError> {
        Self::require_admin(session)?;

        let mut deleted = Vec::with_capacity(ids.len());
        for &id in ids {
            if let Err(e) = self.delete(id).await {
                warn!(%id, error = %e, "Delete failed");
                return Err(ProductError::DeleteInterrupted {
                    deleted,
                    failed: id,
                    reason: e.to_string(),
                });
            }
            deleted.push(id);
        }
        info!(deleted = deleted.len(), "Products deleted");
        Ok(deleted.len())
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        entity_error(e, ProductError::NotFound)
    }
}
