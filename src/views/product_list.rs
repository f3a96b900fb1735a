//! State behind the admin product-management screen.

use crate::clients::ProductClient;
use crate::model::{total_pages, Page, Product, ProductCreate, ProductId};
use crate::notify::Notifier;
use crate::product_actor::ProductError;
use crate::session::Session;
use crate::views::SelectionSet;
use tracing::{debug, instrument, warn};

/// One page of the catalog plus the checkbox state over it.
///
/// Every remote call goes through the [`ProductClient`]. Local state only
/// changes after the call has succeeded.
pub struct ProductListView<N: Notifier> {
    catalog: ProductClient,
    session: Session,
    notifier: N,
    page: usize,
    page_size: usize,
    rows: Vec<Product>,
    total: usize,
    selection: SelectionSet,
}

impl<N: Notifier> ProductListView<N> {
    /// An empty view on page 1. Call [`load_page`](Self::load_page) to fill it.
    pub fn new(catalog: ProductClient, session: Session, notifier: N, page_size: usize) -> Self {
        Self {
            catalog,
            session,
            notifier,
            page: 1,
            page_size: page_size.max(1),
            rows: Vec::new(),
            total: 0,
            selection: SelectionSet::new(),
        }
    }

    pub fn rows(&self) -> &[Product] {
        &self.rows
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Fetches `page` and replaces the rows. Flags are cleared.
    ///
    /// On failure an error notice is shown and the current rows stay.
    #[instrument(skip(self))]
    pub async fn load_page(&mut self, page: usize) -> Result<(), ProductError> {
        match self.catalog.list_page(page, self.page_size).await {
            Ok(loaded) => {
                self.apply(loaded);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Page load failed");
                self.notifier.error(format!("Could not load products: {e}"));
                Err(e)
            }
        }
    }

    /// Reloads the current page, stepping back if it no longer exists.
    pub async fn refresh(&mut self) -> Result<(), ProductError> {
        self.load_page(self.page).await?;
        let last = self.total_pages();
        if self.page > last {
            self.load_page(last).await?;
        }
        Ok(())
    }

    pub async fn next_page(&mut self) -> Result<(), ProductError> {
        if self.page >= self.total_pages() {
            return Ok(());
        }
        self.load_page(self.page + 1).await
    }

    pub async fn prev_page(&mut self) -> Result<(), ProductError> {
        if self.page <= 1 {
            return Ok(());
        }
        self.load_page(self.page - 1).await
    }

    pub fn toggle_one(&mut self, id: ProductId, checked: bool) -> bool {
        self.selection.toggle_one(id, checked)
    }

    pub fn toggle_all(&mut self, checked: bool) {
        self.selection.toggle_all(checked);
    }

    pub fn is_all_checked(&self) -> bool {
        self.selection.is_all_checked()
    }

    /// Deletes the checked rows.
    ///
    /// On success the rows and their flags are dropped, a success notice is
    /// shown and the page is reloaded. On failure an error notice is shown and
    /// nothing local changes, unless the store had already deleted part of the
    /// selection: those rows are dropped, the page is reloaded, and the rows
    /// that survived stay checked. Returns how many products were deleted.
    #[instrument(skip(self))]
    pub async fn delete_selected(&mut self) -> Result<usize, ProductError> {
        let ids = self.selection.selected();
        if ids.is_empty() {
            self.notifier.error("Select the products to delete first");
            return Ok(0);
        }

        let deleted = match self.catalog.delete_by_ids(&self.session, &ids).await {
            Ok(deleted) => deleted,
            Err(e) => {
                warn!(error = %e, "Bulk delete failed");
                self.notifier.error(format!("Could not delete products: {e}"));
                if let ProductError::DeleteInterrupted { deleted, .. } = &e {
                    if !deleted.is_empty() {
                        let survivors: Vec<ProductId> =
                            ids.iter().copied().filter(|id| !deleted.contains(id)).collect();
                        self.drop_rows(deleted);
                        let _ = self.refresh().await;
                        for id in survivors {
                            self.selection.toggle_one(id, true);
                        }
                    }
                }
                return Err(e);
            }
        };

        self.drop_rows(&ids);
        self.notifier.success(format!("Deleted {deleted} products"));
        debug!(deleted, "Rows removed");

        // A failed reload keeps the pruned rows and already raised its own notice.
        let _ = self.refresh().await;
        Ok(deleted)
    }

    fn drop_rows(&mut self, ids: &[ProductId]) {
        self.rows.retain(|row| !ids.contains(&row.id));
        self.total = self.total.saturating_sub(ids.len());
        self.selection.remove_deleted(ids);
    }

    /// Uploads a batch of products and reloads the page.
    ///
    /// The page is reloaded even when the upload failed, since part of the
    /// batch may have been persisted.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn upload_products(&mut self, products: Vec<ProductCreate>) -> Result<Vec<ProductId>, ProductError> {
        let result = self.catalog.bulk_create(&self.session, products).await;
        match &result {
            Ok(created) => self
                .notifier
                .success(format!("Uploaded {} products", created.len())),
            Err(e) => self.notifier.error(format!("Upload failed: {e}")),
        }
        let _ = self.refresh().await;
        result
    }

    fn apply(&mut self, loaded: Page<Product>) {
        self.page = loaded.page;
        self.total = loaded.total;
        self.selection.set_page(loaded.items.iter().map(|row| row.id));
        self.rows = loaded.items;
        debug!(page = self.page, rows = self.rows.len(), total = self.total, "Page applied");
    }
}
