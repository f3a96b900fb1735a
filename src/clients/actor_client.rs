use crate::framework::{ActorEntity, FrameworkError, ListQuery, Listing, ResourceClient};
use async_trait::async_trait;

/// Trait for record-specific gateways to inherit standard store operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// `get`, `list` and `delete`. Implementors only say how framework errors map
/// onto their own error type.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Run a list query against the store.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: ListQuery<T>) -> Result<Listing<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete a record by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

/// Unwraps an entity error back into the record's own error type.
///
/// Store actors box hook errors into [`FrameworkError::EntityError`]; gateways
/// want the concrete enum back so callers can match on it.
pub(crate) fn entity_error<E>(e: FrameworkError, not_found: fn(String) -> E) -> E
where
    E: std::error::Error + From<String> + 'static,
{
    match e {
        FrameworkError::NotFound(id) => not_found(id),
        FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
            Ok(err) => *err,
            Err(other) => E::from(other.to_string()),
        },
        other => E::from(other.to_string()),
    }
}
