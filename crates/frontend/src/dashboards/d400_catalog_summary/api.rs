use futures::future::join3;

use super::state::CatalogSummary;
use crate::shared::service::{
    HttpTransport, Resource, ServiceClient, ServiceError, ServiceResult,
};
use crate::system::auth::storage::SessionStore;

/// Count the three collections.
///
/// The list calls run concurrently and all of them are awaited. An expired
/// session in any of them wins; otherwise the first failure in resource
/// order decides the error.
pub async fn fetch_summary<T, S>(client: &ServiceClient<T, S>) -> ServiceResult<CatalogSummary>
where
    T: HttpTransport,
    S: SessionStore,
{
    let (products, categories, variants) = join3(
        client.list(Resource::Product),
        client.list(Resource::ProductCategory),
        client.list(Resource::ProductVariant),
    )
    .await;

    let expired = [&products, &categories, &variants]
        .iter()
        .any(|r| matches!(r, Err(ServiceError::TokenExpired)));
    if expired {
        return Err(ServiceError::TokenExpired);
    }

    Ok(CatalogSummary {
        products: products?.len(),
        categories: categories?.len(),
        variants: variants?.len(),
    })
}
