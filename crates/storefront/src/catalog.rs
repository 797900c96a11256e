//! Catalog browsing: products, categories, features.

use tienda_core::page::PageData;
use tienda_core::pager::{PageFetcher, Paginator};
use tienda_core::session::SessionStore;
use tienda_core::types::{FeatureId, ProductId};

use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::types::{Category, CategoryWithProducts, Feature, FeatureWithProducts, Product, ProductFilter};

impl<S: SessionStore> ApiClient<S> {
    /// Fetch one page of the product catalog.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the query is rejected.
    pub async fn products(
        &self,
        filter: &ProductFilter,
        page: u32,
        size: u32,
    ) -> Result<PageData<Product>> {
        self.get_with("/api/products", &filter.query_pairs(page, size))
            .await
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the product does not exist.
    pub async fn product(&self, id: ProductId) -> Result<Product> {
        self.get(&format!("/api/products/{id}")).await
    }

    /// Fetch one page of categories, optionally filtered by name.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the query is rejected.
    pub async fn categories(
        &self,
        name: Option<&str>,
        page: u32,
        size: u32,
    ) -> Result<PageData<Category>> {
        let mut query = vec![("page", page.to_string()), ("size", size.to_string())];
        if let Some(name) = name {
            query.push(("name", name.to_string()));
        }
        self.get_with("/api/categories", &query).await
    }

    /// Fetch a single category by slug.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the category does not exist.
    pub async fn category(&self, slug: &str) -> Result<Category> {
        self.get(&format!("/api/categories/{slug}")).await
    }

    /// Fetch a category together with its products.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the category does not exist.
    pub async fn category_with_products(&self, slug: &str) -> Result<CategoryWithProducts> {
        self.get(&format!("/api/categories/{slug}/products")).await
    }

    /// Fetch the page of product features, optionally filtered by name.
    ///
    /// The endpoint is page-shaped but takes no paging parameters;
    /// only the optional name filter goes in the query.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the request is rejected.
    pub async fn features(&self, name: Option<&str>) -> Result<PageData<Feature>> {
        match name {
            Some(name) => {
                self.get_with("/api/features", &[("name", name)]).await
            }
            None => self.get("/api/features").await,
        }
    }

    /// Fetch a single feature by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the feature does not exist.
    pub async fn feature(&self, id: FeatureId) -> Result<Feature> {
        self.get(&format!("/api/features/{id}")).await
    }

    /// Fetch a feature together with the products carrying it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the feature does not exist.
    pub async fn feature_with_products(&self, id: FeatureId) -> Result<FeatureWithProducts> {
        self.get(&format!("/api/features/{id}/products")).await
    }

    /// A paginator over the product catalog with the given filters.
    #[must_use]
    pub fn product_pager(&self, filter: ProductFilter) -> Paginator<Product, ProductPages<S>> {
        Paginator::with_page_size(
            ProductPages {
                client: self.clone(),
                filter,
            },
            self.default_page_size(),
        )
    }

    /// A paginator over categories, optionally filtered by name.
    #[must_use]
    pub fn category_pager(&self, name: Option<String>) -> Paginator<Category, CategoryPages<S>> {
        Paginator::with_page_size(
            CategoryPages {
                client: self.clone(),
                name,
            },
            self.default_page_size(),
        )
    }
}

/// Page fetcher over the filtered product catalog.
pub struct ProductPages<S> {
    client: ApiClient<S>,
    filter: ProductFilter,
}

impl<S: SessionStore> PageFetcher<Product> for ProductPages<S> {
    type Error = ApiError;

    async fn fetch_page(&self, page: u32, size: u32) -> Result<PageData<Product>> {
        self.client.products(&self.filter, page, size).await
    }
}

/// Page fetcher over categories.
pub struct CategoryPages<S> {
    client: ApiClient<S>,
    name: Option<String>,
}

impl<S: SessionStore> PageFetcher<Category> for CategoryPages<S> {
    type Error = ApiError;

    async fn fetch_page(&self, page: u32, size: u32) -> Result<PageData<Category>> {
        self.client.categories(self.name.as_deref(), page, size).await
    }
}
