//! Catalog administration: categories, features, products.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::info;

use tienda_core::session::SessionStore;
use tienda_core::types::{FeatureId, ProductId};
use tienda_storefront::{Category, Feature, Product, Result};

use crate::client::AdminClient;
use crate::types::{NewCategory, NewFeature, NewProduct, ProductImage, ProductPatch};

impl<S: SessionStore> AdminClient<S> {
    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the name collides or the caller
    /// lacks permission.
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category> {
        self.api()
            .send_json(Method::POST, "/api/admin/categories", category)
            .await
    }

    /// Update a category, addressed by slug.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the category does not exist.
    pub async fn update_category(&self, slug: &str, category: &NewCategory) -> Result<Category> {
        self.api()
            .send_json(
                Method::PUT,
                &format!("/api/admin/categories/{slug}"),
                category,
            )
            .await
    }

    /// Delete a category, addressed by slug.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the category still has products or
    /// does not exist.
    pub async fn delete_category(&self, slug: &str) -> Result<()> {
        let _: serde_json::Value = self
            .api()
            .send_empty(Method::DELETE, &format!("/api/admin/categories/{slug}"))
            .await?;
        Ok(())
    }

    /// Create a feature.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the caller lacks permission.
    pub async fn create_feature(&self, feature: &NewFeature) -> Result<Feature> {
        self.api()
            .send_json(Method::POST, "/api/admin/features", feature)
            .await
    }

    /// Create several features in one call.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if any entry is rejected; the batch is
    /// all-or-nothing on the server side.
    pub async fn create_features(&self, features: &[NewFeature]) -> Result<Vec<Feature>> {
        self.api()
            .send_json(Method::POST, "/api/admin/features/bulk", features)
            .await
    }

    /// Update a feature.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the feature does not exist.
    pub async fn update_feature(&self, id: FeatureId, feature: &NewFeature) -> Result<Feature> {
        self.api()
            .send_json(Method::PUT, &format!("/api/admin/features/{id}"), feature)
            .await
    }

    /// Delete a feature.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the feature does not exist.
    pub async fn delete_feature(&self, id: FeatureId) -> Result<()> {
        let _: serde_json::Value = self
            .api()
            .send_empty(Method::DELETE, &format!("/api/admin/features/{id}"))
            .await?;
        Ok(())
    }

    /// Create a product, uploading its image in the same multipart
    /// request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the SKU collides or a referenced
    /// category or feature does not exist.
    pub async fn create_product(&self, product: NewProduct) -> Result<Product> {
        let mut form = Form::new()
            .text("sku", product.sku)
            .text("name", product.name)
            .text("price", product.price.to_string())
            .text("stock", product.stock.to_string())
            .text("visible", product.visible.to_string())
            .text("categoryId", product.category_id.to_string())
            .text("featureIds", join_ids(&product.feature_ids));
        if let Some(description) = product.description {
            form = form.text("description", description);
        }
        if let Some(image) = product.image {
            form = form.part("image", image_part(image));
        }
        let created: Product = self
            .api()
            .send_multipart(Method::POST, "/api/admin/products", form)
            .await?;
        info!(sku = %created.sku, "product created");
        Ok(created)
    }

    /// Update a product; only the set fields of the patch are sent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the product does not exist.
    pub async fn update_product(&self, id: ProductId, patch: ProductPatch) -> Result<Product> {
        let mut form = Form::new();
        if let Some(name) = patch.name {
            form = form.text("name", name);
        }
        if let Some(description) = patch.description {
            form = form.text("description", description);
        }
        if let Some(price) = patch.price {
            form = form.text("price", price.to_string());
        }
        if let Some(stock) = patch.stock {
            form = form.text("stock", stock.to_string());
        }
        if let Some(visible) = patch.visible {
            form = form.text("visible", visible.to_string());
        }
        if let Some(category_id) = patch.category_id {
            form = form.text("categoryId", category_id.to_string());
        }
        if let Some(feature_ids) = patch.feature_ids {
            form = form.text("featureIds", join_ids(&feature_ids));
        }
        if let Some(image) = patch.image {
            form = form.part("image", image_part(image));
        }
        self.api()
            .send_multipart(Method::PUT, &format!("/api/admin/products/{id}"), form)
            .await
    }

    /// Soft-delete a product; it disappears from the catalog but can
    /// be restored.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the product does not exist.
    pub async fn delete_product(&self, id: ProductId) -> Result<()> {
        let _: serde_json::Value = self
            .api()
            .send_empty(Method::DELETE, &format!("/api/admin/products/{id}"))
            .await?;
        Ok(())
    }

    /// Restore a soft-deleted product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the product does not exist or is
    /// not deleted.
    pub async fn restore_product(&self, id: ProductId) -> Result<Product> {
        self.api()
            .send_empty(Method::PATCH, &format!("/api/admin/products/{id}/restore"))
            .await
    }
}

fn image_part(image: ProductImage) -> Part {
    Part::bytes(image.bytes).file_name(image.file_name)
}

fn join_ids(ids: &[FeatureId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[]), "");
        assert_eq!(
            join_ids(&[FeatureId::new(1), FeatureId::new(2), FeatureId::new(3)]),
            "1,2,3"
        );
    }
}
