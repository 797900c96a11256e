//! Wire types for the back-office endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tienda_core::types::{CategoryId, FeatureId, OrderStatus, Role};

/// One entry of the administrative audit trail.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: i64,
    pub actor_email: String,
    pub action: String,
    pub entity: String,
    #[serde(default)]
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Category create/update request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// Feature create/update request body.
#[derive(Debug, Clone, Serialize)]
pub struct NewFeature {
    pub name: String,
    pub value: String,
}

/// Product fields sent alongside the optional image in the multipart
/// form.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub visible: bool,
    pub category_id: CategoryId,
    pub feature_ids: Vec<FeatureId>,
    /// Image file contents plus the filename to report.
    pub image: Option<ProductImage>,
}

/// An image attached to a product upload.
#[derive(Debug, Clone)]
pub struct ProductImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Partial product update; unset fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub visible: Option<bool>,
    pub category_id: Option<CategoryId>,
    pub feature_ids: Option<Vec<FeatureId>>,
    pub image: Option<ProductImage>,
}

/// Role change request body.
#[derive(Debug, Clone, Serialize)]
pub struct RoleChange {
    pub role: Role,
}

/// Order status change request body.
#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusChange {
    pub status: OrderStatus,
}
