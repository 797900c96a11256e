//! Wire types for the storefront API.
//!
//! Field names mirror the remote JSON exactly (camelCase, plus a few
//! legacy names the API never migrated).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tienda_core::types::{
    AddressId, CartId, CartItemId, CategoryId, FeatureId, Intent, OrderId, OrderItemId,
    OrderStatus, ProductId, UserProfile,
};

// =============================================================================
// Catalog
// =============================================================================

/// A product attribute such as color or material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub name: String,
    pub value: String,
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visible: Option<bool>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A category together with its products.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithProducts {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub products: Vec<Product>,
    pub total_products: u64,
}

/// A feature together with the products carrying it.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureWithProducts {
    pub feature: Feature,
    pub products: Vec<Product>,
}

/// Catalog search filters; unset fields are left out of the query.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Category slug.
    pub category: Option<String>,
    /// Feature name.
    pub feature: Option<String>,
    /// Free-text search.
    pub search: Option<String>,
    /// Minimum price, inclusive.
    pub min_price: Option<Decimal>,
    /// Maximum price, inclusive.
    pub max_price: Option<Decimal>,
}

impl ProductFilter {
    pub(crate) fn query_pairs(&self, page: u32, size: u32) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", page.to_string()), ("size", size.to_string())];
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(feature) = &self.feature {
            pairs.push(("feature", feature.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        pairs
    }
}

// =============================================================================
// Auth & account
// =============================================================================

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Credential plus profile returned by login and registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

/// Partial profile update; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_full_name: Option<String>,
}

/// Password change request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

/// A saved shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Address create/update request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AddressId>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

// =============================================================================
// Cart
// =============================================================================

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product_sku: String,
    pub product_name: String,
    pub unit_price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: u32,
}

/// Cart contents with server-computed totals.
///
/// The tax fields keep the API's legacy names: `baseImponible` is the
/// pre-tax subtotal, `igv` the sales-tax amount, `totalConIGV` the
/// grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub cart_id: CartId,
    pub owner_email: String,
    pub items: Vec<CartItem>,
    #[serde(rename = "baseImponible")]
    pub subtotal: Decimal,
    pub igv: Decimal,
    #[serde(rename = "igv_rate")]
    pub igv_rate: Decimal,
    #[serde(rename = "totalConIGV")]
    pub total: Decimal,
}

/// Request body for adding or merging a cart line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItem {
    pub product_sku: String,
    pub quantity: u32,
}

// =============================================================================
// Orders
// =============================================================================

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_sku: String,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_sku: String,
    pub customer_email: String,
    pub status: OrderStatus,
    pub address_detail: Address,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

/// One line of a new order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub product_sku: String,
    pub quantity: u32,
}

/// Checkout request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_email: String,
    pub is_anonymous: bool,
    pub address_detail: NewAddress,
    pub items: Vec<NewOrderItem>,
}

// =============================================================================
// Chat
// =============================================================================

/// Chat session handle returned by `/api/chat/init`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatInit {
    pub session_id: String,
}

/// Outbound chat message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Payload of a chat reply.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContent {
    pub reply: String,
    #[serde(default)]
    pub products: Vec<Product>,
    pub add_to_cart: bool,
    pub is_user_authenticated: bool,
}

/// A reply from the chat backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    #[serde(rename = "type")]
    pub intent: Intent,
    pub content: ChatContent,
    pub is_resolved: bool,
}

// =============================================================================
// Static content
// =============================================================================

/// An informational card inside an about section.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// One section of the about page.
#[derive(Debug, Clone, Deserialize)]
pub struct AboutSection {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// A frequently asked question.
#[derive(Debug, Clone, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A store policy document.
#[derive(Debug, Clone, Deserialize)]
pub struct Policy {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_shape() {
        let json = r#"{
            "id": 10,
            "sku": "MUG-01",
            "name": "Ceramic mug",
            "price": 25.5,
            "stock": 8,
            "imageUrl": "https://cdn.example.com/mug.jpg",
            "category": {"id": 2, "name": "Kitchen", "slug": "kitchen"},
            "features": [{"id": 1, "name": "color", "value": "blue"}]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.sku, "MUG-01");
        assert_eq!(product.price, Decimal::try_from(25.5).unwrap());
        assert_eq!(product.category.slug, "kitchen");
        assert_eq!(product.features.len(), 1);
        assert!(product.description.is_none());
    }

    #[test]
    fn test_cart_legacy_field_names() {
        let json = r#"{
            "cartId": 4,
            "ownerEmail": "ana@example.com",
            "items": [],
            "baseImponible": 100.0,
            "igv": 18.0,
            "igv_rate": 0.18,
            "totalConIGV": 118.0
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.subtotal, Decimal::from(100));
        assert_eq!(cart.igv_rate, Decimal::try_from(0.18).unwrap());
        assert_eq!(cart.total, Decimal::from(118));
    }

    #[test]
    fn test_product_filter_query_pairs() {
        let filter = ProductFilter {
            category: Some("kitchen".to_string()),
            search: Some("mug".to_string()),
            min_price: Some(Decimal::from(10)),
            ..ProductFilter::default()
        };
        let pairs = filter.query_pairs(2, 12);
        assert!(pairs.contains(&("page", "2".to_string())));
        assert!(pairs.contains(&("size", "12".to_string())));
        assert!(pairs.contains(&("category", "kitchen".to_string())));
        assert!(pairs.contains(&("minPrice", "10".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "maxPrice"));
    }

    #[test]
    fn test_chat_reply_wire_shape() {
        let json = r#"{
            "type": "PRODUCT_SEARCH",
            "content": {
                "reply": "Here is what I found",
                "products": [],
                "addToCart": false,
                "isUserAuthenticated": true
            },
            "isResolved": true
        }"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.intent, Intent::ProductSearch);
        assert!(reply.is_resolved);
    }
}
