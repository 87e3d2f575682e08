use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A catalog item customers can request quotes for. There is no unit price;
/// `price_range` is a display hint and real pricing happens per quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Category slug.
    pub category: String,
    #[serde(default)]
    pub variants: Vec<String>,
    pub min_order_quantity: Option<u32>,
    pub price_range: Option<String>,
    pub stock_quantity: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub category: String,
    pub variants: Vec<String>,
    pub min_order_quantity: Option<u32>,
    pub price_range: Option<String>,
    pub stock_quantity: Option<i64>,
    pub is_active: bool,
    pub is_featured: bool,
}

impl Default for ProductInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            images: Vec::new(),
            category: String::new(),
            variants: Vec::new(),
            min_order_quantity: None,
            price_range: None,
            stock_quantity: None,
            is_active: true,
            is_featured: false,
        }
    }
}

impl Product {
    /// Lowest quantity the storefront lets a customer request.
    pub fn minimum_quantity(&self) -> u32 {
        self.min_order_quantity.unwrap_or(1).max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of `POST /api/upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub url: String,
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_quantity_defaults_to_one() {
        let json = serde_json::json!({
            "id": "p1",
            "name": "Brake pad",
            "description": "",
            "category": "brakes",
            "created_at": "2026-01-01T00:00:00Z"
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.minimum_quantity(), 1);
        assert!(product.is_active);
        assert!(!product.is_featured);
    }

    #[test]
    fn test_minimum_quantity_never_zero() {
        let json = serde_json::json!({
            "id": "p1",
            "name": "Brake pad",
            "description": "",
            "category": "brakes",
            "min_order_quantity": 0,
            "created_at": "2026-01-01T00:00:00Z"
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.minimum_quantity(), 1);
    }
}
