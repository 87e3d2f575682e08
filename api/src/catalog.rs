//! Categories, products, brands, and file upload.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    Brand, BrandInput, Category, CategoryInput, Product, ProductInput, UploadedFile,
};

pub async fn list_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    client.get("/api/categories").await
}

pub async fn create_category(
    client: &ApiClient,
    input: &CategoryInput,
) -> Result<Category, ApiError> {
    client.post("/api/categories", input).await
}

pub async fn update_category(
    client: &ApiClient,
    id: &str,
    input: &CategoryInput,
) -> Result<Category, ApiError> {
    client.put(&format!("/api/categories/{id}"), input).await
}

pub async fn delete_category(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/categories/{id}")).await
}

/// List products, optionally narrowed to one category slug.
pub async fn list_products(
    client: &ApiClient,
    category: Option<&str>,
) -> Result<Vec<Product>, ApiError> {
    match category {
        Some(slug) => {
            client
                .get_with_query("/api/products", &[("category", slug)])
                .await
        }
        None => client.get("/api/products").await,
    }
}

pub async fn get_product(client: &ApiClient, id: &str) -> Result<Product, ApiError> {
    client.get(&format!("/api/products/{id}")).await
}

pub async fn create_product(client: &ApiClient, input: &ProductInput) -> Result<Product, ApiError> {
    client.post("/api/products", input).await
}

pub async fn update_product(
    client: &ApiClient,
    id: &str,
    input: &ProductInput,
) -> Result<Product, ApiError> {
    client.put(&format!("/api/products/{id}"), input).await
}

pub async fn delete_product(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/products/{id}")).await
}

pub async fn list_brands(client: &ApiClient) -> Result<Vec<Brand>, ApiError> {
    client.get("/api/brands").await
}

pub async fn create_brand(client: &ApiClient, input: &BrandInput) -> Result<Brand, ApiError> {
    client.post("/api/brands", input).await
}

pub async fn update_brand(
    client: &ApiClient,
    id: &str,
    input: &BrandInput,
) -> Result<Brand, ApiError> {
    client.put(&format!("/api/brands/{id}"), input).await
}

pub async fn delete_brand(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/brands/{id}")).await
}

/// Upload a file (product image or quote attachment). The backend answers
/// with the URL to reference in subsequent payloads.
pub async fn upload_file(
    client: &ApiClient,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<UploadedFile, ApiError> {
    let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);
    client.post_multipart("/api/upload", form).await
}
