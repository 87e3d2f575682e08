//! Vehicle fleet CRUD.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Vehicle, VehicleInput};

pub async fn list_vehicles(client: &ApiClient) -> Result<Vec<Vehicle>, ApiError> {
    client.get("/api/vehicles").await
}

pub async fn create_vehicle(client: &ApiClient, input: &VehicleInput) -> Result<Vehicle, ApiError> {
    client.post("/api/vehicles", input).await
}

pub async fn update_vehicle(
    client: &ApiClient,
    id: &str,
    input: &VehicleInput,
) -> Result<Vehicle, ApiError> {
    client.put(&format!("/api/vehicles/{id}"), input).await
}

pub async fn delete_vehicle(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/vehicles/{id}")).await
}
