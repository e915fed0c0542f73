use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::models::*;
use crate::store::RegistryStore;
use crate::RegistryError;

// ============================================================
// Error Handling
// ============================================================

/// Map a rejected registration to its HTTP status. Every registry error is
/// a caller mistake, so the message is returned as-is.
fn registry_error(e: RegistryError) -> (StatusCode, String) {
    let status = match e {
        RegistryError::DuplicateRegistration(_) => StatusCode::CONFLICT,
        RegistryError::MissingRegistrationCode
        | RegistryError::InvalidVolume(_)
        | RegistryError::UnrecognizedVariant(_) => StatusCode::BAD_REQUEST,
    };
    (status, e.to_string())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Vessels
// ============================================================

pub async fn list_vessels(State(store): State<RegistryStore>) -> Json<Vec<VesselDetail>> {
    Json(store.list_vessels())
}

pub async fn register_vessel(
    State(store): State<RegistryStore>,
    Json(input): Json<RegisterVesselInput>,
) -> Result<(StatusCode, Json<VesselDetail>), (StatusCode, String)> {
    store
        .register_vessel(input)
        .map(|v| (StatusCode::CREATED, Json(v.into())))
        .map_err(registry_error)
}

pub async fn get_vessel(
    State(store): State<RegistryStore>,
    Path(registration_code): Path<String>,
) -> Result<Json<VesselDetail>, (StatusCode, String)> {
    store.find_vessel(&registration_code).map(Json).ok_or((
        StatusCode::NOT_FOUND,
        format!("No vessel registered with code: {}", registration_code),
    ))
}

pub async fn get_total_capacity(State(store): State<RegistryStore>) -> Json<CapacitySummary> {
    Json(store.capacity_summary())
}
