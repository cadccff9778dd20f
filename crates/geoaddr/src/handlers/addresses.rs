//! Address handlers.
//!
//! `POST /address/` and `GET /address/` answer with [`AddressView`], which has
//! no `id`. `GET /between_address/` answers with [`StoredAddress`], which
//! does. Existing clients depend on both shapes.

use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde_json::Value;

use geoaddr_core::address::{
    validate_address, validate_longitude_range, views, AddressView, FieldError, StoredAddress,
    ValidationError,
};

use crate::{handlers::AppError, state::AppState};

/// Create an address (POST /address/).
pub async fn create_address(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AddressView>, AppError> {
    // Unparseable JSON is a validation failure; content type and body size
    // problems keep their own status
    let Json(body) = body.map_err(|rejection| match rejection {
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => AppError::from(
            ValidationError::single(FieldError::json_decode(rejection.body_text())),
        ),
        other => AppError::from(other),
    })?;

    let address = validate_address(&body)?;
    let stored = state.address_repo.create_address(&address).await?;

    tracing::info!(address_id = stored.id, name = %stored.name, "Created new address");

    Ok(Json(AddressView::from(stored)))
}

/// List all addresses (GET /address/).
pub async fn list_addresses(
    State(state): State<AppState>,
) -> Result<Json<Vec<AddressView>>, AppError> {
    let addresses = state.address_repo.list_addresses().await?;

    Ok(Json(views(&addresses)))
}

/// List addresses within a longitude range (GET /between_address/).
///
/// Query parameters `lng_from` and `lng_to` are both required and inclusive.
pub async fn list_addresses_between(
    State(state): State<AppState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<Vec<StoredAddress>>, AppError> {
    let Query(params) = params.map_err(|e| {
        ValidationError::single(FieldError {
            loc: vec!["query".to_string()],
            msg: e.body_text(),
            kind: "value_error".to_string(),
        })
    })?;

    let range = validate_longitude_range(&params)?;
    let addresses = state
        .address_repo
        .list_addresses_by_longitude(range)
        .await?;

    tracing::debug!(
        from = range.from,
        to = range.to,
        count = addresses.len(),
        "Listed addresses by longitude"
    );

    Ok(Json(addresses))
}
