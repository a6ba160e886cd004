// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro generates:
// - On server: the actual function, which calls the backend API client
// - On client: a stub that POSTs to /api/<name> on this site
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::error::ApiError;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn client() -> Result<crate::web_app::api::ApiClient, ApiError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::{self, ApiClient};

    // First try to get from context (for testing or if manually set)
    if let Some(client) = use_context::<ApiClient>() {
        return Ok(client);
    }

    // Global client (installed by main.rs)
    if let Some(client) = api::get_client() {
        return Ok(client);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(client) = req.app_data::<Data<ApiClient>>() {
                return Ok(client.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ApiError::server(503, Some("Backend API client not available".to_string())))
}

/// List every addiction grouped by category
#[server(ListAddictionTypes, "/api")]
pub async fn list_addiction_types() -> Result<AddictionTypes, ApiError> {
    let client = client().await?;
    let result = client.addiction_types().await;

    match &result {
        Ok(types) => tracing::info!("Loaded {} addiction types", types.total()),
        Err(e) => tracing::error!("Error fetching addiction types: {}", e),
    }

    result
}

/// Get a single addiction with its tab content
#[server(GetAddiction, "/api")]
pub async fn get_addiction(id: String) -> Result<Addiction, ApiError> {
    use crate::web_app::service::validate_id;

    let id = validate_id(&id)?;
    let client = client().await?;
    let result = client.addiction(id).await;

    if let Err(e) = &result {
        tracing::error!("Error fetching addiction {}: {}", id, e);
    }

    result
}

/// Search addictions by name
#[server(SearchAddictions, "/api")]
pub async fn search_addictions(query: String) -> Result<Vec<AddictionSummary>, ApiError> {
    use crate::web_app::service::validate_query;

    let query = validate_query(&query)?;
    tracing::info!("Search request: query='{}'", query);

    let client = client().await?;
    let result = client.search(query).await;

    match &result {
        Ok(found) => tracing::info!("Search successful: found {} results", found.len()),
        Err(e) => tracing::error!("Error searching for \"{}\": {}", query, e),
    }

    result
}
