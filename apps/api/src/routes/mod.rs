pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::form::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document
        .route(
            "/api/v1/resume",
            get(handlers::handle_get_resume).delete(handlers::handle_delete_resume),
        )
        .route(
            "/api/v1/resume/personal-info",
            patch(handlers::handle_update_personal_info),
        )
        .route("/api/v1/resume/reset", post(handlers::handle_reset))
        .route("/api/v1/resume/save", post(handlers::handle_save))
        // Collections
        .route(
            "/api/v1/resume/:section/entries",
            post(handlers::handle_add_entry),
        )
        .route(
            "/api/v1/resume/:section/entries/reorder",
            post(handlers::handle_reorder_entries),
        )
        .route(
            "/api/v1/resume/:section/entries/:id",
            patch(handlers::handle_update_entry).delete(handlers::handle_remove_entry),
        )
        // Section display order
        .route(
            "/api/v1/resume/sections",
            get(handlers::handle_get_section_order),
        )
        .route(
            "/api/v1/resume/sections/reorder",
            post(handlers::handle_reorder_sections),
        )
        // Rendering
        .route("/api/v1/resume/validate", get(handlers::handle_validate))
        .route("/api/v1/resume/preview", get(handlers::handle_preview))
        .route("/api/v1/resume/export", post(handlers::handle_export))
        .with_state(state)
}
