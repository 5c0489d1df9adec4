//! HTTP facade over the form state store.
//!
//! Handlers resolve collection entries by their stable id, look up the
//! current position, and dispatch to the positional store operation. An
//! update or removal aimed at an entry that no longer exists is a debug-
//! logged no-op, not an error: the UI may race a removal against an
//! in-flight edit and the editing session must survive it.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::autosave::AutosavePhase;
use crate::errors::AppError;
use crate::export::export_pdf;
use crate::form::patch::{
    CertificationPatch, EducationPatch, ExperiencePatch, PersonalInfoPatch, ProjectPatch,
    SkillPatch,
};
use crate::form::session::Session;
use crate::models::resume::{CollectionKind, ResumeDocument, SectionKind};
use crate::render::{render_resume, TemplateKind};
use crate::state::AppState;
use crate::validation::{validate_document, ValidationReport};

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct TemplateQuery {
    pub user_id: Uuid,
    pub template: Option<String>,
}

#[derive(Serialize)]
pub struct ResumeResponse {
    pub document: ResumeDocument,
    pub is_dirty: bool,
    pub autosave: AutosavePhase,
}

#[derive(Serialize)]
pub struct EntryCreatedResponse {
    pub id: Uuid,
}

#[derive(Deserialize)]
pub struct EntryReorderRequest {
    pub from: usize,
    pub to: usize,
}

/// Section identifiers arrive as plain strings: an unknown identifier must
/// be a no-op, not a deserialization failure.
#[derive(Deserialize)]
pub struct SectionReorderRequest {
    pub from: String,
    pub to: String,
}

async fn session_for(state: &AppState, user_id: Uuid) -> Result<Arc<Session>, AppError> {
    Ok(state.sessions.get_or_create(user_id).await?)
}

fn collection(segment: &str) -> Result<CollectionKind, AppError> {
    CollectionKind::from_path(segment)
        .ok_or_else(|| AppError::NotFound(format!("Unknown section '{segment}'")))
}

fn template_from(query: &TemplateQuery) -> TemplateKind {
    TemplateKind::from_param(query.template.as_deref().unwrap_or(""))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeResponse>, AppError> {
    let session = session_for(&state, params.user_id).await?;
    let (document, is_dirty) = session.snapshot().await;
    Ok(Json(ResumeResponse {
        document,
        is_dirty,
        autosave: session.autosave_phase(),
    }))
}

/// PATCH /api/v1/resume/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(patch): Json<PersonalInfoPatch>,
) -> Result<StatusCode, AppError> {
    let session = session_for(&state, params.user_id).await?;
    session
        .mutate(|form| form.update_personal_info(patch))
        .await;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resume/:section/entries
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<(StatusCode, Json<EntryCreatedResponse>), AppError> {
    let kind = collection(&section)?;
    let session = session_for(&state, params.user_id).await?;
    let id = session.mutate(|form| form.add_entry(kind)).await;
    Ok((StatusCode::CREATED, Json(EntryCreatedResponse { id })))
}

/// One deserialized patch, matching the collection it targets.
enum EntryPatch {
    Education(EducationPatch),
    Experience(ExperiencePatch),
    Skill(SkillPatch),
    Project(ProjectPatch),
    Certification(CertificationPatch),
}

fn parse_patch(kind: CollectionKind, body: Value) -> Result<EntryPatch, AppError> {
    let malformed = |e: serde_json::Error| AppError::Validation(format!("Malformed patch: {e}"));
    Ok(match kind {
        CollectionKind::Education => {
            EntryPatch::Education(serde_json::from_value(body).map_err(malformed)?)
        }
        CollectionKind::Experience => {
            EntryPatch::Experience(serde_json::from_value(body).map_err(malformed)?)
        }
        CollectionKind::Skills => {
            EntryPatch::Skill(serde_json::from_value(body).map_err(malformed)?)
        }
        CollectionKind::Projects => {
            EntryPatch::Project(serde_json::from_value(body).map_err(malformed)?)
        }
        CollectionKind::Certifications => {
            EntryPatch::Certification(serde_json::from_value(body).map_err(malformed)?)
        }
    })
}

/// PATCH /api/v1/resume/:section/entries/:id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, Uuid)>,
    Query(params): Query<UserIdQuery>,
    Json(body): Json<Value>,
) -> Result<StatusCode, AppError> {
    let kind = collection(&section)?;
    let patch = parse_patch(kind, body)?;
    let session = session_for(&state, params.user_id).await?;

    session
        .mutate(|form| match form.document.position_of(kind, id) {
            Some(index) => match patch {
                EntryPatch::Education(p) => form.update_education(index, p),
                EntryPatch::Experience(p) => form.update_experience(index, p),
                EntryPatch::Skill(p) => form.update_skill(index, p),
                EntryPatch::Project(p) => form.update_project(index, p),
                EntryPatch::Certification(p) => form.update_certification(index, p),
            },
            None => debug!(
                section = kind.as_str(),
                entry = %id,
                "update aimed at a removed entry; ignoring"
            ),
        })
        .await;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/resume/:section/entries/:id
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, Uuid)>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let kind = collection(&section)?;
    let session = session_for(&state, params.user_id).await?;

    session
        .mutate(|form| match form.document.position_of(kind, id) {
            Some(index) => form.remove_entry(kind, index),
            None => debug!(
                section = kind.as_str(),
                entry = %id,
                "remove aimed at a missing entry; ignoring"
            ),
        })
        .await;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resume/:section/entries/reorder
pub async fn handle_reorder_entries(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Query(params): Query<UserIdQuery>,
    Json(gesture): Json<EntryReorderRequest>,
) -> Result<StatusCode, AppError> {
    let kind = collection(&section)?;
    let session = session_for(&state, params.user_id).await?;
    session
        .mutate(|form| form.reorder_entries(kind, gesture.from, gesture.to))
        .await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/resume/sections
pub async fn handle_get_section_order(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<SectionKind>>, AppError> {
    let session = session_for(&state, params.user_id).await?;
    Ok(Json(session.section_order().await.as_slice().to_vec()))
}

/// POST /api/v1/resume/sections/reorder
/// Returns the resulting order so the client can resync after a no-op.
pub async fn handle_reorder_sections(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(gesture): Json<SectionReorderRequest>,
) -> Result<Json<Vec<SectionKind>>, AppError> {
    let session = session_for(&state, params.user_id).await?;
    let order = session
        .with_order_mut(|order| {
            match (
                SectionKind::from_param(&gesture.from),
                SectionKind::from_param(&gesture.to),
            ) {
                (Some(from), Some(to)) => {
                    order.move_section(from, to);
                }
                _ => debug!(
                    from = %gesture.from,
                    to = %gesture.to,
                    "section reorder with unknown identifier; ignoring"
                ),
            }
            order.as_slice().to_vec()
        })
        .await;
    Ok(Json(order))
}

/// POST /api/v1/resume/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let session = session_for(&state, params.user_id).await?;
    session.mutate(|form| form.reset()).await;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resume/save
pub async fn handle_save(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let session = session_for(&state, params.user_id).await?;
    session.save_now(state.store.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/resume
/// Drops the live session and deletes the persisted document; the next
/// request starts from a fresh empty resume.
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(params.user_id).await;
    state.store.delete(params.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/resume/validate
pub async fn handle_validate(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ValidationReport>, AppError> {
    let session = session_for(&state, params.user_id).await?;
    let report = session
        .with_state(|form| validate_document(&form.document))
        .await;
    Ok(Json(report))
}

/// GET /api/v1/resume/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<TemplateQuery>,
) -> Result<Html<String>, AppError> {
    let template = template_from(&params);
    let session = session_for(&state, params.user_id).await?;
    let (document, _) = session.snapshot().await;
    let order = session.section_order().await;
    Ok(Html(render_resume(template, &document, &order)))
}

/// POST /api/v1/resume/export
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<TemplateQuery>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let template = template_from(&params);
    debug!(user_id = %params.user_id, template = template.as_str(), "export requested");
    let session = session_for(&state, params.user_id).await?;
    let (filename, pdf) = export_pdf(&session, &state.rasterizer, template).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, pdf))
}
