//! Export coordinator: renders the current document through the selected
//! template and hands it to the external rasterizer.
//!
//! Overlapping exports for one session are rejected rather than queued: the
//! guard is `try_lock`ed, and a second export while one is in flight returns
//! an in-progress error. A failed rasterization surfaces to the caller; the
//! in-memory document is never touched by export.

use bytes::Bytes;

use crate::errors::AppError;
use crate::form::session::Session;
use crate::rasterizer::{RasterClient, RasterOptions};
use crate::render::{render_resume, TemplateKind};

/// Derives the download filename from the full name: lowercased, whitespace
/// runs collapsed to single hyphens, `.pdf` suffix. An unset name falls back
/// to `resume.pdf`.
pub fn export_filename(full_name: &str) -> String {
    let slug = full_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "resume.pdf".to_string()
    } else {
        format!("{slug}.pdf")
    }
}

/// Renders and rasterizes the session's document. Returns the filename and
/// the PDF bytes.
pub async fn export_pdf(
    session: &Session,
    rasterizer: &RasterClient,
    template: TemplateKind,
) -> Result<(String, Bytes), AppError> {
    let _guard = session
        .export_guard
        .try_lock()
        .map_err(|_| AppError::ExportInProgress)?;

    // Lock order: form state, then section order.
    let (html, filename) = {
        let state = session.form.lock().await;
        let order = session.order.lock().await;
        (
            render_resume(template, &state.document, &order),
            export_filename(&state.document.personal_info.full_name),
        )
    };

    let options = RasterOptions {
        filename: filename.clone(),
        ..RasterOptions::default()
    };
    let pdf = rasterizer
        .render(&html, &options)
        .await
        .map_err(|e| AppError::Raster(e.to_string()))?;

    Ok((filename, pdf))
}
