//! Read-only JSON mirror of the seed catalog.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use client::catalog::{self, Project, Template};

pub async fn list_projects() -> Json<&'static [Project]> {
    Json(catalog::projects())
}

pub async fn get_project(Path(id): Path<String>) -> Result<Json<&'static Project>, StatusCode> {
    match catalog::find_project(&id) {
        Some(project) => Ok(Json(project)),
        None => {
            tracing::debug!(%id, "project not found");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

pub async fn list_templates() -> Json<&'static [Template]> {
    Json(catalog::templates())
}
