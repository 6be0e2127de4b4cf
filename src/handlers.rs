use std::fs;

use axum::{
    Form, Router,
    extract::{Path as AxumPath, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;

use crate::errors::WikiError;
use crate::types::{AppState, Page};
use crate::utils::validate_title;

/// Build the application router. Shared by `main` and the tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_home).post(handle_home))
        .route("/home", get(handle_home).post(handle_home))
        .route("/home/", get(handle_home).post(handle_home))
        .route("/view/:title", get(handle_view))
        .route("/edit/:title", get(handle_edit))
        .route("/save/:title", post(handle_save))
        .fallback(handle_fallback)
        .with_state(state)
}

/// Urlencoded save form. A missing `body` field saves an empty page, the
/// same as a browser submitting an empty textarea.
#[derive(Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    body: String,
}

/// Show a page, or send the browser to the edit form when it does not
/// exist yet.
pub async fn handle_view(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Response, WikiError> {
    let title = validate_title(&title)?;
    log::info!("View request for '{}'", title);

    match state.store.load(&title) {
        Ok(page) => Ok(Html(state.templates.render_view(&page)).into_response()),
        Err(_) => {
            log::info!("Page '{}' not found, redirecting to edit form", title);
            Ok(Redirect::to(&format!("/edit/{}", title)).into_response())
        }
    }
}

/// Show the edit form, pre-filled when the page already exists. A failed
/// load is the normal path for a page being created.
pub async fn handle_edit(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Response, WikiError> {
    let title = validate_title(&title)?;
    log::info!("Edit request for '{}'", title);

    let page = state
        .store
        .load(&title)
        .unwrap_or_else(|_| Page::empty(&title));
    Ok(Html(state.templates.render_edit(&page)).into_response())
}

/// Persist the submitted body, then send the browser to the view.
pub async fn handle_save(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
    Form(form): Form<SaveForm>,
) -> Result<Response, WikiError> {
    let title = validate_title(&title)?;
    log::info!("Save request for '{}' ({} bytes)", title, form.body.len());

    let page = Page {
        title: title.clone(),
        body: form.body.into_bytes(),
        list: Vec::new(),
    };
    state.store.save(&page)?;

    Ok(Redirect::to(&format!("/view/{}", title)).into_response())
}

/// Home screen: every known page title, linked. The home page source is
/// read straight from the template directory rather than through the
/// store's per-title load; a read failure leaves the body empty and is
/// only logged.
pub async fn handle_home(State(state): State<AppState>) -> Result<Response, WikiError> {
    log::info!("Home request");

    let home_path = state.config.template_dir.join("home.html");
    let body = match fs::read(&home_path) {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Unable to read home page source {:?}: {}", home_path, e);
            Vec::new()
        }
    };

    let page = Page {
        title: "Home".to_string(),
        body,
        list: state.store.list_titles(),
    };
    Ok(Html(state.templates.render_home(&page)).into_response())
}

/// Single 404 for anything outside the route table.
async fn handle_fallback(uri: Uri) -> Response {
    log::warn!("No route for '{}'", uri.path());
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
