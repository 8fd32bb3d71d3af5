use axum::{
    Form, Router,
    extract::{Path as AxumPath, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;

use crate::errors::WikiError;
use crate::services::PageStore;
use crate::types::{AppState, Page};
use crate::utils::valid_title;

/// Form payload submitted by the edit page
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub body: String,
}

/// Build the application router
///
/// Anything outside `/`, `/view/:title`, `/edit/:title` and `/save/:title`
/// falls through to axum's 404 fallback.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/view/:title", get(handle_view))
        .route("/edit/:title", get(handle_edit))
        .route("/save/:title", post(handle_save))
        .with_state(state)
}

/// Handle root path requests
pub async fn handle_root() -> impl IntoResponse {
    "Hello World!"
}

/// Handle view requests
pub async fn handle_view(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Response, WikiError> {
    let title = page_title(&title)?;
    log::info!("View request for page '{}'", title);

    let store = PageStore::new(state.data_dir.as_ref().clone());
    match store.load(title) {
        Ok(page) => Ok(Html(state.templates.render_view(&page)).into_response()),
        Err(_) => {
            log::info!("Page '{}' not found, redirecting to edit", title);
            Ok(redirect_found(&format!("/edit/{}", title)))
        }
    }
}

/// Handle edit requests
pub async fn handle_edit(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Response, WikiError> {
    let title = page_title(&title)?;
    log::info!("Edit request for page '{}'", title);

    let store = PageStore::new(state.data_dir.as_ref().clone());
    // A page that does not exist yet is edited as an empty one
    let page = store.load(title).unwrap_or_else(|_| Page::empty(title));
    Ok(Html(state.templates.render_edit(&page)).into_response())
}

/// Handle save requests
pub async fn handle_save(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
    Form(form): Form<SaveForm>,
) -> Result<Response, WikiError> {
    let title = page_title(&title)?;
    log::info!("Save request for page '{}'", title);

    let page = Page::new(title, form.body.into_bytes());
    let store = PageStore::new(state.data_dir.as_ref().clone());
    if let Err(e) = store.save(&page) {
        log::error!("Error saving page '{}': {:?}", title, e);
        return Err(e);
    }
    Ok(redirect_found(&format!("/view/{}", title)))
}

/// Validate the page title extracted from the request path
///
/// Anything but a purely alphanumeric token is answered with a 404, the
/// same as a path that never matched a route.
fn page_title(raw: &str) -> Result<&str, WikiError> {
    if valid_title(raw) {
        Ok(raw)
    } else {
        log::warn!("Rejected request with invalid title: '{}'", raw);
        Err(WikiError::NotFound)
    }
}

/// 302 Found redirect to `location`
fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
