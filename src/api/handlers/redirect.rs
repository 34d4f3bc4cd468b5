//! Handler for the short-link resolve path.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::error::AppError;
use crate::state::AppState;

/// Confirmation page shown before the browser follows the destination.
///
/// Renders `templates/redirect.html`: the destination as a visible link plus
/// a meta refresh. Askama escapes the interpolated URL.
#[derive(Template, WebTemplate)]
#[template(path = "redirect.html")]
pub struct RedirectPage {
    destination: String,
}

/// Resolves a short key to its confirmation page.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// A pure read: no rate limiting, no side effects. An unknown key yields a
/// generic 404 that reveals nothing about whether the key was ever valid.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<RedirectPage, AppError> {
    let link = state.redirects.resolve(&key).await?;

    Ok(RedirectPage {
        destination: link.destination,
    })
}
