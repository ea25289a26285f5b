use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use chrono::Datelike;

use crate::content::SiteContent;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    content: SiteContent,
    year: i32,
}

pub async fn index(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let template = HomeTemplate {
        content: state.content.clone(),
        year: chrono::Utc::now().year(),
    };
    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("Template render failed: {e}")))?;
    Ok(Html(html))
}
