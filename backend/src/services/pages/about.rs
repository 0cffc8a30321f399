use actix_web::{web, HttpResponse};
use tera::Context;

use crate::error::AppError;
use crate::state::AppState;

/// Actix web handler for `GET /about`: a static page, no data.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let body = state.templates.render("about.html", &Context::new())?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
