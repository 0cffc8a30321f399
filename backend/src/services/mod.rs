//! HTTP service modules, one per resource area.
//!
//! Each area registers its routes through `configure_routes` and keeps
//! one handler file per operation. The areas are:
//! - `plants`: the list page plus create, detail, edit and delete.
//! - `harvests`: recording a harvest against a plant.
//! - `pages`: the about page and embedded static assets.

use actix_web::http::header;
use actix_web::{web, HttpResponse};

pub mod harvests;
pub mod pages;
pub mod plants;

/// Registers every service area on the application.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    plants::configure_routes(cfg);
    harvests::configure_routes(cfg);
    pages::configure_routes(cfg);
}

/// Builds the 303 redirect every successful form submission ends with,
/// so the browser re-requests the target as a GET.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn redirect_is_see_other_with_location() {
        let resp = redirect("/plant/64b0c5f2a1d2e3f4a5b6c7d8");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/plant/64b0c5f2a1d2e3f4a5b6c7d8"
        );
    }
}
