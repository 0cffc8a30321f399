//! Harvest record endpoints.
//!
//! ## Registered routes:
//!
//! *   **`POST /harvest/{plant_id}`**:
//!     - **Handler**: `add::process`
//!     - **Description**: Records one harvest against an existing plant
//!       and redirects back to that plant's detail page. Harvests are
//!       append-only; there is no edit or delete route for them.

use actix_web::web;

mod add;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/harvest/{plant_id}").route(web::post().to(add::process)));
}
