//! Plant record endpoints.
//!
//! This module groups every route that reads or writes the `plants`
//! collection, one handler file per operation.
//!
//! ## Registered routes:
//!
//! *   **`GET /`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Renders the plant list page with every stored
//!       plant, in the store's natural iteration order.
//!
//! *   **`GET /create`** and **`POST /create`**:
//!     - **Handlers**: `create::page` and `create::process`
//!     - **Description**: The empty creation form, and the submission
//!       path that inserts one plant and redirects to its detail page.
//!
//! *   **`GET /plant/{plant_id}`**:
//!     - **Handler**: `detail::process`
//!     - **Description**: Renders one plant together with its recorded
//!       harvests, the harvest form and the edit and delete controls.
//!
//! *   **`GET /edit/{plant_id}`** and **`POST /edit/{plant_id}`**:
//!     - **Handlers**: `edit::page` and `edit::process`
//!     - **Description**: The pre-filled edit form, and the submission
//!       path that overwrites all four display fields.
//!
//! *   **`POST /delete/{plant_id}`**:
//!     - **Handler**: `delete::process`
//!     - **Description**: Removes the addressed plant and redirects to
//!       the list page. Only the addressed document is touched.

use actix_web::web;

mod create;
mod delete;
mod detail;
mod edit;
mod list;

/// Registers the plant routes. The paths share no common prefix, so they
/// are registered as top-level resources rather than under a scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(list::process)))
        .service(
            web::resource("/create")
                .route(web::get().to(create::page))
                .route(web::post().to(create::process)),
        )
        .service(web::resource("/plant/{plant_id}").route(web::get().to(detail::process)))
        .service(
            web::resource("/edit/{plant_id}")
                .route(web::get().to(edit::page))
                .route(web::post().to(edit::process)),
        )
        .service(web::resource("/delete/{plant_id}").route(web::post().to(delete::process)));
}
