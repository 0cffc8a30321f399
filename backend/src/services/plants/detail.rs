//! # Plant Detail Service
//!
//! Renders the page for one plant: its display fields, every harvest
//! recorded against it, the harvest form, and the edit and delete
//! controls.
//!
//! ## Workflow
//!
//! 1.  **Identifier**: the `plant_id` path segment is parsed into an
//!     `ObjectId`. Malformed input is a 400 before anything touches the
//!     store.
//!
//! 2.  **Plant lookup**: the plant is fetched by `_id`; an unknown id is
//!     a 404, not a half-rendered page.
//!
//! 3.  **Harvest lookup**: the `harvests` collection is queried with the
//!     parsed id as the `plant_id` filter, so only this plant's harvests
//!     come back.
//!
//! 4.  **Render**: both results go into the `detail.html` context under
//!     `plant` and `harvests`.

use actix_web::{web, HttpResponse};
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use tera::Context;

use crate::db;
use crate::error::AppError;
use crate::render::{HarvestView, PlantView};
use crate::state::AppState;

/// Actix web handler for `GET /plant/{plant_id}`.
pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let plant_id = db::parse_plant_id(&raw_id)?;

    let plant = db::find_plant(&state.db, plant_id)
        .await?
        .map(PlantView::from)
        .ok_or(AppError::NotFound(raw_id))?;
    let harvests = fetch_harvests(&state, plant_id).await?;

    let mut context = Context::new();
    context.insert("plant", &plant);
    context.insert("harvests", &harvests);
    let body = state.templates.render("detail.html", &context)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Fetches the harvests recorded against one plant.
async fn fetch_harvests(state: &AppState, plant_id: ObjectId) -> Result<Vec<HarvestView>, AppError> {
    let mut cursor = db::harvests(&state.db)
        .find(doc! { "plant_id": plant_id })
        .await?;

    let mut harvests = Vec::new();
    while let Some(harvest) = cursor.try_next().await? {
        harvests.push(HarvestView::from(harvest));
    }

    Ok(harvests)
}
