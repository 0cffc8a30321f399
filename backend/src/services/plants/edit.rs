use actix_web::{web, HttpResponse};
use common::requests::PlantForm;
use mongodb::bson::doc;
use tera::Context;

use crate::db;
use crate::error::AppError;
use crate::render::PlantView;
use crate::services::redirect;
use crate::state::AppState;

/// Actix web handler for `GET /edit/{plant_id}`: the edit form,
/// pre-filled with the plant's current values.
pub async fn page(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let plant_id = db::parse_plant_id(&raw_id)?;

    let plant = db::find_plant(&state.db, plant_id)
        .await?
        .map(PlantView::from)
        .ok_or(AppError::NotFound(raw_id))?;

    let mut context = Context::new();
    context.insert("plant", &plant);
    let body = state.templates.render("edit.html", &context)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Actix web handler for `POST /edit/{plant_id}`.
///
/// Overwrites all four display fields with a single `$set`, whether or
/// not they changed. Repeating the same submission leaves the document
/// in the same state.
pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<PlantForm>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let plant_id = db::parse_plant_id(&raw_id)?;

    let form = form.into_inner();
    form.validate().map_err(AppError::Validation)?;

    let result = db::plants(&state.db)
        .update_one(
            doc! { "_id": plant_id },
            doc! {
                "$set": {
                    "name": form.plant_name,
                    "variety": form.variety,
                    "photo_url": form.photo,
                    "date_planted": form.date_planted,
                }
            },
        )
        .await?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound(raw_id));
    }

    Ok(redirect(&format!("/plant/{}", raw_id)))
}
