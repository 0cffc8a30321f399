use actix_web::{web, HttpResponse};
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use tera::Context;

use crate::db;
use crate::error::AppError;
use crate::render::PlantView;
use crate::state::AppState;

/// Actix web handler for `GET /`: the plant list page.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let plants = fetch_all_plants(&state).await?;

    let mut context = Context::new();
    context.insert("plants", &plants);
    let body = state.templates.render("plants_list.html", &context)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Drains the unfiltered plants cursor. An empty collection is an empty
/// page, not an error.
async fn fetch_all_plants(state: &AppState) -> Result<Vec<PlantView>, AppError> {
    let mut cursor = db::plants(&state.db).find(doc! {}).await?;

    let mut plants = Vec::new();
    while let Some(plant) = cursor.try_next().await? {
        plants.push(PlantView::from(plant));
    }

    Ok(plants)
}
