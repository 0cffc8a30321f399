use actix_web::{web, HttpResponse};
use mongodb::bson::doc;

use crate::db;
use crate::error::AppError;
use crate::services::redirect;
use crate::state::AppState;

/// Actix web handler for `POST /delete/{plant_id}`.
///
/// Removes the one plant addressed by the URL. A miss still redirects to
/// the list page: the state the client asked for already holds. Harvest
/// documents are never removed.
pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let plant_id = db::parse_plant_id(&path.into_inner())?;

    db::plants(&state.db)
        .delete_one(doc! { "_id": plant_id })
        .await?;

    Ok(redirect("/"))
}
