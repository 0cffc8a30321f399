use actix_web::{web, HttpResponse};
use common::model::harvest::Harvest;
use common::requests::HarvestForm;

use crate::db;
use crate::error::AppError;
use crate::services::redirect;
use crate::state::AppState;

/// Actix web handler for `POST /harvest/{plant_id}`.
///
/// The detail page posts here. The referenced plant must exist before
/// anything is written, so a harvest can never point at an id with no
/// plant behind it.
pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<HarvestForm>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let plant_id = db::parse_plant_id(&raw_id)?;

    let form = form.into_inner();
    form.validate().map_err(AppError::Validation)?;

    db::find_plant(&state.db, plant_id)
        .await?
        .ok_or_else(|| AppError::NotFound(raw_id.clone()))?;

    let harvest = Harvest {
        id: None,
        quantity: form.harvested_amount,
        date: form.date_planted,
        plant_id,
    };
    db::harvests(&state.db).insert_one(harvest).await?;

    Ok(redirect(&format!("/plant/{}", raw_id)))
}
