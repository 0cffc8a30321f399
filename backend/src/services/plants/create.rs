//! # Plant Creation Service
//!
//! Provides both halves of the `/create` endpoint.
//!
//! ## Workflow
//!
//! 1.  **GET**: `page` renders the empty creation form.
//!
//! 2.  **POST**: `process` receives the form payload as a typed
//!     `PlantForm`. A request missing any of the four fields is rejected
//!     by the form extractor before the handler runs; a blank plant name
//!     is rejected by `validate`.
//!
//! 3.  **Insert**: `insert_plant` maps the form fields onto a `Plant`
//!     document (`plant_name` becomes `name`, `photo` becomes
//!     `photo_url`) and inserts it. The store generates the id, which is
//!     read back from the insert result.
//!
//! 4.  **Redirect**: the client is sent to `/plant/<new_id>`, so exactly
//!     one document exists per successful submission and the browser
//!     lands on the page for it.

use actix_web::{web, HttpResponse};
use common::model::plant::Plant;
use common::requests::PlantForm;
use mongodb::bson::oid::ObjectId;
use tera::Context;

use crate::db;
use crate::error::AppError;
use crate::services::redirect;
use crate::state::AppState;

/// Actix web handler for `GET /create`: the empty creation form.
pub async fn page(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let body = state.templates.render("create.html", &Context::new())?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Actix web handler for `POST /create`.
pub async fn process(
    state: web::Data<AppState>,
    form: web::Form<PlantForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    form.validate().map_err(AppError::Validation)?;

    let new_id = insert_plant(&state, form).await?;
    Ok(redirect(&format!("/plant/{}", new_id.to_hex())))
}

/// Inserts one plant document and returns the id the store generated.
async fn insert_plant(state: &AppState, form: PlantForm) -> Result<ObjectId, AppError> {
    let plant = Plant {
        id: None,
        name: form.plant_name,
        variety: form.variety,
        photo_url: form.photo,
        date_planted: form.date_planted,
    };

    let result = db::plants(&state.db).insert_one(plant).await?;
    result
        .inserted_id
        .as_object_id()
        .ok_or(AppError::MissingInsertId)
}
