//! HTTP surface tests that run without a MongoDB server.
//!
//! The driver only connects when a query is issued, and every route
//! exercised here either never touches the store or fails before
//! reaching it, so these tests pass with no `mongod` running.

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use backend::render;
use backend::services;
use backend::state::AppState;
use mongodb::bson::oid::ObjectId;
use mongodb::Client;

async fn test_state() -> web::Data<AppState> {
    let client = Client::with_uri_str("mongodb://localhost:27017")
        .await
        .expect("client options should parse");
    web::Data::new(AppState {
        db: client.database("gardenlog_test"),
        templates: render::build_templates().expect("embedded templates should compile"),
    })
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(test_state().await)
                .configure(services::configure_app),
        )
        .await
    };
}

#[actix_web::test]
async fn about_page_renders() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/about").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("About Gardenlog"));
}

#[actix_web::test]
async fn create_form_renders_all_fields() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/create").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    for field in ["plant_name", "variety", "photo", "date_planted"] {
        assert!(
            html.contains(&format!(r#"name="{}""#, field)),
            "create form is missing input {}",
            field
        );
    }
}

#[actix_web::test]
async fn stylesheet_is_served_with_css_content_type() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/static/style.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/css"), "{}", content_type);
}

#[actix_web::test]
async fn unknown_asset_is_not_found() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/static/missing.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unmatched_route_is_not_found() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/greenhouse").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_plant_ids_are_rejected() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/plant/not-an-id").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get().uri("/edit/not-an-id").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::post()
        .uri("/delete/not-an-id")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::post()
        .uri("/harvest/not-an-id")
        .set_form([("harvested_amount", "2 lbs"), ("date_planted", "2024-06-12")])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn create_with_missing_field_is_rejected() {
    let app = test_app!();

    // No variety, photo or date_planted keys at all.
    let req = test::TestRequest::post()
        .uri("/create")
        .set_form([("plant_name", "Basil")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_with_blank_name_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/create")
        .set_form([
            ("plant_name", "   "),
            ("variety", "Genovese"),
            ("photo", "http://x/y.jpg"),
            ("date_planted", "2024-05-01"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("plant name cannot be empty"));
}

#[actix_web::test]
async fn harvest_with_blank_amount_is_rejected() {
    let app = test_app!();

    // Validation runs before the plant lookup, so no store is needed.
    let req = test::TestRequest::post()
        .uri(&format!("/harvest/{}", ObjectId::new().to_hex()))
        .set_form([("harvested_amount", ""), ("date_planted", "2024-06-12")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_requires_post() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri(&format!("/delete/{}", ObjectId::new().to_hex()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
