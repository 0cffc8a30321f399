use actix_web::{web, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

/// Actix web handler for `GET /static/{path}`: serves assets embedded
/// into the binary, with the content type guessed from the file name.
pub async fn process(path: web::Path<String>) -> HttpResponse {
    let rel_path = path.into_inner();

    match STATIC_DIR.get_file(rel_path.as_str()) {
        Some(file) => {
            let mime = from_path(rel_path.as_str()).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}
