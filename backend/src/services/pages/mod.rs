//! Static pages and embedded assets.

use actix_web::web;

mod about;
mod assets;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/about").route(web::get().to(about::process)))
        .service(web::resource("/static/{path:.*}").route(web::get().to(assets::process)));
}
