use mongodb::Database;
use tera::Tera;

/// Shared application state, constructed once in `main` and injected into
/// every handler as `web::Data`.
///
/// Both fields are cheap to clone: the database handle is a reference to
/// the driver's pooled client, and the template registry is only cloned
/// per worker at server start.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the database holding the `plants` and `harvests` collections.
    pub db: Database,
    /// Compiled template registry used to render every HTML page.
    pub templates: Tera,
}
