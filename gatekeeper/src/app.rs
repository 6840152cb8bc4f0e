//! Application wiring: builds the actix `App` from the shared state so the
//! binary and the integration tests assemble the exact same service tree.

use crate::catalog::Catalog;
use crate::schema_cache::SchemaCache;
use crate::services;
use crate::services::events::sink::EventSink;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

/// Serves the embedded landing page and any other bundled static file.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

pub fn build_app(
    catalog: web::Data<Catalog>,
    schema_cache: web::Data<SchemaCache>,
    sink: web::Data<EventSink>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::PayloadConfig::default().limit(10 * 1024 * 1024)) // 10 MB
        .app_data(catalog)
        .app_data(schema_cache)
        .app_data(sink)
        .service(services::events::configure_routes())
        .service(services::system::configure_routes())
        .default_service(web::route().to(serve_embedded))
}
