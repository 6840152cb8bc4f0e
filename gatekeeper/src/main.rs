use actix_web::{web, HttpServer};
use env_logger::Env;
use gatekeeper::app::build_app;
use gatekeeper::catalog::Catalog;
use gatekeeper::config::Config;
use gatekeeper::schema_cache::SchemaCache;
use gatekeeper::services::events::sink::EventSink;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    // registries are read-only after this point; the schema cache guards its
    // own interior state
    let catalog = web::Data::new(Catalog::builtin());
    let schema_cache = web::Data::new(SchemaCache::new());
    let sink = web::Data::new(EventSink::new(config.event_dir.clone()));

    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || build_app(catalog.clone(), schema_cache.clone(), sink.clone()))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
