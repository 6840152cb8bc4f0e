//! Liveness probe endpoint.

pub mod alive;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/x";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/alive", get().to(alive::process))
}
