//! Event ingestion endpoint.
//!
//! `POST /1/events/{dataset_name}` runs the full gatekeeper pipeline: parse
//! the JSON body, pull the write key / timestamp / sample rate out of the
//! headers, authenticate the write key, resolve the dataset and pick one of
//! its partitions, finalize the event timestamp, consult the schema cache,
//! and write the event to the partition's log file. The first stage to fail
//! decides the error response; nothing is retried.

pub mod assemble;
pub mod auth;
pub mod dataset;
pub mod error;
pub mod headers;
pub mod sink;
pub mod submit;
pub mod timing;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/1/events";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{dataset_name}", post().to(submit::process))
}
