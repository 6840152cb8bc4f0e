use crate::catalog::Catalog;
use crate::schema_cache::SchemaCache;
use crate::services::events::error::EventError;
use crate::services::events::timing::StageTimings;
use crate::services::events::{assemble, auth, dataset, headers, sink::EventSink};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::event::InboundEvent;
use log::{debug, error, info};
use serde_json::Value;
use std::time::Instant;

pub async fn process(
    req: HttpRequest,
    dataset_name: web::Path<String>,
    body: web::Bytes,
    catalog: web::Data<Catalog>,
    schema_cache: web::Data<SchemaCache>,
    sink: web::Data<EventSink>,
) -> impl Responder {
    let mut timings = StageTimings::new();
    let result = handle_event(
        &req,
        &dataset_name,
        &body,
        &catalog,
        &schema_cache,
        &sink,
        &mut timings,
    )
    .await;
    if !timings.is_empty() {
        debug!("{}", timings);
    }

    match result {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => {
            debug!("event for dataset {:?} rejected: {}", dataset_name.as_str(), err);
            err.response()
        }
    }
}

/// Runs one event through the ingestion pipeline in strict order. The first
/// failing stage aborts the request; successful stages leave their duration
/// in `timings`.
async fn handle_event(
    req: &HttpRequest,
    dataset_name: &str,
    body: &[u8],
    catalog: &Catalog,
    schema_cache: &SchemaCache,
    sink: &EventSink,
    timings: &mut StageTimings,
) -> Result<(), EventError> {
    // parse JSON body; the payload itself stays opaque
    let started = Instant::now();
    let data: Value = serde_json::from_slice(body).map_err(|_| EventError::JsonFailure)?;
    timings.record("parse_body", started);
    if let Some(columns) = data.as_object().map(|fields| fields.len()) {
        debug!("event_columns={}", columns);
    }
    let mut event = InboundEvent::new(data);

    // get writekey, timestamp, and sample rate out of the headers
    let started = Instant::now();
    headers::extract(req, &mut event)?;
    timings.record("get_headers", started);

    // authenticate the writekey
    let started = Instant::now();
    let team = auth::validate_write_key(catalog, &event.write_key)?;
    timings.record("validate_write_key", started);

    // map the dataset name from the path to a dataset object
    let started = Instant::now();
    let dataset = dataset::resolve_dataset(catalog, dataset_name)?;
    timings.record("resolve_dataset", started);

    let started = Instant::now();
    let partition = dataset::choose_partition(dataset)?;
    event.chosen_partition = Some(partition);
    timings.record("get_partition", started);

    // stamp missing timestamps with now; measure skew for supplied ones
    let skew = assemble::finalize_timestamp(&mut event);

    // verify the schema (simulated, with injected latency and faults)
    let started = Instant::now();
    let hit_cache = schema_cache.check_schema(dataset.id).await?;
    timings.record("get_schema", started);

    // hand off to the partition store; a write failure is logged but does not
    // fail the request
    if let Err(err) = sink.persist(&event) {
        error!("failed to persist event for partition {}: {}", partition, err);
    }

    let skew_field = skew
        .map(|seconds| format!(" skew_sec={:.3}", seconds))
        .unwrap_or_default();
    info!(
        "accepted event: team={} dataset={} partition={} sample_rate={} cache_hit={}{}",
        team.name, dataset.name, partition, event.sample_rate, hit_cache, skew_field
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use std::time::Duration;

    fn quiet_cache() -> SchemaCache {
        SchemaCache::with_settings(Duration::from_secs(10), 0)
    }

    #[actix_web::test]
    async fn bad_json_fails_before_headers_are_looked_at() {
        // the body is checked first, so even a malformed writekey does not
        // change the outcome
        let req = TestRequest::default()
            .insert_header((headers::HEADER_WRITE_KEY, "not a valid key!"))
            .to_http_request();
        let dir = tempfile::tempdir().unwrap();
        let mut timings = StageTimings::new();

        let result = handle_event(
            &req,
            "wade",
            br#"{"x":"#,
            &Catalog::builtin(),
            &quiet_cache(),
            &EventSink::new(dir.path()),
            &mut timings,
        )
        .await;
        assert_eq!(result, Err(EventError::JsonFailure));
    }

    #[actix_web::test]
    async fn pipeline_short_circuits_on_auth_before_dataset_lookup() {
        // unknown dataset AND bad writekey: auth runs first, so auth wins
        let req = TestRequest::default()
            .insert_header((headers::HEADER_WRITE_KEY, "zzzz999ZZZZ"))
            .to_http_request();
        let dir = tempfile::tempdir().unwrap();
        let mut timings = StageTimings::new();

        let result = handle_event(
            &req,
            "nonesuch",
            br#"{"x":1}"#,
            &Catalog::builtin(),
            &quiet_cache(),
            &EventSink::new(dir.path()),
            &mut timings,
        )
        .await;
        assert_eq!(result, Err(EventError::UnknownWriteKey));
    }

    #[actix_web::test]
    async fn accepted_event_lands_in_a_partition_file() {
        let req = TestRequest::default()
            .insert_header((headers::HEADER_WRITE_KEY, "abcd123EFGH"))
            .to_http_request();
        let dir = tempfile::tempdir().unwrap();
        let mut timings = StageTimings::new();

        let result = handle_event(
            &req,
            "wade",
            br#"{"x":1}"#,
            &Catalog::builtin(),
            &quiet_cache(),
            &EventSink::new(dir.path()),
            &mut timings,
        )
        .await;
        assert_eq!(result, Ok(()));
        assert!(!timings.is_empty());

        let written: Vec<_> = [1, 2, 3]
            .iter()
            .filter(|p| dir.path().join(format!("api{}.log", p)).exists())
            .collect();
        assert_eq!(written.len(), 1, "exactly one partition file expected");
    }
}
