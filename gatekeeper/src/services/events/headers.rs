use crate::services::events::error::EventError;
use actix_web::HttpRequest;
use common::model::event::InboundEvent;
use log::debug;
use regex::Regex;

pub const HEADER_WRITE_KEY: &str = "X-Honeycomb-Team";
pub const HEADER_TIMESTAMP: &str = "X-Honeycomb-Event-Time";
pub const HEADER_SAMPLE_RATE: &str = "X-Honeycomb-Samplerate";

// Loose RFC3339 shape: date-ish, 'T', time-ish. Only used for diagnostics.
const TIMESTAMP_PATTERN: &str = r"^[0-9-]+T[0-9:]+";

/// Pulls the write key, event timestamp and sample rate out of the request
/// headers into the event. Values are carried mostly verbatim; real
/// validation happens in later stages.
pub fn extract(req: &HttpRequest, event: &mut InboundEvent) -> Result<(), EventError> {
    // writekeys are opaque strings here; authentication validates them later
    event.write_key = header_value(req, HEADER_WRITE_KEY).unwrap_or_default();

    // a timestamp that does not look like RFC3339 is noted but still carried
    // forward; finalization decides what to do with it
    match header_value(req, HEADER_TIMESTAMP) {
        Some(timestamp) => {
            let shape = Regex::new(TIMESTAMP_PATTERN).map_err(|_| EventError::ParseFailure)?;
            if !shape.is_match(&timestamp) {
                debug!("timestamp {:?} is not RFC3339-shaped", timestamp);
            }
            event.timestamp = Some(timestamp);
        }
        None => debug!("no timestamp for event"),
    }

    // sample rate defaults to 1, but a present non-integer value is a hard
    // failure
    let sample_rate = match header_value(req, HEADER_SAMPLE_RATE) {
        Some(raw) if !raw.is_empty() => raw,
        _ => "1".to_string(),
    };
    event.sample_rate = sample_rate
        .parse()
        .map_err(|_| EventError::ParseFailure)?;

    Ok(())
}

fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).to_string())
}
