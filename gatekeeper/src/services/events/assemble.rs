use chrono::{DateTime, Utc};
use common::model::event::InboundEvent;
use log::debug;

/// Finalizes the event timestamp, returning the skew (seconds between now and
/// the claimed event time) when one can be computed.
///
/// An event that arrived without a timestamp is stamped with the current UTC
/// time. A supplied timestamp is persisted exactly as the client sent it; it
/// is parsed only to measure skew, and a value that does not parse as RFC3339
/// just skips the skew measurement rather than failing the event.
pub fn finalize_timestamp(event: &mut InboundEvent) -> Option<f64> {
    let raw = match event.timestamp.as_deref() {
        Some(raw) => raw,
        None => {
            event.timestamp = Some(Utc::now().to_rfc3339());
            return None;
        }
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => {
            let skew = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));
            Some(skew.num_milliseconds() as f64 / 1000.0)
        }
        Err(err) => {
            debug!("cannot measure skew for timestamp {:?}: {}", raw, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_timestamp_is_stamped_with_now() {
        let mut event = InboundEvent::new(json!({}));
        let skew = finalize_timestamp(&mut event);
        assert_eq!(skew, None);

        let stamped = event.timestamp.expect("timestamp was defaulted");
        let parsed = DateTime::parse_from_rfc3339(&stamped).unwrap();
        let age = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));
        assert!(age.num_seconds().abs() < 5, "stamp {} is not recent", stamped);
    }

    #[test]
    fn supplied_timestamp_is_kept_verbatim_and_skew_measured() {
        let mut event = InboundEvent::new(json!({}));
        event.timestamp = Some("2021-01-01T12:00:00+00:00".to_string());
        let skew = finalize_timestamp(&mut event).expect("skew for a parseable timestamp");

        assert_eq!(
            event.timestamp.as_deref(),
            Some("2021-01-01T12:00:00+00:00")
        );
        // the claimed time is years in the past, so the skew is large and
        // positive
        assert!(skew > 0.0);
    }

    #[test]
    fn unparseable_timestamp_keeps_its_raw_value_without_skew() {
        let mut event = InboundEvent::new(json!({}));
        event.timestamp = Some("2021-13-45T99:99:99".to_string());
        let skew = finalize_timestamp(&mut event);

        assert_eq!(skew, None);
        assert_eq!(event.timestamp.as_deref(), Some("2021-13-45T99:99:99"));
    }
}
