use crate::catalog::Catalog;
use crate::services::events::error::EventError;
use common::model::team::Team;

/// Authenticates a write key against the team registry.
///
/// A key containing anything outside `[A-Za-z0-9]` is rejected as malformed
/// before the registry is consulted. A well-formed key that matches no team
/// (the empty key included) is an authentication failure.
pub fn validate_write_key<'a>(
    catalog: &'a Catalog,
    write_key: &str,
) -> Result<&'a Team, EventError> {
    if write_key.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(EventError::MalformedWriteKey);
    }

    catalog
        .teams
        .iter()
        .find(|team| team.write_key == write_key)
        .ok_or(EventError::UnknownWriteKey)
}
