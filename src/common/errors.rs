use thiserror::Error;

/// Failures surfaced while decoding management API payloads.
///
/// Malformed individual fields never show up here: a field of the wrong
/// JSON type is absorbed as absent so one bad field cannot take down the
/// rest of a diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteStatusError {
    /// The top level of the payload was not a JSON object.
    #[error("route planner status payload must be a JSON object, got {found}")]
    MalformedPayload { found: &'static str },
}
