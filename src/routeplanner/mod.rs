use serde_json::{Map, Value};

use crate::api::routeplanner::{
    FailedAddress, IpBlock, RoutePlannerKind, RouteStatus, RouteStatusDetails,
};
use crate::common::RouteStatusError;

/// Decodes a parsed route planner status payload into a [`RouteStatus`].
///
/// The backend is trusted but loose: every key is optional, and a key
/// carrying an unexpected JSON type is treated as absent rather than
/// failing the whole decode. The only hard failure is a payload whose top
/// level is not an object at all.
pub fn decode_route_status(root: &Value) -> Result<RouteStatus, RouteStatusError> {
    let Some(obj) = root.as_object() else {
        return Err(RouteStatusError::MalformedPayload {
            found: json_kind(root),
        });
    };

    let class = string_field(obj, "class");
    if let Some(class) = class.as_deref() {
        if RoutePlannerKind::from_class(class).is_none() {
            tracing::debug!("Unrecognized route planner class '{}'", class);
        }
    }

    let details = obj
        .get("details")
        .and_then(Value::as_object)
        .map(decode_details);

    Ok(RouteStatus { class, details })
}

fn decode_details(obj: &Map<String, Value>) -> RouteStatusDetails {
    RouteStatusDetails {
        ip_block: obj
            .get("ipBlock")
            .and_then(Value::as_object)
            .map(decode_ip_block),
        failing_addresses: decode_failing_addresses(obj.get("failingAddresses")),
        rotate_index: string_field(obj, "rotateIndex"),
        ip_index: string_field(obj, "ipIndex"),
        current_address: string_field(obj, "currentAddress"),
        current_address_index: i64_field(obj, "currentAddressIndex"),
        block_index: string_field(obj, "blockIndex"),
    }
}

fn decode_failing_addresses(value: Option<&Value>) -> Vec<FailedAddress> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry.as_object() {
            Some(obj) => Some(decode_failed_address(obj)),
            None => {
                tracing::debug!("Skipping non-object failingAddresses entry: {}", entry);
                None
            }
        })
        .collect()
}

fn decode_failed_address(obj: &Map<String, Value>) -> FailedAddress {
    FailedAddress {
        address: string_field(obj, "address"),
        failing_timestamp: u64_field(obj, "failingTimestamp"),
        failing_time: string_field(obj, "failingTime"),
    }
}

fn decode_ip_block(obj: &Map<String, Value>) -> IpBlock {
    IpBlock {
        block_type: string_field(obj, "type"),
        size: string_field(obj, "size"),
    }
}

// Typed reads over a loose payload. A missing key and a key of the wrong
// type both come back as `None`.

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn u64_field(obj: &Map<String, Value>, key: &str) -> Option<u64> {
    obj.get(key).and_then(Value::as_u64)
}

fn i64_field(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    obj.get(key).and_then(Value::as_i64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
