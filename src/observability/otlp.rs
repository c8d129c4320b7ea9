//! OTLP JSON span serialization.
//!
//! Converts OpenTelemetry span data into OTLP (OpenTelemetry Protocol) JSON
//! documents for file export. The output is compatible with OTLP trace
//! collectors and analysis tools.

use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::Value as JsonValue;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Instrumentation scope name stamped on every exported batch.
const SCOPE_NAME: &str = "travelink";

/// Formats a batch of spans as a complete OTLP JSON document.
///
/// The document carries the resource attributes (service name and friends),
/// a single instrumentation scope, and one entry per span.
///
/// # OTLP Shape
///
/// ```json
/// {
///   "resourceSpans": [{
///     "resource": { "attributes": [...] },
///     "scopeSpans": [{ "scope": {"name": "travelink"}, "spans": [...] }]
///   }]
/// }
/// ```
pub fn format_batch(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attrs: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| {
            serde_json::json!({
                "key": key.to_string(),
                "value": format_value(value)
            })
        })
        .collect();

    let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

    serde_json::json!({
        "resourceSpans": [{
            "resource": {
                "attributes": resource_attrs
            },
            "scopeSpans": [{
                "scope": {
                    "name": SCOPE_NAME,
                },
                "spans": spans
            }]
        }]
    })
}

/// Formats a single span: IDs as hex strings, timestamps as nanoseconds
/// since the Unix epoch, status as OTLP integer codes.
fn format_span(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = format_status(&span.status);

    serde_json::json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        },
        "name": span.name,
        "kind": span_kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": format_attributes(&span.attributes),
        "events": format_events(&span.events),
        "links": format_links(&span.links),
        "status": {
            "code": status_code,
            "message": status_message,
        },
    })
}

/// Nanoseconds since the Unix epoch, as the decimal string OTLP expects.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

/// OTLP integer code for a span kind.
const fn span_kind_code(kind: &opentelemetry::trace::SpanKind) -> u8 {
    match kind {
        opentelemetry::trace::SpanKind::Internal => 1,
        opentelemetry::trace::SpanKind::Server => 2,
        opentelemetry::trace::SpanKind::Client => 3,
        opentelemetry::trace::SpanKind::Producer => 4,
        opentelemetry::trace::SpanKind::Consumer => 5,
    }
}

/// Formats span attributes as an OTLP JSON array.
fn format_attributes(attributes: &[opentelemetry::KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| {
            serde_json::json!({
                "key": kv.key.to_string(),
                "value": format_value(&kv.value)
            })
        })
        .collect()
}

/// Maps OpenTelemetry value types to OTLP value objects.
///
/// Integers are serialized as strings per the OTLP JSON mapping; arrays fall
/// back to their debug representation.
fn format_value(value: &opentelemetry::Value) -> JsonValue {
    use opentelemetry::Value;

    match value {
        Value::Bool(b) => serde_json::json!({ "boolValue": b }),
        Value::I64(i) => serde_json::json!({ "intValue": i.to_string() }),
        Value::F64(f) => serde_json::json!({ "doubleValue": f }),
        Value::String(s) => serde_json::json!({ "stringValue": s.to_string() }),
        Value::Array(_) => serde_json::json!({ "stringValue": format!("{value:?}") }),
    }
}

/// Formats span events (timestamp, name, attributes) as an OTLP JSON array.
fn format_events(events: &[opentelemetry::trace::Event]) -> Vec<JsonValue> {
    events
        .iter()
        .map(|event| {
            serde_json::json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": format_attributes(&event.attributes),
            })
        })
        .collect()
}

/// Formats span links (trace id, span id, attributes) as an OTLP JSON array.
fn format_links(links: &[opentelemetry::trace::Link]) -> Vec<JsonValue> {
    links
        .iter()
        .map(|link| {
            serde_json::json!({
                "traceId": format!("{:032x}", link.span_context.trace_id()),
                "spanId": format!("{:016x}", link.span_context.span_id()),
                "attributes": format_attributes(&link.attributes),
            })
        })
        .collect()
}

/// OTLP status code and message: 0 unset, 1 ok, 2 error.
fn format_status(status: &opentelemetry::trace::Status) -> (u8, String) {
    match status {
        opentelemetry::trace::Status::Unset => (0, String::new()),
        opentelemetry::trace::Status::Ok => (1, String::new()),
        opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
    }
}
