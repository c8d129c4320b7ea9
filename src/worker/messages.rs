//! Refresh task message types.
//!
//! This module defines the request and response protocol between the event
//! loop and the background refresh task that recomputes filtered results. It
//! also implements tracing context propagation across the task boundary, so
//! spans created inside a refresh link back to the event that scheduled it.

use crate::catalog::TourQuery;
use crate::domain::TourListing;
use std::time::Duration;

/// Tracing context for cross-task span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry so the refresh
/// task can continue the trace that the scheduling event started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// A request to recompute the filtered listing set.
///
/// Each request carries a generation number issued by the event handler.
/// Generations are strictly increasing; the handler discards any response
/// whose generation no longer matches the latest request, so a slow refresh
/// can never overwrite the results of a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshRequest {
    /// Generation number tying the response back to the scheduling state.
    pub generation: u64,

    /// Snapshot of the listings to filter, already narrowed to the active
    /// view mode.
    pub base: Vec<TourListing>,

    /// Search criteria to apply.
    pub query: TourQuery,

    /// Artificial latency before the results are produced. Exists only to
    /// drive the loading state; has no effect on the result.
    pub delay: Duration,

    /// Trace context for linking spans across the task boundary.
    pub trace_context: Option<TraceContext>,
}

impl RefreshRequest {
    /// Creates a request with the current trace context attached.
    #[must_use]
    pub fn new(generation: u64, base: Vec<TourListing>, query: TourQuery, delay: Duration) -> Self {
        Self {
            generation,
            base,
            query,
            delay,
            trace_context: TraceContext::from_current(),
        }
    }
}

/// The outcome of a refresh request.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshResponse {
    /// Generation copied from the request.
    pub generation: u64,

    /// The filtered, ordered listing set.
    pub listings: Vec<TourListing>,
}
