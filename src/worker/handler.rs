//! Background refresh task implementation.
//!
//! Every filter change in the UI schedules a refresh instead of recomputing
//! results inline: the task waits out the configured artificial latency, runs
//! the filter pipeline, and sends the result back to the event loop. The
//! event loop aborts the previous task whenever it schedules a new one, and
//! the generation number in each response guards against any abort/landing
//! race, so superseded requests are always discarded.

use crate::catalog::filter_and_sort;
use crate::worker::{RefreshRequest, RefreshResponse};
use std::sync::mpsc::Sender;

/// Runs a refresh request to completion and delivers the response.
///
/// Sleeps for the request's artificial delay, computes the filtered set, and
/// sends the result over `responder`. Dropping the receiving end (shutdown)
/// or aborting the task (supersession) are both normal outcomes and are not
/// reported as errors.
pub async fn run(request: RefreshRequest, responder: Sender<RefreshResponse>) {
    tokio::time::sleep(request.delay).await;

    let response = process(&request);

    if responder.send(response).is_err() {
        tracing::debug!(
            generation = request.generation,
            "refresh response dropped, event loop has shut down"
        );
    }
}

/// Computes the filtered listing set for a request.
///
/// This is the synchronous part of a refresh: pure, total, and instrumented
/// with the trace context carried by the request.
#[must_use]
pub fn process(request: &RefreshRequest) -> RefreshResponse {
    let _context_guard = attach_parent_trace_context(request);

    let span = tracing::debug_span!("refresh_process",
        generation = request.generation,
        base_count = request.base.len()
    );
    let _guard = span.entered();

    let listings = filter_and_sort(&request.base, &request.query);

    tracing::debug!(result_count = listings.len(), "refresh computed");

    RefreshResponse {
        generation: request.generation,
        listings,
    }
}

/// Attaches the parent trace context from a request to the current task.
///
/// Reconstructs the OpenTelemetry context from the trace information captured
/// when the request was created, allowing spans inside the refresh task to be
/// linked to their parents in the event loop.
///
/// Returns a context guard that must be held for the duration of the work.
fn attach_parent_trace_context(request: &RefreshRequest) -> Option<opentelemetry::ContextGuard> {
    use opentelemetry::trace::{
        SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
    };

    let trace_context = request.trace_context.as_ref()?;

    let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
    let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

    let span_context = SpanContext::new(
        trace_id,
        span_id,
        TraceFlags::SAMPLED,
        true,
        TraceState::default(),
    );

    let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

    Some(otel_context.attach())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EmbeddedCatalog, SortOrder, TourQuery};
    use std::sync::mpsc;
    use std::time::Duration;

    fn request(generation: u64, text: &str) -> RefreshRequest {
        RefreshRequest::new(
            generation,
            EmbeddedCatalog::listings().unwrap(),
            TourQuery {
                text: text.to_string(),
                category: None,
                sort: SortOrder::Rating,
            },
            Duration::ZERO,
        )
    }

    #[test]
    fn process_tags_response_with_request_generation() {
        let response = process(&request(7, "bali"));
        assert_eq!(response.generation, 7);
        assert_eq!(response.listings.len(), 1);
        assert_eq!(response.listings[0].name, "Bali Beach Hopping Adventure");
    }

    #[tokio::test]
    async fn run_delivers_the_response() {
        let (tx, rx) = mpsc::channel();

        run(request(3, ""), tx).await;

        let response = rx.try_recv().unwrap();
        assert_eq!(response.generation, 3);
        assert_eq!(response.listings.len(), 9);
    }

    #[tokio::test]
    async fn aborted_refresh_never_responds() {
        let (tx, rx) = mpsc::channel();

        let handle = tokio::spawn(run(
            RefreshRequest::new(
                1,
                EmbeddedCatalog::listings().unwrap(),
                TourQuery::default(),
                Duration::from_millis(200),
            ),
            tx,
        ));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn dropped_receiver_is_tolerated() {
        let (tx, rx) = mpsc::channel();
        drop(rx);

        // Must not panic.
        run(request(1, ""), tx).await;
    }
}
