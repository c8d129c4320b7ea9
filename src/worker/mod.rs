//! Background refresh task for asynchronous result recomputation.
//!
//! This module implements the simulated-latency refresh pipeline that stands
//! between filter changes and the rendered result set. It keeps the event
//! loop responsive, drives the loading state, and carries tracing context
//! across the task boundary for observability.
//!
//! # Architecture
//!
//! - `messages`: request/response types with trace context propagation
//! - `handler`: the async task body and the pure result computation

pub mod handler;
pub mod messages;

pub use handler::{process, run};
pub use messages::{RefreshRequest, RefreshResponse, TraceContext};
