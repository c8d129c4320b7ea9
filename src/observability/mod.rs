//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides tracing infrastructure for the browser, using
//! OpenTelemetry OTLP format with file-based exporting. Traces are written to
//! JSON files for offline analysis and debugging; nothing leaves the machine.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Files
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `travelink-otlp.json` in the
//!   platform data directory
//! - **Automatic Rotation**: Files rotate at 5MB with 2-backup retention
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//!
//! # Configuration
//!
//! Trace level is controlled via the `--trace-level` flag or the config file;
//! default is `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`export`]: File-based span exporter with size-based rotation
//! - [`otlp`]: OTLP JSON span serialization

mod export;
mod init;
mod otlp;

pub use init::init_tracing;
