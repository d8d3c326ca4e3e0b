//! Output sinks.
//!
//! Sinks receive the finished raster; the core never decides where or how it is stored.

/// Sink trait, PNG writer and in-memory sink.
pub mod sink;
