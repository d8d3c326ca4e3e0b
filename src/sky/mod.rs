//! Sky backgrounds.

/// Vertical color gradients.
pub mod gradient;
