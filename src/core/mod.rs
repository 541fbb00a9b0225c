//! Core processing building blocks: channel split/merge, grayscale and
//! linear contrast/brightness filters, Lanczos downsampling, and the
//! parameter types. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
