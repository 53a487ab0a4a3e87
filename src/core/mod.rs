//! Request-side building blocks: typed options, presets, and the validated
//! `TransformRequest` consumed by the high-level `api` module.
pub mod params;
pub mod request;
