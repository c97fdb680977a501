//! Core processing building blocks: resize, cover/crop, blur composite, and
//! the normalization pipeline. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
