//! Admission aggregate scoring core and its supporting catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
