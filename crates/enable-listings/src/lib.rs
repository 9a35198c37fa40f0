//! Core library for the EnAble accessible-housing catalog: listing records,
//! the per-screen snapshot store, the filter evaluation engine, and the HTTP
//! surface the mobile clients consume.

pub mod config;
pub mod error;
pub mod listings;
pub mod telemetry;
