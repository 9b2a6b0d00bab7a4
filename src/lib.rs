//! Renewable Energy Monitor
//!
//! Synthetic production generators for a multi-source renewable plant and a
//! solar plant, the analytics the monitoring dashboards compute on top of
//! them, and an HTTP service exposing both as JSON.

pub mod analytics;
pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod simulation;
pub mod telemetry;
