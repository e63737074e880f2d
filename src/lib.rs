//! Loadbank API - telemetry ingestion and settings for a load-bank test device
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod entity;
pub mod error;
pub mod repository;
pub mod routes;
