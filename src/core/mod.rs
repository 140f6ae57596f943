//! Shared configuration and data models.

pub mod config;
pub mod models;
