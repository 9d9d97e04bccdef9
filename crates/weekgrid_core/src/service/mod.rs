//! Core use-case services.
//!
//! # Responsibility
//! - Hold the single current schedule snapshot for a process.
//! - Apply store transitions and persist every accepted change.
//! - Keep CLI layers decoupled from storage and snapshot details.

pub mod schedule_service;
