//! # tf-core
//!
//! Core types and pure task logic for TaskFlow.
//!
//! This crate provides the foundational types shared across all TaskFlow crates:
//! - Entity structs for tasks, profiles, roles, attachments, and comments
//! - Stored/effective status enums, roles, and their display mappings
//! - The clock utility and the task classifier (single source of truth for
//!   "what state is this task really in")
//! - The statistics aggregator behind the dashboard
//! - The client-side access policy mirror
//! - ID prefix constants and CLI response types
//!
//! Nothing in here performs I/O.

pub mod classify;
pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod policy;
pub mod responses;
pub mod stats;
