//! Lodestone Core
//!
//! Shared types for the Lodestone workshop helpers.
//!
//! This crate contains:
//! - Domain types: records, jobs, and poll outcomes
//! - DTOs: wire shapes for requests to and responses from the hosted service
//! - Timestamp handling for the service's naive-UTC wire format

pub mod domain;
pub mod dto;
pub mod timestamp;
