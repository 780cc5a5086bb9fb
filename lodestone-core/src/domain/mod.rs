//! Core domain types
//!
//! This module contains the domain structures shared by the workshop helpers:
//! record-store hits and resolution outcomes, plus the job lifecycle types
//! consumed by the status poller.

pub mod job;
pub mod record;
