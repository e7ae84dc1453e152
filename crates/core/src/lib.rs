//! skiff_core - Pure no_std sensing and actuation logic for the skiff sailing platform
//!
//! This crate contains the platform-agnostic algorithms shared by the
//! skiff firmware applications: the sampling-and-publish cycle logic for
//! the wind vane and the GNSS receiver, and the servo command mapping.
//! Everything here can be tested on host without hardware.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Platform services injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)
//! - [`record`]: Published sample record with sentinel encoding
//! - [`fault`]: Consecutive-invalid and streak fault counters
//! - [`wind`]: Wind vane averaging and direction transform
//! - [`gnss`]: Sentence framing, staleness policy, cycle output
//! - [`nmea`]: GGA position sentence parsing
//! - [`servo`]: Angle to pulse-width mapping for sail and rudder servos

#![no_std]

pub mod fault;
pub mod gnss;
pub mod nmea;
pub mod record;
pub mod servo;
pub mod traits;
pub mod wind;
