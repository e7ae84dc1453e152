#![cfg_attr(not(test), no_std)]

//! skiff_firmware - Sensing and actuation firmware for the skiff sailing platform
//!
//! This crate wraps the pure logic in [`skiff_core`] with everything the
//! applications need at the platform boundary: peripheral traits and
//! their mock implementations, the publish sink, device drivers, and the
//! three application loops (wind sampler, GNSS sampler, servo channels).
//!
//! # Design Principles
//!
//! - **Trait boundaries**: Peripherals and the middleware transport are
//!   consumed through traits; real implementations live with the board
//!   support, mocks live here for host testing
//! - **Per-loop state**: Each loop owns its record and counters; no
//!   process-wide singletons
//! - **Two error tiers**: Initialization and wind-path publish failures
//!   propagate as typed errors (the harness owns restart policy);
//!   GNSS-path publish failures are logged and the loop continues

// Platform abstraction layer (peripheral traits, errors, mocks)
pub mod platform;

// Publish sink boundary and topic names
pub mod communication;

// Device drivers using platform abstraction
pub mod devices;

// Application loops (wind, GNSS, servo)
pub mod tasks;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!)
// are exported at crate root via #[macro_export] in logging
pub mod logging;
