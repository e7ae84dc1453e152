//! Device drivers using platform abstraction
//!
//! Drivers are generic over the platform traits, so the same code runs
//! against real peripherals on the boat and against mocks on the host.

pub mod gnss;
pub mod wind_vane;

pub use gnss::GnssReceiver;
pub use wind_vane::WindVaneDriver;
