//! Middleware transport boundary
//!
//! The sampling loops publish fixed-shape records onto named topics and
//! the actuator loops receive angle commands from named topics. The
//! transport itself (session, serialization, delivery) lives outside this
//! crate; here it is only a trait plus the topic names both sides agree on.

mod publisher;

#[cfg(any(test, feature = "mock"))]
mod mock;

pub use publisher::Publisher;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockPublisher, PublishEvent};

/// Wind sampler output topic.
pub const WIND_TOPIC: &str = "direction/wind";

/// GNSS sampler output topic.
pub const GNSS_TOPIC: &str = "position/gnss";

/// Sail servo command topic (signed degrees).
pub const SAIL_ANGLE_TOPIC: &str = "/position/SAIL_ANGLE";

/// Rudder servo command topic (signed degrees).
pub const RUDDER_ANGLE_TOPIC: &str = "/rudder/ANGLE";
