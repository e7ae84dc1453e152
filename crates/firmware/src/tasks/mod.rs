//! Application loops
//!
//! One struct per firmware application, owning its record and counters
//! (no process-wide state). The host executor drives them: the samplers
//! through periodic `on_tick` calls, the servo channels through
//! `on_command` calls on message arrival.

pub mod gnss;
pub mod servo;
pub mod wind;

pub use gnss::GnssSampler;
pub use servo::{ActuatorChannel, ServoChannel};
pub use wind::WindSampler;
