//! Agent motion
//!
//! Frame-stepped path following with corner blending, collision-aware
//! step rejection, and 8-way facing.

mod facing;
mod motion;

pub use facing::Facing;
pub use motion::{Agent, AgentState};
