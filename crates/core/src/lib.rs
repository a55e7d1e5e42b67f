//! # SlotPlanner Core
//!
//! Domain values and the slot planning algorithm for clinic appointment
//! scheduling. Everything in this crate is pure: no I/O, no shared state.

pub mod errors;
pub mod models;
pub mod planner;
