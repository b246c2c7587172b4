//! Dispatch and ordering engine for a fleet of elevators.
//!
//! Each elevator keeps a duplicate free queue of floors, ordered greedily by
//! nearest next stop. Pickups go to the elevator whose queue grows the least,
//! and `Control::step` moves every elevator one queued stop forward.

pub mod config;
pub mod coordinator;
pub mod elevator;
pub mod shared;

pub use coordinator::{Assignment, Control, Coordinator, FleetHandle};
pub use elevator::ElevatorState;
pub use shared::{ControlError, Direction, ElevatorId, Floor, Motion, StepReport};
