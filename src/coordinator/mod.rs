pub mod control;
pub mod coordinator;
pub mod coordinator_tests;
pub mod dispatcher;
pub mod simulator;

pub use control::Control;
pub use coordinator::{Coordinator, FleetHandle, Request};
pub use dispatcher::Assignment;
