pub mod error;
pub mod macros;
pub mod structs;

pub use error::ControlError;
pub use structs::Direction;
pub use structs::ElevatorId;
pub use structs::Floor;
pub use structs::Motion;
pub use structs::StepReport;
