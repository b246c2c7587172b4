pub mod ordering;
pub mod state;

pub use ordering::distance;
pub use ordering::order;
pub use state::ElevatorState;
