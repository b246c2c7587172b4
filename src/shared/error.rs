/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use super::structs::ElevatorId;

/// Errors returned by fleet operations. None of them are fatal: the request is
/// rejected before any state is touched and the caller may correct and retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControlError {
    #[error("elevator {0} is not registered")]
    UnknownElevator(ElevatorId),

    #[error("there are no elevators operating")]
    EmptyFleet,

    #[error("elevator {0} is already registered")]
    DuplicateElevator(ElevatorId),

    #[error("the coordinator is no longer running")]
    Disconnected,
}
