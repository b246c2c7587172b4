/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A physical level. Distances between levels are measured unsigned, see
/// `elevator::distance`.
pub type Floor = i32;

/// Identifier of an elevator, unique within a fleet. Lower ids win ties.
pub type ElevatorId = u32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    /// Direction of travel needed to get from `from` to `to`.
    pub fn between(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            Ordering::Greater => Direction::Up,
            Ordering::Less => Direction::Down,
            Ordering::Equal => Direction::Stop,
        }
    }
}

/// What a single elevator does during one step.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase", tag = "motion")]
pub enum Motion {
    Up { target: Floor },
    Down { target: Floor },
    Stopped { floor: Floor },
}

impl Motion {
    pub fn is_moving(&self) -> bool {
        !matches!(self, Motion::Stopped { .. })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: u64,
    pub moved: bool,
    pub motions: Vec<(ElevatorId, Motion)>,
}
