/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use super::control::Control;
use crate::shared::{ControlError, ElevatorId, Floor};

/// The cheapest elevator for a pickup and what it would cost the fleet.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub elevator: ElevatorId,
    pub floor: Floor,
    pub cost: u64,
}

impl Control {
    /**
     * Finds the elevator that should serve a pickup at `floor`, without assigning it.
     *
     * Each candidate's cost is the total distance of its queue after `floor` has been
     * added to a copy of it and the copy re-sorted. The lowest cost wins, and on
     * equal cost the lowest elevator id.
     */
    pub fn evaluate_pickup(&self, floor: Floor) -> Result<Assignment, ControlError> {
        let mut best: Option<Assignment> = None;

        // Ascending id order, so a strict comparison keeps the lowest id on ties
        for (&id, state) in self.fleet.iter() {
            let cost = state.with_stop(floor).total_distance();
            debug!("elevator {} would travel {} floors with pickup on floor {}", id, cost, floor);

            match best {
                Some(ref pick) if pick.cost <= cost => {}
                _ => {
                    best = Some(Assignment {
                        elevator: id,
                        floor,
                        cost,
                    })
                }
            }
        }

        best.ok_or(ControlError::EmptyFleet)
    }

    /// Someone needs to be picked up at `floor`. Assigns the pickup to the cheapest
    /// elevator and returns its id.
    pub fn pickup(&mut self, floor: Floor) -> Result<ElevatorId, ControlError> {
        let assignment = self.evaluate_pickup(floor)?;

        info!("elevator {} to pickup on floor {}", assignment.elevator, floor);
        // The id was just taken from the fleet and elevators are never removed
        if let Some(state) = self.fleet.get_mut(&assignment.elevator) {
            state.enqueue(floor);
            state.sort();
        }
        Ok(assignment.elevator)
    }
}
