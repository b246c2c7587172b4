/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::collections::BTreeMap;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorState;
use crate::shared::{ControlError, ElevatorId, Floor};

/**
 * Controls a fleet of elevators and decides their movements so that the total
 * number of floors travelled by the fleet stays low.
 *
 * The fleet is keyed by elevator id in a `BTreeMap`, so every scan over it runs in
 * ascending id order. Pickup dispatch lives in `dispatcher.rs` and stepping in
 * `simulator.rs`.
 *
 * # Fields
 * - `step`:    Number of the next step to run, starting at 1.
 * - `fleet`:   State of every registered elevator.
 */
#[derive(Debug, Clone)]
pub struct Control {
    pub(super) step: u64,
    pub(super) fleet: BTreeMap<ElevatorId, ElevatorState>,
}

impl Default for Control {
    fn default() -> Self {
        Control::new()
    }
}

impl Control {
    pub fn new() -> Control {
        Control {
            step: 1,
            fleet: BTreeMap::new(),
        }
    }

    /// Registers an elevator at `floor` with an empty queue. Elevators cannot be
    /// removed again and an id can only be registered once.
    pub fn add_elevator(&mut self, id: ElevatorId, floor: Floor) -> Result<(), ControlError> {
        if self.fleet.contains_key(&id) {
            return Err(ControlError::DuplicateElevator(id));
        }
        self.fleet.insert(id, ElevatorState::new(floor));
        debug!("elevator {} added on floor {}", id, floor);
        Ok(())
    }

    /// Directs elevator `id` to visit `floor`, as if the button was pressed in its cab.
    pub fn request_floor(&mut self, id: ElevatorId, floor: Floor) -> Result<(), ControlError> {
        let state = self
            .fleet
            .get_mut(&id)
            .ok_or(ControlError::UnknownElevator(id))?;
        state.enqueue(floor);
        state.sort();
        Ok(())
    }

    pub fn state(&self, id: ElevatorId) -> Result<&ElevatorState, ControlError> {
        self.fleet.get(&id).ok_or(ControlError::UnknownElevator(id))
    }

    /// Snapshot of every elevator's position and queue.
    pub fn status(&self) -> BTreeMap<ElevatorId, ElevatorState> {
        self.fleet.clone()
    }

    pub fn len(&self) -> usize {
        self.fleet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fleet.is_empty()
    }

    /// True when no elevator has anything left to visit.
    pub fn is_idle(&self) -> bool {
        self.fleet.values().all(ElevatorState::is_idle)
    }

    /// Number of the next step to run.
    pub fn current_step(&self) -> u64 {
        self.step
    }
}
