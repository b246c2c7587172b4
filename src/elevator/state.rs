/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use super::ordering::{distance, order};
use crate::shared::{Direction, Floor, Motion};

/**
 * State of a single elevator in the fleet.
 *
 * # Fields
 * - `current`:     The floor the elevator is at. Only changed by `advance`.
 * - `queue`:       Floors still to visit, duplicate free. The head is the very next stop.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    pub current: Floor,
    pub queue: Vec<Floor>,
}

impl ElevatorState {
    pub fn new(floor: Floor) -> ElevatorState {
        ElevatorState {
            current: floor,
            queue: Vec::new(),
        }
    }

    /// The next floor the elevator will visit, or where it is if nothing is queued.
    pub fn next(&self) -> Floor {
        self.queue.first().copied().unwrap_or(self.current)
    }

    pub fn direction(&self) -> Direction {
        Direction::between(self.current, self.next())
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Appends `floor` unless it is already queued. Returns true if it was added.
    /// Does not reorder, call `sort` afterwards.
    pub fn enqueue(&mut self, floor: Floor) -> bool {
        if self.queue.contains(&floor) {
            return false;
        }
        self.queue.push(floor);
        true
    }

    /// Reorders the queue from the current floor.
    pub fn sort(&mut self) {
        let pending = std::mem::take(&mut self.queue);
        self.queue = order(self.current, pending);
        debug!("queue from floor {} sorted to {:?}", self.current, self.queue);
    }

    /// Floors to travel to satisfy the queue in its current order.
    pub fn total_distance(&self) -> u64 {
        let mut total: u64 = 0;
        let mut last = self.current;
        for &floor in self.queue.iter() {
            total = total.saturating_add(u64::from(distance(last, floor)));
            last = floor;
        }
        total
    }

    /// A copy of this state with `floor` enqueued and the queue re-sorted.
    pub fn with_stop(&self, floor: Floor) -> ElevatorState {
        let mut candidate = self.clone();
        candidate.enqueue(floor);
        candidate.sort();
        candidate
    }

    /// The motion this elevator makes in the coming step.
    pub fn motion(&self) -> Motion {
        match self.direction() {
            Direction::Up => Motion::Up { target: self.next() },
            Direction::Down => Motion::Down { target: self.next() },
            Direction::Stop => Motion::Stopped { floor: self.current },
        }
    }

    /// Moves to the head of the queue and drops it. Returns the motion made and
    /// whether there was anything queued at all.
    pub fn advance(&mut self) -> (Motion, bool) {
        let motion = self.motion();
        if self.queue.is_empty() {
            return (motion, false);
        }
        self.current = self.queue.remove(0);
        (motion, true)
    }
}
