/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;

/***************************************/
/*           Local modules             */
/***************************************/
use super::control::Control;
use crate::shared::{Motion, StepReport};

impl Control {
    /**
     * Runs one step of the simulation.
     *
     * Every elevator reports the motion it makes and, if it has anything queued,
     * moves to the head of its queue. Queues are never re-sorted here, the order was
     * fixed when the last request touched them.
     *
     * # Returns
     * The report of the step. `moved` is true if any elevator had a queued stop
     * at the start of the step.
     */
    pub fn advance(&mut self) -> StepReport {
        let step = self.step;
        info!("step #{}", step);

        let mut moved = false;
        let mut motions = Vec::with_capacity(self.fleet.len());
        for (&id, state) in self.fleet.iter_mut() {
            let (motion, had_stop) = state.advance();
            match motion {
                Motion::Up { target } => info!("\televator {} goes up to floor {}", id, target),
                Motion::Down { target } => info!("\televator {} goes down to floor {}", id, target),
                Motion::Stopped { floor } => info!("\televator {} is stopped on floor {}", id, floor),
            }
            moved |= had_stop;
            motions.push((id, motion));
        }

        self.step += 1;
        StepReport {
            step,
            moved,
            motions,
        }
    }

    /// Runs one step. Returns false once the fleet has nothing left to do.
    pub fn step(&mut self) -> bool {
        self.advance().moved
    }

    /// Steps until the fleet is idle or `max_steps` steps have run. Returns the
    /// number of steps in which something was still queued.
    pub fn run_until_idle(&mut self, max_steps: Option<u64>) -> u64 {
        let mut active = 0;
        let mut taken = 0;
        while max_steps.map_or(true, |max| taken < max) {
            taken += 1;
            if !self.step() {
                break;
            }
            active += 1;
        }
        active
    }
}
