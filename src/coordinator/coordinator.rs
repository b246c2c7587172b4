/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use std::collections::BTreeMap;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use super::control::Control;
use crate::elevator::ElevatorState;
use crate::shared::{ControlError, ElevatorId, Floor, StepReport};

/***************************************/
/*               Enums                 */
/***************************************/

/// A request to the coordinator thread. Every request carries the channel its
/// answer is sent back on.
pub enum Request {
    AddElevator {
        id: ElevatorId,
        floor: Floor,
        reply: cbc::Sender<Result<(), ControlError>>,
    },
    RequestFloor {
        id: ElevatorId,
        floor: Floor,
        reply: cbc::Sender<Result<(), ControlError>>,
    },
    Pickup {
        floor: Floor,
        reply: cbc::Sender<Result<ElevatorId, ControlError>>,
    },
    Step {
        reply: cbc::Sender<StepReport>,
    },
    Status {
        reply: cbc::Sender<BTreeMap<ElevatorId, ElevatorState>>,
    },
}

enum Event {
    RequestReceived(Request),
    NoEvent,
    Terminate,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Owns the fleet when requests arrive from several sources at once.
 *
 * The coordinator runs on its own thread and handles one request at a time, so a
 * pickup is evaluated and committed without any other request or step getting in
 * between, and steps are applied in a single global order.
 *
 * # Fields
 * - `control`:                     The fleet this coordinator owns.
 * - `request_rx`:                  Receives requests from every `FleetHandle`.
 * - `coordinator_terminate_rx`:    Stops the main loop.
 */
pub struct Coordinator {
    control: Control,
    request_rx: cbc::Receiver<Request>,
    coordinator_terminate_rx: cbc::Receiver<()>,
}

impl Coordinator {
    pub fn new(
        control: Control,
        request_rx: cbc::Receiver<Request>,
        coordinator_terminate_rx: cbc::Receiver<()>,
    ) -> Coordinator {
        Coordinator {
            control,
            request_rx,
            coordinator_terminate_rx,
        }
    }

    /// Runs until terminated or every handle is dropped, then hands back the fleet.
    pub fn run(mut self) -> Control {
        // Main loop
        loop {
            match self.wait_for_event() {
                Event::RequestReceived(request) => self.handle_request(request),
                Event::NoEvent => {}
                Event::Terminate => {
                    info!("Coordinator terminated");
                    return self.control;
                }
            }
        }
    }

    fn handle_request(&mut self, request: Request) {
        // A dropped reply receiver only means the caller stopped waiting
        match request {
            Request::AddElevator { id, floor, reply } => {
                let result = self.control.add_elevator(id, floor);
                if let Err(ref e) = result {
                    warn!("Rejected new elevator: {}", e);
                }
                let _ = reply.send(result);
            }

            Request::RequestFloor { id, floor, reply } => {
                let result = self.control.request_floor(id, floor);
                if let Err(ref e) = result {
                    warn!("Rejected floor request for floor {}: {}", floor, e);
                }
                let _ = reply.send(result);
            }

            Request::Pickup { floor, reply } => {
                let result = self.control.pickup(floor);
                if let Err(ref e) = result {
                    warn!("Rejected pickup on floor {}: {}", floor, e);
                }
                let _ = reply.send(result);
            }

            Request::Step { reply } => {
                let _ = reply.send(self.control.advance());
            }

            Request::Status { reply } => {
                let _ = reply.send(self.control.status());
            }
        }
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.request_rx) -> request => {
                match request {
                    Ok(request) => Event::RequestReceived(request),
                    // Every handle is gone, nobody can reach us anymore
                    Err(_) => Event::Terminate,
                }
            },

            recv(self.coordinator_terminate_rx) -> _ => Event::Terminate,

            default(Duration::from_millis(50)) => Event::NoEvent,
        }
    }
}

/**
 * Client side of a running `Coordinator`. Cheap to clone, every clone talks to the
 * same coordinator and every call blocks until it has answered.
 */
#[derive(Clone)]
pub struct FleetHandle {
    request_tx: cbc::Sender<Request>,
    terminate_tx: cbc::Sender<()>,
}

impl FleetHandle {
    /// Creates a coordinator owning `control` along with a handle to it. The
    /// coordinator does nothing until `Coordinator::run` is called on some thread.
    pub fn new(control: Control) -> (Coordinator, FleetHandle) {
        let (request_tx, request_rx) = cbc::unbounded::<Request>();
        let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();
        (
            Coordinator::new(control, request_rx, terminate_rx),
            FleetHandle {
                request_tx,
                terminate_tx,
            },
        )
    }

    pub fn add_elevator(&self, id: ElevatorId, floor: Floor) -> Result<(), ControlError> {
        self.call(|reply| Request::AddElevator { id, floor, reply })?
    }

    pub fn request_floor(&self, id: ElevatorId, floor: Floor) -> Result<(), ControlError> {
        self.call(|reply| Request::RequestFloor { id, floor, reply })?
    }

    pub fn pickup(&self, floor: Floor) -> Result<ElevatorId, ControlError> {
        self.call(|reply| Request::Pickup { floor, reply })?
    }

    pub fn step(&self) -> Result<StepReport, ControlError> {
        self.call(|reply| Request::Step { reply })
    }

    pub fn status(&self) -> Result<BTreeMap<ElevatorId, ElevatorState>, ControlError> {
        self.call(|reply| Request::Status { reply })
    }

    /// Asks the coordinator to stop. Requests already queued may be dropped.
    pub fn shutdown(&self) -> Result<(), ControlError> {
        self.terminate_tx
            .send(())
            .map_err(|_| ControlError::Disconnected)
    }

    fn call<T>(&self, request: impl FnOnce(cbc::Sender<T>) -> Request) -> Result<T, ControlError> {
        let (reply_tx, reply_rx) = cbc::bounded::<T>(1);
        self.request_tx
            .send(request(reply_tx))
            .map_err(|_| ControlError::Disconnected)?;
        reply_rx.recv().map_err(|_| ControlError::Disconnected)
    }
}
