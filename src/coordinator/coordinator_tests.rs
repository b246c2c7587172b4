/*
 * Unit tests for coordinator module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_coordinator_requests
 *  - test_coordinator_errors
 *  - test_coordinator_concurrent_pickups
 *  - test_coordinator_shutdown
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod coordinator_tests {
    use crate::coordinator::{Control, FleetHandle};
    use crate::shared::{ControlError, Motion};
    use std::thread::{Builder, JoinHandle};

    fn setup_coordinator() -> (FleetHandle, JoinHandle<Control>) {
        let (coordinator, handle) = FleetHandle::new(Control::new());
        let coordinator_thread = Builder::new()
            .name("coordinator".into())
            .spawn(move || coordinator.run())
            .unwrap();
        (handle, coordinator_thread)
    }

    #[test]
    fn test_coordinator_requests() {
        // Arrange
        let (handle, coordinator_thread) = setup_coordinator();

        // Act
        handle.add_elevator(1, 5).unwrap();
        handle.add_elevator(2, 1).unwrap();
        handle.request_floor(1, 10).unwrap();
        handle.request_floor(1, 1).unwrap();
        let picked = handle.pickup(4).unwrap();
        let report = handle.step().unwrap();
        let status = handle.status().unwrap();

        // Assert
        assert_eq!(picked, 2);
        assert_eq!(report.step, 1);
        assert!(report.moved);
        assert_eq!(report.motions[0], (1, Motion::Down { target: 1 }));
        assert_eq!(status[&1].current, 1);
        assert_eq!(status[&1].queue, vec![10]);
        assert_eq!(status[&2].current, 4);

        // Cleanup
        handle.shutdown().unwrap();
        coordinator_thread.join().unwrap();
    }

    #[test]
    fn test_coordinator_errors() {
        // Arrange
        let (handle, coordinator_thread) = setup_coordinator();

        // Act
        let pickup = handle.pickup(3);
        handle.add_elevator(1, 0).unwrap();
        let duplicate = handle.add_elevator(1, 2);
        let unknown = handle.request_floor(5, 2);

        // Assert
        assert_eq!(pickup, Err(ControlError::EmptyFleet));
        assert_eq!(duplicate, Err(ControlError::DuplicateElevator(1)));
        assert_eq!(unknown, Err(ControlError::UnknownElevator(5)));

        // Cleanup
        handle.shutdown().unwrap();
        let control = coordinator_thread.join().unwrap();
        assert_eq!(control.len(), 1);
        assert!(control.is_idle());
    }

    #[test]
    fn test_coordinator_concurrent_pickups() {
        // Purpose: pickups sent from several threads are all committed to some queue

        // Arrange
        let (handle, coordinator_thread) = setup_coordinator();
        for id in 0..3 {
            handle.add_elevator(id, (id * 10) as i32).unwrap();
        }

        // Act
        let callers: Vec<_> = (0..4)
            .map(|caller| {
                let handle = handle.clone();
                std::thread::spawn(move || {
                    for floor in 0..5 {
                        handle.pickup(caller * 5 + floor).unwrap();
                    }
                })
            })
            .collect();
        for caller in callers {
            caller.join().unwrap();
        }
        let status = handle.status().unwrap();

        // Assert
        let mut queued: Vec<i32> = status.values().flat_map(|s| s.queue.clone()).collect();
        queued.sort();
        assert_eq!(queued, (0..20).collect::<Vec<i32>>());

        // Cleanup
        handle.shutdown().unwrap();
        coordinator_thread.join().unwrap();
    }

    #[test]
    fn test_coordinator_shutdown() {
        // Arrange
        let (handle, coordinator_thread) = setup_coordinator();
        handle.add_elevator(1, 0).unwrap();

        // Act
        handle.shutdown().unwrap();
        let control = coordinator_thread.join().unwrap();
        let after = handle.status();

        // Assert
        assert_eq!(control.len(), 1);
        assert_eq!(after, Err(ControlError::Disconnected));
    }
}
