/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::coordinator::Control;
use crate::shared::{ControlError, ElevatorId, Floor};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub elevators: Vec<ElevatorConfig>,
    #[serde(default)]
    pub requests: Vec<RequestConfig>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SimulationConfig {
    pub max_steps: Option<u64>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ElevatorConfig {
    pub id: ElevatorId,
    pub floor: Floor,
}

/// A request replayed against the fleet before stepping starts.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RequestConfig {
    Floor { elevator: ElevatorId, floor: Floor },
    Pickup { floor: Floor },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

impl Config {
    /// Registers the configured elevators and replays the configured requests.
    /// Stops at the first rejected one.
    pub fn build_control(&self) -> Result<Control, ControlError> {
        let mut control = Control::new();
        for elevator in self.elevators.iter() {
            control.add_elevator(elevator.id, elevator.floor)?;
        }
        for request in self.requests.iter() {
            match *request {
                RequestConfig::Floor { elevator, floor } => control.request_floor(elevator, floor)?,
                RequestConfig::Pickup { floor } => {
                    control.pickup(floor)?;
                }
            }
        }
        Ok(control)
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;

    const EXAMPLE: &str = r#"
        [simulation]
        max_steps = 20

        [[elevators]]
        id = 1
        floor = 5

        [[elevators]]
        id = 2
        floor = 1

        [[requests]]
        kind = "floor"
        elevator = 1
        floor = 10

        [[requests]]
        kind = "pickup"
        floor = 4
    "#;

    #[test]
    fn test_config_parse() {
        // Act
        let config = parse_config(EXAMPLE).unwrap();

        // Assert
        assert_eq!(config.simulation.max_steps, Some(20));
        assert_eq!(config.elevators, vec![
            ElevatorConfig { id: 1, floor: 5 },
            ElevatorConfig { id: 2, floor: 1 },
        ]);
        assert_eq!(config.requests, vec![
            RequestConfig::Floor { elevator: 1, floor: 10 },
            RequestConfig::Pickup { floor: 4 },
        ]);
    }

    #[test]
    fn test_config_defaults() {
        // Act
        let config = parse_config("").unwrap();

        // Assert
        assert_eq!(config.simulation.max_steps, None);
        assert!(config.elevators.is_empty());
        assert!(config.requests.is_empty());
    }

    #[test]
    fn test_config_build_control() {
        // Arrange
        let config = parse_config(EXAMPLE).unwrap();

        // Act
        let control = config.build_control().unwrap();

        // Assert
        assert_eq!(control.state(1).unwrap().queue, vec![10]);
        assert_eq!(control.state(2).unwrap().queue, vec![4]);
    }

    #[test]
    fn test_config_build_control_rejects_unknown() {
        // Arrange
        let config = parse_config(
            r#"
            [[requests]]
            kind = "floor"
            elevator = 3
            floor = 1
            "#,
        )
        .unwrap();

        // Act
        let result = config.build_control();

        // Assert
        assert_eq!(result.unwrap_err(), ControlError::UnknownElevator(3));
    }

    #[test]
    fn test_config_bad_kind() {
        // Act
        let result = parse_config("[[requests]]\nkind = \"teleport\"\nfloor = 1\n");

        // Assert
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_missing_file() {
        // Act
        let result = load_config("does/not/exist.toml");

        // Assert
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
