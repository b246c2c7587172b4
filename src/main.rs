/* 3rd party libraries */
use clap::{Arg, Command};
use log::info;

/* Custom libraries */
use elevator_dispatch::config;
use elevator_dispatch::unwrap_or_exit;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator-dispatch")
        .about("Dispatches pickups over an elevator fleet and steps it until idle")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Fleet and request configuration"),
        )
        .arg(
            Arg::new("max-steps")
                .long("max-steps")
                .takes_value(true)
                .help("Stop after this many steps even if the fleet is still moving"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the final fleet status as JSON"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path));
    let max_steps = match matches.value_of("max-steps") {
        Some(value) => Some(unwrap_or_exit!(value.parse::<u64>())),
        None => config.simulation.max_steps,
    };

    // Register the fleet and replay the requests
    let mut control = unwrap_or_exit!(config.build_control());
    info!(
        "{} elevators registered, {} requests replayed",
        control.len(),
        config.requests.len()
    );

    // Step until every queue is empty
    let steps = control.run_until_idle(max_steps);
    if control.is_idle() {
        info!("Fleet idle after {} steps", steps);
    } else {
        info!("Stopped after {} steps with requests still queued", steps);
    }

    let status = control.status();
    if matches.is_present("json") {
        println!("{}", unwrap_or_exit!(serde_json::to_string_pretty(&status)));
    } else {
        for (id, state) in status.iter() {
            info!("elevator {} on floor {}, queue {:?}", id, state.current, state.queue);
        }
    }
}
