//! Headless pendulum run
//!
//! Usage: `pendusim [settings.json] [seconds]`
//!
//! Drives the simulation core the way a render loop would, on a manually
//! advanced clock, then prints the finalized experiment summary as JSON.

use std::env;
use std::error::Error;

use log::info;
use pendusim::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let settings = match args.next() {
        Some(path) => {
            info!("loading settings from {}", path);
            SimulationSettings::load(&path)?
        }
        None => SimulationSettings::default(),
    };
    let seconds: f64 = match args.next() {
        Some(s) => s.parse()?,
        None => 10.0,
    };

    println!("pendusim - damped pendulum simulation");
    println!("=====================================\n");

    let clock = ManualClock::new();
    let mut pendulum =
        Pendulum::with_preferences(settings, &PendulumPreferences::default(), clock.clone())?;

    let derived = pendulum.derived_quantities();
    println!(
        "L = {:.2} m, m = {:.2} kg, θ0 = {:.1}°",
        pendulum.length(),
        pendulum.mass(),
        Radians(pendulum.initial_angle()).to_degrees().value()
    );
    println!(
        "Ideal period: {:.4} s, frequency: {:.4} Hz",
        derived.period, derived.frequency
    );

    let dt = pendulum.settings().time_step;
    let frames = (seconds / dt).round() as usize;
    let e0 = pendulum.energy().total;

    pendulum.start();
    for _ in 0..frames {
        clock.advance_secs(dt);
        pendulum.step_frame();
    }
    let elapsed = pendulum.pause().unwrap_or_default();

    let e1 = pendulum.energy().total;
    println!(
        "\nSimulated {} frames ({:.2} s) with dt = {} s",
        frames,
        elapsed.as_secs_f64(),
        dt
    );
    println!("  Final angle:       {:.4} rad", pendulum.angle());
    println!("  Energy:            {:.4} J -> {:.4} J", e0, e1);
    println!("  Energy retained:   {:.1}%", 100.0 * e1 / e0);

    let record = pendulum.finalize()?;
    let stats = ExperimentStats::from_records(std::slice::from_ref(&record));
    println!(
        "  Measurements kept: {} (capacity {})",
        record.measurements.len(),
        pendulum.measurements().capacity()
    );
    println!("\n{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
