//! Drive demo: a tank turns toward a fuel depot and drives to it
//!
//! Usage: `drive_demo [config.toml|config.ron]`

use holistic_math::foundation::logging;
use holistic_math::prelude::*;

const FRAME_TIME: f32 = 1.0 / 60.0;
const MAX_FRAMES: usize = 60 * 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("Starting drive demo");

    let config = DriveConfig::load_or_default(std::env::args().nth(1))?;

    let tank = Vec3::new(-6.0, -4.0, 0.0);
    let fuel = Vec3::new(7.5, 9.0, 0.0);
    let mut drive = Drive::new(config, tank, Vec3::new(0.0, 1.0, 0.0), fuel)?;

    log::info!(
        "tank at {} facing {}, fuel depot {:.2} away",
        Coords::from(drive.position()),
        Coords::from(drive.up()),
        drive.remaining_distance()
    );

    let frames = drive.run_until_arrived(FRAME_TIME, MAX_FRAMES);
    log::info!(
        "tank stopped at {} after {} frames ({:.2}s)",
        Coords::from(drive.position()),
        frames,
        frames as f32 * FRAME_TIME
    );
    Ok(())
}
