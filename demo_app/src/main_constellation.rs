//! Constellation demo: draws the stars of Leo and their connecting lines
//!
//! Usage: `constellation_demo [config.toml|config.ron]`

use holistic_math::foundation::logging;
use holistic_math::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("Starting constellation demo");

    let config = ConstellationConfig::load_or_default(std::env::args().nth(1))?;

    let mut list = DrawList::new();
    draw_constellation(&mut list, &config)?;
    let edge_length = config.edge_length()?;

    for command in list.commands() {
        log::debug!("{}", command.label());
    }
    log::info!(
        "constellation complete: {} stars, {} lines, total edge length {:.1}",
        list.point_count(),
        list.line_count(),
        edge_length
    );
    Ok(())
}
