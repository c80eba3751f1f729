//! Grid demo: lays out axes and grid lines and lists the draw calls
//!
//! Usage: `grid_demo [config.toml|config.ron]`

use holistic_math::foundation::logging;
use holistic_math::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("Starting grid demo");

    let config = GridConfig::load_or_default(std::env::args().nth(1))?;

    let mut list = DrawList::new();
    let drawn = draw_grid(&mut list, &config)?;

    for command in list.commands() {
        let (start, end) = command.segment();
        log::debug!("{} width {} from {} to {}", command.label(), command.width(), start, end);
    }
    log::info!("grid complete: {} lines", drawn);
    Ok(())
}
