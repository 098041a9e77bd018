//! Generate a 10x20 town layout and print it to the terminal.
//!
//! ```text
//! cargo run -p plat-bench --example town [seed]
//! RUST_LOG=plat_area=debug cargo run -p plat-bench --example town
//! ```

use std::error::Error;

use plat_area::SeededSource;
use plat_bench::town_profile;
use plat_render::render_text;
use tracing_subscriber::EnvFilter;

const DEFAULT_SEED: u64 = 23;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_SEED,
    };

    let mut area = town_profile().build()?;
    let stats = area.generate(&mut SeededSource::new(seed))?;

    println!("{}", render_text(&area));
    println!(
        "seed {seed}: {} zones in {} groups, {} empty cells",
        stats.zones, stats.groups, stats.empty_cells
    );
    Ok(())
}
