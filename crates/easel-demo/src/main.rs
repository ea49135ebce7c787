use anyhow::Result;

use easel_engine::coords::Point;
use easel_engine::device::GpuInit;
use easel_engine::display::DisplayConfig;
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::paint::palette;
use easel_engine::primitives::{Element, Quadrilateral};
use easel_engine::window::Runtime;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    println!("Starting...");

    let square = Quadrilateral::new(vec![
        Point::new(100.0, 100.0),
        Point::new(200.0, 100.0),
        Point::new(200.0, 200.0),
        Point::new(100.0, 200.0),
    ])?
    .with_id("square")
    .with_color(palette::GREEN)
    .with_outline_width(0);

    let elements: Vec<Element> = vec![square.into()];

    Runtime::run(DisplayConfig::new((500, 500), "Testing"), GpuInit::default(), elements)?;

    log::info!("window closed");
    Ok(())
}
