use std::path::PathBuf;

use mandelbrot_tiles::{ExplorerConfig, PngFilePresenter, explore};

const USAGE: &str = "usage: mandelbrot_tiles [config.json] [output-dir]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(flag) if flag == "-h" || flag == "--help" => {
            println!("{USAGE}");
            return Ok(());
        }
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };
    let output_dir = args.next().map_or_else(|| PathBuf::from("output"), PathBuf::from);

    explore(&config, PngFilePresenter::new(), &output_dir)?;

    Ok(())
}
