use clap::Parser;
use log::{error, info};

use coco2rcnn::{run, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Starting COCO to R-CNN conversion...");

    match run(&args) {
        Ok(stats) => {
            stats.print_summary();
            info!("Conversion process completed successfully.");
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            std::process::exit(1);
        }
    }
}
