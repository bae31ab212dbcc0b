use clap::Parser;
use log::{error, info};

use voc_tools::{split_dataset, SplitArgs};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = SplitArgs::parse();

    info!("Starting the split process...");

    match split_dataset(
        &args.annotations_dir,
        &args.images_dir,
        &args.output_root,
        &args.options(),
    ) {
        Ok(moved) => info!("Moved {} annotation/image pairs.", moved.len()),
        Err(e) => {
            error!("Failed to split dataset: {}", e);
            std::process::exit(1);
        }
    }
}
