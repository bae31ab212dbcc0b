use clap::Parser;
use log::{error, info};

use voc_tools::{convert_dataset, LabelMap, RecordArgs};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = RecordArgs::parse();

    let label_map = match &args.label_map {
        Some(path) => match LabelMap::from_json_file(path) {
            Ok(label_map) => label_map,
            Err(e) => {
                error!("Failed to load label map: {}", e);
                std::process::exit(1);
            }
        },
        None => LabelMap::pascal_voc(),
    };
    info!(
        "Starting the conversion process with {} labels...",
        label_map.len()
    );

    match convert_dataset(
        &args.annotations_dir,
        &args.images_dir,
        &args.output_dir,
        &label_map,
        &args.options(),
    ) {
        Ok(stats) => {
            stats.print_summary();
            info!("Conversion process completed successfully.");
        }
        Err(e) => {
            error!("Failed to convert dataset: {}", e);
            std::process::exit(1);
        }
    }
}
