use aquaprobe_core::error::AquaprobeError;
use aquaprobe_core::thresholds::{self, builtin};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    thresholds_file: Option<PathBuf>,
    output_format: &str,
    show_all: bool,
    verbose: bool,
) -> Result<(), AquaprobeError> {
    let table = match thresholds_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "using custom threshold table");
            thresholds::load_table(&path)?
        }
        None => builtin::standard().clone(),
    };

    let json = std::fs::read_to_string(&input_file)?;
    let records = aquaprobe_core::parse_samples(&json)?;
    let result = aquaprobe_core::assess_batch(&records, &table)?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print(&result, show_all, verbose),
    }

    Ok(())
}
