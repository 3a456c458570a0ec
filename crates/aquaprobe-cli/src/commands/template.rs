use aquaprobe_core::error::AquaprobeError;
use aquaprobe_core::model::{SampleRecord, SourceType, WaterSample};

use crate::output;

/// Print the form's default sample for the given source, ready to edit.
pub fn run(source: SourceType) -> Result<(), AquaprobeError> {
    let record = SampleRecord {
        id: Some(format!("{}-sample-1", source.key())),
        sample: WaterSample {
            source_type: source,
            ..WaterSample::default()
        },
    };
    output::json::print(&record)
}
