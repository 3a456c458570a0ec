use aquaprobe_core::error::AquaprobeError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), AquaprobeError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
