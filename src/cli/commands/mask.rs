//! Mask a value from the command line

use std::process::ExitCode;

use diagpage::api::{self, MaskRequest};
use diagpage::output::OutputMode;

/// Print `value` with everything but the visible window masked
pub fn mask(value: &str, visible: usize, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let data = api::mask_value(&MaskRequest {
        value: value.to_string(),
        visible: Some(visible),
    })?;
    data.render(mode);
    Ok(ExitCode::SUCCESS)
}
