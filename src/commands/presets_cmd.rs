use std::process::ExitCode;

use crate::commands::report_format::format_preset_list;
use crate::services::engine::list_presets;

pub fn presets_command() -> ExitCode {
    println!("{}", format_preset_list(&list_presets()));
    ExitCode::SUCCESS
}
