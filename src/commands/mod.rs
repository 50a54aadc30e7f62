pub mod base_commands;
pub mod baseline_cmd;
pub mod info_cmd;
pub mod presets_cmd;
pub mod report_format;
pub mod simulate_cmd;
pub mod store_args;
