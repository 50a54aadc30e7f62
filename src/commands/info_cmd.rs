use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::store_args::load_factors;
use crate::services::engine::engine_info;

pub fn info_command(cmd: Commands) -> ExitCode {
    let Commands::Info { factors } = cmd else {
        return ExitCode::FAILURE;
    };

    let factors = match load_factors(factors.as_deref()) {
        Ok(factors) => factors,
        Err(e) => {
            eprintln!("Failed to load impact factors: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_yaml::to_string(&engine_info(&factors)) {
        Ok(yaml) => {
            print!("{yaml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize engine info: {e:?}");
            ExitCode::FAILURE
        }
    }
}
