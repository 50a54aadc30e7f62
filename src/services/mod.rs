pub mod activity_yaml;
pub mod baseline;
pub mod confidence;
pub mod config_yaml;
pub mod data_source;
pub mod deltas;
pub mod engine;
pub mod explanation;
pub mod projection;
pub mod rest_store;
pub mod scenario_yaml;
