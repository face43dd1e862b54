pub mod batch;
pub mod batch_config;
pub mod data_processing;
pub mod error;
pub mod numerical;
pub mod summary;
pub mod systems;
pub mod telemetry;
