pub mod configuration;
pub mod errors;
pub mod routes;
pub mod startup;
pub mod telemetry;
