pub mod entities;
pub mod poller;
pub mod settings;
pub mod telemetry;
