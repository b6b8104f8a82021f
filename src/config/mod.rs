/// Main configuration module.
/// 
/// Re-exports submodules for status page constants and runtime server configuration.
pub mod status;
pub mod server;
