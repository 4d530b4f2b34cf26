//! CLI library components for the Modbus declaration generator.

pub mod logging;
pub mod pipeline;
