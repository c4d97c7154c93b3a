pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{contacts::ContactPipeline, etl::EtlEngine, messages::MessagePipeline};
pub use domain::model::{ContactCard, Record, Table};
pub use domain::ports::Pipeline;
pub use utils::error::{EtlError, Result};
