pub mod contacts;
pub mod etl;
pub mod messages;
pub mod table;

pub use crate::domain::model::{ContactCard, Record, Table};
pub use crate::domain::ports::Pipeline;
pub use crate::utils::error::Result;
