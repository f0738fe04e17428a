//! Loss-development triangle construction and accumulation

mod builder;
mod data;

pub use builder::build;
pub use data::Triangle;
