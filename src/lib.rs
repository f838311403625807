//! A lock-guarded to-do list with a concurrent fan-out/fan-in processing demo.
//!
//! Run the demo with: cargo run --bin todo_demo [config.toml]

pub mod collection;
pub mod config;
pub mod driver;
pub mod error;
pub mod item;
pub mod processing;
pub mod report;

pub use collection::{Collection, Stats};
pub use config::DemoConfig;
pub use driver::{run, Summary};
pub use error::DemoError;
pub use item::Item;
pub use processing::{fan_out, format_result, process_item};
