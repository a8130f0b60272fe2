pub mod cli;
pub mod config;
pub mod tree;
pub mod ui;
pub mod util;

pub use tree::{Balancing, Tree};
