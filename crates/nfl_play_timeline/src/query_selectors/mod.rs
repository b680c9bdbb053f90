pub mod config;
pub mod parse_box_score;

pub use config::config::*;
pub use parse_box_score::*;
