mod config;
pub use config::*;
mod generate;
pub use generate::*;
mod logger;
pub use logger::*;
mod utils;
pub use utils::*;
