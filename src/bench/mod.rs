//! Times transforms on background workers and reports how long each took.

mod timing;
pub use timing::*;
