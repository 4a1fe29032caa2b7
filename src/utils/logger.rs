use std::error::Error;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use backtrace::Backtrace;
use serde::Serialize;
use slog::{Drain, Level, LevelFilter, Logger, OwnedKV, SendSyncRefUnwindSafeKV, o};

use crate::utils::Config;

const MAX_FRAMES: usize = 16;

#[derive(Serialize, Debug)]
pub struct StackFrame {
    func: String,
    source: String,
    line: u32,
}

/// `dir/file.rs` for a source path, or the path itself when it has no parent.
fn short_source(path: &Path) -> String {
    match (path.parent().and_then(Path::file_name), path.file_name()) {
        (Some(dir), Some(file)) => format!("{}/{}", dir.to_string_lossy(), file.to_string_lossy()),
        _ => path.display().to_string(),
    }
}

/// The innermost resolved frames of the current backtrace, at most
/// [`MAX_FRAMES`] of them.
fn marshal_stack() -> Option<Vec<StackFrame>> {
    let bt = Backtrace::new();
    let frames: Vec<StackFrame> = bt
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .take(MAX_FRAMES)
        .map(|symbol| StackFrame {
            func: symbol.name().map_or_else(|| "unknown".to_owned(), |n| n.to_string()),
            source: symbol.filename().map_or_else(|| "unknown".to_owned(), short_source),
            line: symbol.lineno().unwrap_or(0),
        })
        .collect();
    if frames.is_empty() { None } else { Some(frames) }
}

/// Key-values describing an error: its message and, when one can be
/// captured, a stack trace. Attach with `logger.new(fmt_err(&err))`.
pub fn fmt_err(err: &dyn Error) -> OwnedKV<impl SendSyncRefUnwindSafeKV + use<>> {
    let msg = err.to_string();
    let stack_trace = marshal_stack()
        .map(|frames| format!("{:?}", frames))
        .unwrap_or_default();
    o!("error" => msg, "stack_trace" => stack_trace)
}

/// Parses a level name such as `info` or `DEBUG`, falling back to `Info`.
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name).unwrap_or(Level::Info)
}

/// A JSON logger on stdout filtered at the configured level.
pub fn get_logger() -> Logger {
    logger_with_level(parse_level(&Config::from_env().log_level))
}

pub fn logger_with_level(level: Level) -> Logger {
    let drain = slog_json::Json::default(io::stdout());
    let drain = LevelFilter::new(drain, level).fuse();
    let drain = Mutex::new(drain).fuse();
    Logger::root(drain, o!("crate" => env!("CARGO_PKG_NAME")))
}
