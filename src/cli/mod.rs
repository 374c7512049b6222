//! CLI module

mod args;

pub use args::{Args, DepsArgs, ExecArgs, FixArgs, InitArgs, SessionArgs, SubCommand};
