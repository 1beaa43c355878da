//! Application glue module
//!
//! Configuration, the event loop, and console session handling.

mod config;
pub mod console;
pub mod event_loop;

pub use config::{ColorConfig, Config, ConfigError, SurfaceArgs};
pub use event_loop::{Controller, EventLoop, EventLoopError, EventSource, Polled, ScriptedEvents};
