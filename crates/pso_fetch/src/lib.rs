pub mod adapters;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod observer;
pub mod source;

pub use command::{run_command, Command};
pub use config::ObserverConfig;
pub use dispatch::AdapterKind;
pub use observer::Observer;
pub use source::http_source::HttpSource;
pub use source::StatusSource;
