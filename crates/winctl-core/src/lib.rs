pub mod ancestry;
pub mod config;
pub mod ctl;
pub mod dimensions;
pub mod error;
pub mod flags;
pub mod handle;
pub mod log;
pub mod memory;
pub mod monitor;
pub mod mutate;
pub mod platform;
pub mod query;
pub mod registry;
pub mod window;

pub use config::Config;
pub use ctl::WinCtl;
pub use dimensions::Dimensions;
pub use error::{Error, PlatformError, Result};
pub use flags::{AncestorFlag, InsertAfter, SwpFlags, WindowState};
pub use handle::WindowHandle;
pub use monitor::Monitor;
pub use platform::Platform;
pub use registry::Registry;
pub use window::{Window, WindowSnapshot};
