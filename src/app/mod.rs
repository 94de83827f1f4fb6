pub mod context;
pub mod error;
pub mod logger;

pub use context::AppContext;
pub use error::{PageIconError, Result};
pub use logger::{Logger, NoopLogger, TracingLogger};
