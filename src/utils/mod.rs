//! Process plumbing shared by the binary and the server.

pub mod logging;
pub mod shutdown;

pub use logging::init_tracing;
pub use shutdown::shutdown_signal;
