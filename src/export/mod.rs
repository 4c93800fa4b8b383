pub mod invocation;
pub mod runner;
pub mod session;

pub use invocation::ExportInvocation;
pub use runner::{DEFAULT_TIMEOUT, run_invocation};
pub use session::ExportSession;
