mod errors;
mod page;
mod ports;
mod report;

// Re-export the domain boundary types and ports.
pub use errors::FetchError;
pub use page::{PageKind, RenderedPage};
pub use ports::{Backend, BackendResponse, ErrorReporter};
pub use report::{ReportContext, UserContext};
