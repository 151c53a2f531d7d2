//! Result publisher: hands finished analyses to the transport boundary.

pub mod dispatcher;
pub mod handler;
pub mod report;

pub use dispatcher::ResultPublisher;
pub use handler::AnalysisHandler;
pub use report::AnalysisReport;
