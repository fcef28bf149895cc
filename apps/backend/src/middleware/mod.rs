pub mod jwt_extract;
pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use jwt_extract::JwtExtract;
pub use request_trace::{CorrelationId, RequestTrace, CORRELATION_HEADER};
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
