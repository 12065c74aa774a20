//! Hook registry and concurrent dispatch engine.
//!
//! # Overview
//! A hook is a named HTTP call target (URL + verb). The `Registry` keeps an
//! ordered list of hooks persisted as a JSON array. A dispatch round calls
//! every hook at once and reports per-hook success or failure, either as a
//! streaming log or as a table printed after every call has settled.
//!
//! # Design
//! - The network sits behind the `Transport` trait; the dispatch engine only
//!   builds `HttpRequest` values and reads `HttpResponse` values.
//! - One tokio task per hook, joined with a `JoinSet`. Outcomes land in
//!   index-addressed slots, so table output keeps registry order.
//! - A transport failure is local to its hook and never aborts the round.
//! - Headers are accepted on hooks but neither persisted nor transmitted.

pub mod call;
pub mod dispatch;
pub mod error;
pub mod hook;
pub mod http;
pub mod registry;
pub mod report;
pub mod transport;
pub mod verb;

pub use call::CallOptions;
pub use dispatch::{CallStatus, Dispatcher, Outcome};
pub use error::{HookError, TransportError};
pub use hook::{parse_url, Hook};
pub use http::{HttpRequest, HttpResponse};
pub use registry::Registry;
pub use report::Reporter;
pub use transport::{ReqwestTransport, Transport};
pub use url::Url;
pub use verb::Verb;
