//! microsvc — Convention-based command handler framework.
//!
//! Register command handlers on a `Service`. Each handler receives a
//! `Context<R>` with access to the input payload, the session (who is signed
//! in), and the site.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use quill::{handlers, microsvc, Site};
//! use serde_json::json;
//!
//! let service = Arc::new(handlers::service(Site::in_memory()));
//!
//! // Direct dispatch
//! let result = service.dispatch(
//!     "works.home",
//!     json!({}),
//!     microsvc::Session::for_user("alice"),
//! );
//!
//! // HTTP transport (requires "http" feature)
//! // microsvc::serve(service, "0.0.0.0:3000").await?;
//! ```

mod context;
mod error;
mod service;
mod session;

pub use context::Context;
pub use error::HandlerError;
pub use service::Service;
pub use session::{Session, USER_HEADER};

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `COMMAND: &str` — the command name
/// - `guard(ctx) -> bool` — input validation
/// - `handle(ctx) -> Result<Value, HandlerError>` — the handler
///
/// # Example
/// ```ignore
/// let service = quill::register_handlers!(
///     microsvc::Service::new(Site::in_memory()),
///     handlers::work_favourite,
///     handlers::work_unfavourite,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .command_guarded(
                $($seg)::+::COMMAND,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}
