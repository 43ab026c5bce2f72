//! HTTP transport shared by the resolver and the webhook sink.
//!
//! Both sides see only [`HttpClient`]; [`ReqwestClient`] is the production
//! implementation and tests script their own.

mod client;
mod error;
mod message;


pub use client::ReqwestClient;
pub use error::{BoxError, HttpError};
pub use message::{HttpClient, HttpRequest, HttpResponse};
