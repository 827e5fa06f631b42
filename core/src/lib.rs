//! Synchronous API client core for the coffee resource.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values as plain
//! data. `HttpTransport` executes the round-trip in between; `UreqTransport`
//! is the blocking implementation used by the `customer` binary.
//!
//! # Design
//! - `CoffeeClient` is stateless. It holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), and joined by a method that runs both
//!   through a transport passed in by the caller.
//! - `NewCoffee` and `Coffee` are separate types: a payload built by the
//!   caller never carries server-assigned fields, and a decoded record always
//!   carries all of them.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::CoffeeClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, TypedResponse};
pub use transport::{HttpTransport, UreqTransport};
pub use types::{Coffee, NewCoffee, NewCoffeeBuilder};
