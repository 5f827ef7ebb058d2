//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.x server that handles exactly one
//! request per connection and closes the socket afterwards.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the per-request state machine
//! - **`parser`**: Parses the request line into method, path, and version
//! - **`request`**: Request-line representation and method dispatch
//! - **`response`**: HTTP status code catalog
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────────────┐
//!        │ AwaitingRequestLine │ ← Read the first line of the request
//!        └──────────┬──────────┘
//!                   │ Line parsed
//!                   ▼
//!        ┌─────────────────────┐
//!        │     Dispatching     │ ← Branch on method (GET/HEAD/POST/TRACE)
//!        └──────────┬──────────┘
//!                   │ Response written (success or error)
//!                   ▼
//!        ┌─────────────────────┐
//!        │       Closed        │ ← Socket shut down, exactly once
//!        └─────────────────────┘
//! ```
//!
//! A parse failure or unsupported method detours through `Erroring`, which
//! writes an HTML error page before the connection reaches `Closed`.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
