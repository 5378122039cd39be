//! HTTP protocol implementation.
//!
//! One request per connection: the server reads once, answers once and
//! closes the socket. There is no keep-alive and no request body handling.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection state machine
//! - **`parser`**: pulls the method and path out of the first request line
//! - **`request`**: `Method` and `Request`
//! - **`resolver`**: maps a request path to a file name and media type
//! - **`mime`**: media type detection based on file extensions
//! - **`response`**: status codes, responses and the status policy for files
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────────┐
//!        │ AwaitingRequest │ ← One read of up to 8 KiB
//!        └────────┬────────┘
//!                 │ bytes read (nothing read → Closed)
//!                 ▼
//!        ┌─────────────────┐
//!        │     Parsed      │ ← Match GET / HEAD request line
//!        └────────┬────────┘
//!                 │ matched (otherwise 405 → Responded)
//!                 ▼
//!        ┌─────────────────┐
//!        │  MethodChecked  │
//!        └────────┬────────┘
//!                 ▼
//!        ┌─────────────────┐
//!        │    Resolved     │ ← File name + media type
//!        └────────┬────────┘
//!                 │ raw path inside the root (otherwise 403 → Responded)
//!                 ▼
//!        ┌─────────────────┐
//!        │     Guarded     │ ← Unsupported media type → 415, nothing read
//!        └────────┬────────┘
//!                 ▼
//!        ┌─────────────────┐
//!        │      Read       │ ← File read; the accessor re-checks containment
//!        └────────┬────────┘
//!                 ▼
//!        ┌─────────────────┐
//!        │    Responded    │ ← Status line, headers, blank line, body
//!        └────────┬────────┘
//!                 ▼
//!               Closed
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resolver;
pub mod response;
pub mod writer;
