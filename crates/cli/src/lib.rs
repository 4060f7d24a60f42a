//! Decode → dispatch → encode plumbing for the `transit-catalogue` binary,
//! split into a library target so its wire format can be exercised by
//! integration tests independently of `main`.

pub mod decode;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod render;
