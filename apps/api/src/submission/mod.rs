//! Submission proxy — receives the browser's candidate payload, rewrites the
//! answers against the vendor's authoritative question ids, and forwards the
//! result to candidate creation.

pub mod handlers;
pub mod remap;
