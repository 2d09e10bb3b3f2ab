//! Data contracts shared between the catalog admin frontend and the
//! catalog REST API: record DTOs, form payloads and response envelopes.

pub mod domain;
pub mod shared;
pub mod system;
