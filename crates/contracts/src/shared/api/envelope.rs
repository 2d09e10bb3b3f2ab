use serde::{Deserialize, Serialize};

use crate::shared::lenient;

/// Success envelope: every payload is wrapped as `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// `data` of a create/update/delete response. Only the human readable
/// message is used by the client; the echoed record is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationAck {
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: String,
}
