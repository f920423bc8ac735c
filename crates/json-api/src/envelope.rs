//! Response envelopes carrying a business `code` next to the payload.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use crate::observability::observe_envelope_failure;

/// Code of every successful envelope except login.
pub(crate) const SUCCESS: u16 = 1000;

/// `{"code": .., "msg": ..}`
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageEnvelope {
    pub code: u16,
    pub msg: Option<String>,
}

impl MessageEnvelope {
    pub(crate) fn success(msg: Option<&str>) -> Self {
        Self {
            code: SUCCESS,
            msg: msg.map(str::to_string),
        }
    }

    /// A failed operation; counted in the envelope failure metric.
    pub(crate) fn failure(operation: &str, code: u16, msg: &str) -> Self {
        observe_envelope_failure(operation, code);

        Self {
            code,
            msg: Some(msg.to_string()),
        }
    }
}
