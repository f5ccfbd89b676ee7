use serde::{Deserialize, Serialize};

/// Token issued by `/token`, persisted between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub base_url: String,
    pub email: String,
    pub access_token: String,
    pub token_type: String,
    pub saved_at: String,
}
