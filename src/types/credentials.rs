use serde::Deserialize;
use serde_json::{Map, Value};

/// Signup/signin request body.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Decode a JSON object body. Arrays and other non-object values are rejected,
    /// even though the derived `Deserialize` would accept a two-element sequence.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let map: Map<String, Value> = serde_json::from_slice(body)?;
        Credentials::deserialize(Value::Object(map))
    }
}
