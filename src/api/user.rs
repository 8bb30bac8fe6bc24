//! `POST /user`.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::extract::ValidJson;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub age: i64,
    pub address: String,
    pub friend_names: Vec<String>,
}

/// Echo of a user record.
///
/// The `friens` key is part of the published wire format; clients depend on
/// it, so it is not renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEcho {
    pub name: String,
    #[serde(rename = "friens")]
    pub friend_names: Vec<String>,
}

impl From<UserRecord> for UserEcho {
    fn from(user: UserRecord) -> Self {
        Self {
            name: user.name,
            friend_names: user.friend_names,
        }
    }
}

pub async fn create_user(ValidJson(user): ValidJson<UserRecord>) -> Json<UserEcho> {
    tracing::debug!(name = %user.name, friends = user.friend_names.len(), "Echoing user");
    Json(user.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_echo_keeps_wire_key() {
        let user: UserRecord = serde_json::from_value(json!({
            "name": "Ann",
            "age": 30,
            "address": "X",
            "friend_names": ["Bo", "Cy"],
        }))
        .unwrap();

        let echo = serde_json::to_value(UserEcho::from(user)).unwrap();
        assert_eq!(echo, json!({ "name": "Ann", "friens": ["Bo", "Cy"] }));
    }
}
