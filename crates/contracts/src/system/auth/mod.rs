use serde::{Deserialize, Serialize};

use crate::shared::lenient;

/// API path segment of the login endpoint
pub const LOGIN_PATH: &str = "login";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `data` of a successful login
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "lenient::string")]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_with_user() {
        let r: LoginResponse = serde_json::from_str(
            r#"{"token":"abc.def","user":{"id":1,"name":"Admin","email":"admin@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(r.token, "abc.def");
        assert_eq!(r.user.unwrap().id, "1");
    }
}
