use contracts::system::auth::{LoginRequest, LoginResponse, LOGIN_PATH};

use crate::shared::service::client::decode;
use crate::shared::service::{HttpTransport, Method, Payload, ServiceClient, ServiceError, ServiceResult};
use crate::system::auth::storage::SessionStore;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Email atau password salah";

/// Exchange credentials for a bearer token.
///
/// A 401 here means wrong credentials, not an expired session.
pub async fn login<T, S>(
    client: &ServiceClient<T, S>,
    email: String,
    password: String,
) -> ServiceResult<LoginResponse>
where
    T: HttpTransport,
    S: SessionStore,
{
    let payload = Payload::json(&LoginRequest { email, password })?;
    let data = client
        .request(Method::Post, LOGIN_PATH, Some(payload))
        .await
        .map_err(|e| match e {
            ServiceError::TokenExpired => ServiceError::Api(INVALID_CREDENTIALS_MESSAGE.to_string()),
            other => other,
        })?;
    let response: LoginResponse = decode(data)?;
    if response.token.trim().is_empty() {
        return Err(ServiceError::Decode("login response has no token".to_string()));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::service::testing::{block_on, FakeTransport};
    use crate::system::auth::storage::MemorySession;

    fn client(transport: &FakeTransport) -> ServiceClient<FakeTransport, MemorySession> {
        ServiceClient::new(transport.clone(), MemorySession::default(), "http://api.test")
    }

    #[test]
    fn test_login_returns_token() {
        let transport = FakeTransport::new();
        transport.respond(
            Method::Post,
            "http://api.test/login",
            200,
            r#"{"data":{"token":"abc","user":{"id":1,"name":"Admin","email":"a@b.c"}}}"#,
        );
        let response =
            block_on(login(&client(&transport), "a@b.c".into(), "secret".into())).unwrap();
        assert_eq!(response.token, "abc");

        let sent = &transport.requests()[0];
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert!(sent.body.as_deref().unwrap().contains("\"email\":\"a@b.c\""));
    }

    #[test]
    fn test_unauthorized_means_bad_credentials() {
        let transport = FakeTransport::new();
        transport.respond(Method::Post, "http://api.test/login", 401, r#"{"message":"Unauthorized"}"#);
        let result = block_on(login(&client(&transport), "a@b.c".into(), "nope".into()));
        assert_eq!(
            result.unwrap_err(),
            ServiceError::Api(INVALID_CREDENTIALS_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let transport = FakeTransport::new();
        transport.respond(Method::Post, "http://api.test/login", 200, r#"{"data":{}}"#);
        let result = block_on(login(&client(&transport), "a@b.c".into(), "x".into()));
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }
}
