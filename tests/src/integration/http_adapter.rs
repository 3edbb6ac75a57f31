//! # HTTP Adapter Flows
//!
//! `HttpSessionApi` against the fake server: status reflects the cookie
//! jar, rejected logins carry the server's reason, and broken responses map
//! onto the client error taxonomy.

#[cfg(test)]
mod tests {
    use session_ui::{
        ClientConfig, ClientError, Credentials, HttpSessionApi, LoginStatus, SessionApi,
        StatusSnapshot,
    };

    use crate::support::{FakeServer, COOKIE_NAME, PASSWORD, USERNAME};

    fn client_for(base_url: &str) -> HttpSessionApi {
        HttpSessionApi::new(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_status_without_cookie() {
        let server = FakeServer::start().await;
        let api = client_for(&server.base_url());

        let snapshot = api.status().await.unwrap();
        assert_eq!(snapshot, StatusSnapshot::anonymous(false));
        assert!(api.cookie_header().is_none());
    }

    #[tokio::test]
    async fn test_login_sets_session_cookie() {
        let server = FakeServer::start().await;
        let api = client_for(&server.base_url());

        let status = api.login(&Credentials::new(USERNAME, PASSWORD)).await.unwrap();
        assert_eq!(status, LoginStatus::Accepted);

        let header = api.cookie_header().unwrap();
        assert!(header.starts_with(&format!("{}=", COOKIE_NAME)));

        let snapshot = api.status().await.unwrap();
        assert!(snapshot.authenticated);
        assert!(snapshot.cookie_present);
        assert_eq!(snapshot.session_id.as_deref().map(str::len), Some(16));
    }

    #[tokio::test]
    async fn test_rejected_login_reports_reason() {
        let server = FakeServer::start().await;
        let api = client_for(&server.base_url());

        let status = api.login(&Credentials::new(USERNAME, "wrong")).await.unwrap();
        assert_eq!(
            status,
            LoginStatus::Rejected {
                status: 401,
                reason: Some("Invalid credentials".to_string()),
            }
        );
        assert!(api.cookie_header().is_none());
        assert_eq!(server.session_count(), 0);
    }

    #[tokio::test]
    async fn test_logout_deletes_cookie() {
        let server = FakeServer::start().await;
        let api = client_for(&server.base_url());

        api.login(&Credentials::new(USERNAME, PASSWORD)).await.unwrap();
        api.logout().await.unwrap();

        assert!(api.cookie_header().is_none());
        assert_eq!(server.session_count(), 0);
        assert_eq!(api.status().await.unwrap(), StatusSnapshot::anonymous(false));
    }

    #[tokio::test]
    async fn test_expired_session_keeps_cookie() {
        let server = FakeServer::start().await;
        let api = client_for(&server.base_url());

        api.login(&Credentials::new(USERNAME, PASSWORD)).await.unwrap();
        server.expire_sessions();

        assert_eq!(api.status().await.unwrap(), StatusSnapshot::anonymous(true));
    }

    #[tokio::test]
    async fn test_malformed_status_is_parse_error() {
        let server = FakeServer::start().await;
        server.set_malformed_status(true);
        let api = client_for(&server.base_url());

        let result = api.status().await;
        assert!(matches!(result, Err(ClientError::Parse(_))));
    }

    #[tokio::test]
    async fn test_closed_port_is_transport_error() {
        // Grab a free port, then release it
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let api = client_for(&format!("http://127.0.0.1:{}", port));

        let result = api.login(&Credentials::new(USERNAME, PASSWORD)).await;
        assert!(matches!(
            result,
            Err(ClientError::Connection(_)) | Err(ClientError::Http(_))
        ));
    }
}
