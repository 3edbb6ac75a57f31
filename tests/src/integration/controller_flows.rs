//! # Controller Flows
//!
//! `SessionController` driving a `DocumentView` over real HTTP: the
//! section toggles, the poll loop against a live cookie session, and the
//! notices shown for failed logins.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use session_ui::adapters::{
        AUTH_STATUS, COOKIE_STATUS, LOGIN_SECTION, PASSWORD_INPUT, SESSION_ID, STATUS_SECTION,
        USERNAME_INPUT,
    };
    use session_ui::{
        ClientConfig, DocumentView, HttpSessionApi, LoginOutcome, SessionController,
        SessionView, TickOutcome,
    };

    use crate::support::{FakeServer, PASSWORD, USERNAME};

    type Controller = SessionController<HttpSessionApi, DocumentView>;

    fn controller_for(server: &FakeServer, logged_in: bool) -> (Controller, Arc<DocumentView>) {
        let api = HttpSessionApi::new(&ClientConfig {
            base_url: server.base_url(),
            ..ClientConfig::default()
        })
        .unwrap();
        let view = Arc::new(DocumentView::new(logged_in));
        (SessionController::new(Arc::new(api), view.clone()), view)
    }

    fn fill_login(view: &DocumentView, username: &str, password: &str) {
        view.set_input_value(USERNAME_INPUT, username);
        view.set_input_value(PASSWORD_INPUT, password);
    }

    /// Wait until `check` holds, up to two seconds.
    async fn eventually(check: impl Fn() -> bool) -> bool {
        for _ in 0..100 {
            if check() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        check()
    }

    #[tokio::test]
    async fn test_login_poll_logout_cycle() {
        let server = FakeServer::start().await;
        let (mut controller, view) = controller_for(&server, false);
        assert!(!controller.initialize());

        fill_login(&view, USERNAME, PASSWORD);
        assert_eq!(controller.login().await, LoginOutcome::LoggedIn);

        let doc = view.document();
        assert!(doc.is_hidden(LOGIN_SECTION));
        assert!(!doc.is_hidden(STATUS_SECTION));
        assert!(controller.is_refreshing());

        // The immediate tick renders the live session
        assert!(eventually(|| view.document().text(AUTH_STATUS) == "Yes").await);
        let doc = view.document();
        assert_eq!(doc.class_name(AUTH_STATUS), "value ok");
        assert_eq!(doc.text(SESSION_ID).len(), 16);
        assert_eq!(doc.text(COOKIE_STATUS), "Yes");
        assert_eq!(doc.class_name(COOKIE_STATUS), "value ok");

        controller.logout().await.unwrap();

        let doc = view.document();
        assert!(!doc.is_hidden(LOGIN_SECTION));
        assert!(doc.is_hidden(STATUS_SECTION));
        assert!(!controller.is_refreshing());
        assert!(view.notices().is_empty());
        assert_eq!(server.session_count(), 0);
    }

    #[tokio::test]
    async fn test_wrong_password_shows_notice() {
        let server = FakeServer::start().await;
        let (mut controller, view) = controller_for(&server, false);

        fill_login(&view, USERNAME, "nope");
        let outcome = controller.login().await;

        assert_eq!(outcome, LoginOutcome::Rejected { status: 401 });
        assert_eq!(view.notices(), vec!["Login failed".to_string()]);
        assert!(!view.is_status_section_visible());
        assert!(!controller.is_refreshing());
        assert_eq!(server.status_calls(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_server_shows_error_notice() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let api = HttpSessionApi::new(&ClientConfig {
            base_url: format!("http://127.0.0.1:{}", port),
            ..ClientConfig::default()
        })
        .unwrap();
        let view = Arc::new(DocumentView::new(false));
        let mut controller = SessionController::new(Arc::new(api), view.clone());

        fill_login(&view, USERNAME, PASSWORD);
        let outcome = controller.login().await;

        assert!(matches!(outcome, LoginOutcome::Failed { .. }));
        let notices = view.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].starts_with("Login error: "));
        assert!(!view.is_status_section_visible());
    }

    #[tokio::test]
    async fn test_expired_session_renders_warnings() {
        let server = FakeServer::start().await;
        let (mut controller, view) = controller_for(&server, false);

        fill_login(&view, USERNAME, PASSWORD);
        controller.login().await;
        controller.stop_refresh_loop();

        server.expire_sessions();
        let outcome = controller.refresh_status().await;
        assert!(outcome.is_rendered());

        let doc = view.document();
        assert_eq!(doc.text(AUTH_STATUS), "No");
        assert_eq!(doc.class_name(AUTH_STATUS), "value warn");
        assert_eq!(doc.text(SESSION_ID), "--");
        assert_eq!(doc.text(COOKIE_STATUS), "Yes");

        // Status section stays up; only logout toggles it back
        assert!(view.is_status_section_visible());
    }

    #[tokio::test]
    async fn test_malformed_status_keeps_last_display() {
        let server = FakeServer::start().await;
        let (mut controller, view) = controller_for(&server, false);

        fill_login(&view, USERNAME, PASSWORD);
        controller.login().await;
        controller.stop_refresh_loop();
        assert!(controller.refresh_status().await.is_rendered());
        let before = view.document();

        server.set_malformed_status(true);
        let outcome = controller.refresh_status().await;

        assert!(matches!(outcome, TickOutcome::Skipped(_)));
        assert_eq!(view.document(), before);
        assert!(view.notices().is_empty());
    }

    #[tokio::test]
    async fn test_reload_with_status_visible_resumes_polling() {
        let server = FakeServer::start().await;
        let (mut controller, view) = controller_for(&server, true);

        assert!(controller.initialize());
        assert!(controller.is_refreshing());

        // No cookie in this client: the tick reports logged out
        assert!(eventually(|| view.document().text(AUTH_STATUS) == "No").await);
        assert_eq!(view.document().text(COOKIE_STATUS), "No (expired)");
    }
}
