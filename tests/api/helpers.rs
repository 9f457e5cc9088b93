use std::future::IntoFuture;

use tokio::net::TcpListener;
use wiremock::MockServer;

use careerflow_backend::api;
use careerflow_backend::config::Config;
use careerflow_backend::mail::Mailer;
use careerflow_backend::state::AppState;

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
}

/// Launch the application in the background, with a mock server standing
/// in for the SendGrid API.
pub async fn spawn_app() -> TestApp {
    let email_server = MockServer::start().await;

    let config = Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        allowed_origin: "http://localhost:3000".parse().unwrap(),
        sendgrid_api_key: "SG.test-key".to_string(),
        sendgrid_base_url: email_server.uri(),
        mail_from: "careerflowsh@gmail.com".to_string(),
    };

    let mailer = Mailer::from_config(&config);
    let app = api::create_router(AppState::new(config, mailer));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let _ = tokio::spawn(axum::serve(listener, app).into_future());

    TestApp {
        address,
        email_server,
    }
}

impl TestApp {
    pub async fn post_welcome_email(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/send-welcome-email", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
