use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EMAIL: &str = "alice@example.com";
pub const PASSWORD: &str = "secret123";

/// Base URL of a mock backend.
pub fn api_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

/// Run the CLI with an isolated HOME so the session file lives in `home`.
///
/// The binary is run on a blocking thread so the mock server keeps serving.
pub async fn run_cli(args: &[&str], home: &Path, api: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pix"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("PIX_API_URL", api);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("PIX_PASSWORD");
    cmd.env_remove("RUST_LOG");

    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute CLI"))
        .await
        .expect("CLI task panicked")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(args: &[&str], home: &Path, api: &str) -> String {
    let output = run_cli(args, home, api).await;
    if !output.status.success() {
        panic!(
            "CLI command failed: {:?}\nstdout: {}\nstderr: {}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stdout and stderr together.
pub async fn run_cli_failure(args: &[&str], home: &Path, api: &str) -> String {
    let output = run_cli(args, home, api).await;
    if output.status.success() {
        panic!(
            "CLI command should have failed: {:?}\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
    }
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

/// Where the session file ends up for an isolated HOME on Linux.
pub fn session_file(home: &Path) -> PathBuf {
    home.join("data").join("pix").join("session.json")
}

/// Mount a login endpoint issuing `token`.
pub async fn mock_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
        .mount(server)
        .await;
}

/// Mount a PIX endpoint answering for `token`.
pub async fn mock_pix(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/pix"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chave_pix": "+5511999999999",
            "valor": "0.01",
            "codigo_copia_cola": "Simulado PIX: Chave +5511999999999 | Valor R$0.01"
        })))
        .mount(server)
        .await;
}
