use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use schedulix_client::{ApiClient, BearerSource, NoBearer};
use schedulix_core::{ClientOptions, ErrorKind, SchedulixError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

struct FixedBearer(&'static str);

impl BearerSource for FixedBearer {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Minimal HTTP stub: answers every connection with the given status and
/// body, and forwards each raw request head for inspection.
async fn stub_server(status: u16, body: &'static str) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let request = read_request(&mut socket).await;
                let _ = tx.send(request);

                let response = format!(
                    "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{addr}"), rx)
}

/// Read one full request: headers, plus the body the content-length
/// header promises.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        data.extend_from_slice(&buf[..n]);

        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&data[..pos]);
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if data.len() >= pos + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&data).to_string()
}

fn client_for(base_url: &str, bearer: Arc<dyn BearerSource>) -> ApiClient {
    let options = ClientOptions::builder()
        .base_url(base_url)
        .api_prefix("/api")
        .build();
    ApiClient::new(options, bearer).unwrap()
}

#[tokio::test]
async fn bearer_token_is_attached_when_present() {
    let (base_url, mut requests) =
        stub_server(200, r#"{"success":true,"data":{"ok":true}}"#).await;
    let client = client_for(&base_url, Arc::new(FixedBearer("tok-xyz")));

    client.get("/patients").await.unwrap();

    let head = requests.recv().await.unwrap();
    assert!(head.contains("authorization: Bearer tok-xyz") || head.contains("Authorization: Bearer tok-xyz"));
    assert!(head.starts_with("GET /api/patients"));
}

#[tokio::test]
async fn no_bearer_header_without_a_token() {
    let (base_url, mut requests) =
        stub_server(200, r#"{"success":true,"data":[]}"#).await;
    let client = client_for(&base_url, Arc::new(NoBearer));

    client.get("/patients").await.unwrap();

    let head = requests.recv().await.unwrap().to_lowercase();
    assert!(!head.contains("authorization:"));
}

#[tokio::test]
async fn unauthorized_fires_the_teardown_handler_before_rejecting() {
    let (base_url, _requests) =
        stub_server(401, r#"{"success":false,"message":"Session expired"}"#).await;
    let client = client_for(&base_url, Arc::new(FixedBearer("stale")));

    let torn_down = Arc::new(AtomicBool::new(false));
    let flag = torn_down.clone();
    client.set_unauthorized_handler(Arc::new(move || {
        flag.store(true, Ordering::SeqCst);
    }));

    let err = client.get("/appointments").await.unwrap_err();

    assert!(torn_down.load(Ordering::SeqCst));
    let err = SchedulixError::from_anyhow(&err).unwrap();
    assert_eq!(err.kind, ErrorKind::NotAuthenticated);
    assert_eq!(err.message, "Session expired");
}

#[tokio::test]
async fn validation_failures_carry_a_field_keyed_map() {
    let (base_url, _requests) = stub_server(
        422,
        r#"{"success":false,"message":"Validation failed","errors":[{"path":"email","msg":"Email is invalid"},{"param":"first_name","msg":"First name is required"}]}"#,
    )
    .await;
    let client = client_for(&base_url, Arc::new(NoBearer));

    let err = client
        .post("/patients", &serde_json::json!({"email": "nope"}))
        .await
        .unwrap_err();

    let err = SchedulixError::from_anyhow(&err).unwrap();
    assert_eq!(err.kind, ErrorKind::Unprocessable);
    assert_eq!(err.message, "Validation failed");
    let fields = err.field_errors().unwrap();
    assert_eq!(fields["email"], "Email is invalid");
    assert_eq!(fields["first_name"], "First name is required");
}

#[tokio::test]
async fn server_messages_survive_into_generic_failures() {
    let (base_url, _requests) = stub_server(
        500,
        r#"{"success":false,"message":"Something broke downstream"}"#,
    )
    .await;
    let client = client_for(&base_url, Arc::new(NoBearer));

    let err = client.get("/analytics/dashboard").await.unwrap_err();

    let err = SchedulixError::from_anyhow(&err).unwrap();
    assert_eq!(err.kind, ErrorKind::GeneralError);
    assert_eq!(err.message, "Something broke downstream");
}

#[tokio::test]
async fn an_unreachable_server_maps_to_unavailable() {
    // Bind-then-drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}"), Arc::new(NoBearer));
    let err = client.get("/patients").await.unwrap_err();

    let err = SchedulixError::from_anyhow(&err).unwrap();
    assert_eq!(err.kind, ErrorKind::Unavailable);
}
