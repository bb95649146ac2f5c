//! Shared test helpers

#![allow(dead_code)]

use std::env;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use wedos_dns_provider::{Credentials, WedosClient, create_solver, Dns01Solver, WapiConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Match, Mock, MockServer, Request, Respond, ResponseTemplate};

pub const TEST_USER: &str = "user@example.com";
pub const TEST_SECRET: &str = "hunter2";
pub const WAPI_PATH: &str = "/wapi/json";

/// Return early when a required environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: {} is not set", $var);
                return;
            }
        )+
    };
}

/// Assert that a `Result` is `Ok` and yield the inner value.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

// ============ Mock WAPI ============

/// Decode the JSON envelope carried in the `request` form field.
pub fn decode_envelope(request: &Request) -> Option<Value> {
    url::form_urlencoded::parse(&request.body)
        .find(|(key, _)| key == "request")
        .and_then(|(_, value)| serde_json::from_str(&value).ok())
}

/// Matches WAPI calls by command name.
pub struct CommandIs(pub &'static str);

impl Match for CommandIs {
    fn matches(&self, request: &Request) -> bool {
        decode_envelope(request).is_some_and(|env| env["request"]["command"] == self.0)
    }
}

/// `{"response": {"code": code, "result": ..., "data": data}}`
pub fn wapi_body(code: u32, data: Option<Value>) -> Value {
    let mut response = json!({
        "code": code,
        "result": if code < 2000 { "OK" } else { "Error" },
        "timestamp": 1_700_000_000,
        "svTRID": "test-trid",
    });
    if let Some(data) = data {
        response["data"] = data;
    }
    json!({ "response": response })
}

/// A POST to the WAPI path with a form body.
pub fn wapi_call(command: &'static str) -> wiremock::MockBuilder {
    Mock::given(method("POST"))
        .and(path(WAPI_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(CommandIs(command))
}

/// Mount a canned reply for one command.
pub async fn mount_reply(server: &MockServer, command: &'static str, code: u32, data: Option<Value>) {
    wapi_call(command)
        .respond_with(ResponseTemplate::new(200).set_body_json(wapi_body(code, data)))
        .mount(server)
        .await;
}

/// The `request` objects the server received, in order.
pub async fn received_envelopes(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(decode_envelope)
        .map(|env| env["request"].clone())
        .collect()
}

/// Command names the server received, in order.
pub async fn received_commands(server: &MockServer) -> Vec<String> {
    received_envelopes(server)
        .await
        .iter()
        .map(|req| req["command"].as_str().unwrap_or_default().to_string())
        .collect()
}

pub fn endpoint(server: &MockServer) -> String {
    format!("{}{WAPI_PATH}", server.uri())
}

pub fn client_for(server: &MockServer) -> WedosClient {
    WedosClient::builder(TEST_USER, TEST_SECRET)
        .endpoint(endpoint(server))
        .timeout_secs(2)
        .connect_timeout_secs(1)
        .build()
        .expect("client should build")
}

// ============ Stateful fake ============

/// In-memory WAPI that stages rows until commit, like the real service.
#[derive(Clone, Default)]
pub struct FakeWapi {
    state: Arc<Mutex<FakeZone>>,
    next_id: Arc<AtomicU64>,
}

#[derive(Default)]
struct FakeZone {
    published: Vec<Value>,
    staged: Option<Vec<Value>>,
}

impl FakeWapi {
    pub fn with_rows(rows: Vec<Value>) -> Self {
        let fake = Self::default();
        fake.next_id.store(1000, Ordering::SeqCst);
        if let Ok(mut zone) = fake.state.lock() {
            zone.published = rows;
        }
        fake
    }

    pub async fn mount(&self, server: &MockServer) {
        Mock::given(method("POST"))
            .and(path(WAPI_PATH))
            .respond_with(self.clone())
            .mount(server)
            .await;
    }

    /// Rows visible after the last commit.
    pub fn published(&self) -> Vec<Value> {
        self.state
            .lock()
            .map(|zone| zone.published.clone())
            .unwrap_or_default()
    }

    pub fn has_staged_changes(&self) -> bool {
        self.state.lock().is_ok_and(|zone| zone.staged.is_some())
    }
}

impl Respond for FakeWapi {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Some(envelope) = decode_envelope(request) else {
            return ResponseTemplate::new(400);
        };
        let req = &envelope["request"];
        let data = &req["data"];
        let Ok(mut zone) = self.state.lock() else {
            return ResponseTemplate::new(500);
        };

        let body = match req["command"].as_str().unwrap_or_default() {
            "dns-rows-list" => {
                let rows = zone.published.clone();
                if rows.is_empty() {
                    wapi_body(1000, Some(json!([])))
                } else {
                    wapi_body(1000, Some(json!({ "row": rows })))
                }
            }
            "dns-row-add" => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let row = json!({
                    "ID": id.to_string(),
                    "name": data["name"],
                    "ttl": data["ttl"].to_string(),
                    "rdtype": data["type"],
                    "rdata": data["rdata"],
                    "changed_date": "2024-01-15 14:30:00",
                    "author_comment": "",
                });
                let mut staged = zone.staged.take().unwrap_or_else(|| zone.published.clone());
                staged.push(row);
                zone.staged = Some(staged);
                wapi_body(1000, None)
            }
            "dns-row-delete" => {
                let target = data["row_id"].clone();
                let mut staged = zone.staged.take().unwrap_or_else(|| zone.published.clone());
                let before = staged.len();
                staged.retain(|row| row["ID"] != target);
                let found = staged.len() != before;
                zone.staged = Some(staged);
                if found {
                    wapi_body(1000, None)
                } else {
                    wapi_body(2221, None)
                }
            }
            "dns-domain-commit" => {
                if let Some(staged) = zone.staged.take() {
                    zone.published = staged;
                }
                wapi_body(1000, None)
            }
            "ping" => wapi_body(1000, None),
            _ => wapi_body(2000, None),
        };

        ResponseTemplate::new(200).set_body_json(body)
    }
}

// ============ Live context ============

/// Unique TXT value for a test run.
pub fn generate_test_token() -> String {
    format!("wedos-dns-provider-test-{}", uuid::Uuid::new_v4())
}

/// Live test context: solver, raw client and the test zone.
pub struct TestContext {
    pub solver: Arc<dyn Dns01Solver>,
    pub client: WedosClient,
    pub domain: String,
}

impl TestContext {
    /// Build from `WEDOS_USER`, `WEDOS_AUTH` and `TEST_DOMAIN`.
    pub fn wedos() -> Option<Self> {
        let user = env::var("WEDOS_USER").ok()?;
        let auth = env::var("WEDOS_AUTH").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let credentials = Credentials::new(user.clone(), auth.clone());
        let solver = create_solver(credentials, WapiConfig::default()).ok()?;
        let client = WedosClient::new(user, auth).ok()?;

        Some(Self {
            solver,
            client,
            domain,
        })
    }

    pub fn challenge_host(&self) -> String {
        format!("_acme-challenge.{}", self.domain)
    }
}
