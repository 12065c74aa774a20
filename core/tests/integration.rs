//! Live dispatch rounds against the mock hook target.
//!
//! # Design
//! Starts the mock server on a random port, then dispatches real HTTP
//! requests through `ReqwestTransport`. A second port that was bound and then
//! released stands in for a dead hook, so connection-refused failures are
//! exercised without touching the outside network.

use std::sync::Arc;

use hooker_core::call::{self, CallOptions};
use hooker_core::{parse_url, CallStatus, Dispatcher, Hook, Registry, Reporter, ReqwestTransport, Verb};
use mock_server::{Hit, Hits};

/// Start the mock server on an ephemeral port and return its base URL along
/// with the shared hit log.
async fn start_server() -> (String, Hits) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Hits::default();
    tokio::spawn(mock_server::run_with_hits(listener, hits.clone()));
    (format!("http://{addr}"), hits)
}

/// A local URL nobody is listening on.
fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

fn hook(url: &str, verb: Verb, name: &str) -> Hook {
    Hook::new(parse_url(url).unwrap(), verb).with_name(name)
}

fn dispatcher() -> Dispatcher {
    Dispatcher::new(Arc::new(ReqwestTransport::new()))
}

#[tokio::test(flavor = "multi_thread")]
async fn mixed_round_against_live_server() {
    let (base, hits) = start_server().await;
    let dead = dead_url();

    let hooks = vec![
        hook(&format!("{base}/"), Verb::Get, "root"),
        hook(&format!("{base}/status/404"), Verb::Post, "missing"),
        hook(&dead, Verb::Put, "dead"),
        hook(&format!("{base}/status/500"), Verb::Delete, "broken"),
        hook(&format!("{base}/redirect"), Verb::Get, "moved"),
    ];

    let outcomes = dispatcher().dispatch(&hooks, |_| {}).await;
    assert_eq!(outcomes.len(), 5);

    assert_eq!(
        outcomes[0].status,
        CallStatus::Success {
            status_text: "OK".to_string()
        }
    );
    assert_eq!(
        outcomes[1].status,
        CallStatus::Success {
            status_text: "Not Found".to_string()
        }
    );
    assert_eq!(outcomes[2].status, CallStatus::Failure);
    assert_eq!(outcomes[2].url, dead);
    assert_eq!(outcomes[2].verb, Verb::Put);
    assert_eq!(
        outcomes[3].status,
        CallStatus::Success {
            status_text: "Internal Server Error".to_string()
        }
    );
    assert!(outcomes[4].is_success());
    assert_eq!(outcomes[4].url, format!("{base}/"));

    for (i, outcome) in outcomes.iter().enumerate() {
        assert_eq!(outcome.index, i);
        assert_eq!(outcome.name, hooks[i].name);
    }

    // One request per live hook, plus the follow-up after the redirect.
    let mut seen = hits.read().await.clone();
    seen.sort_by(|a, b| (&a.path, &a.method).cmp(&(&b.path, &b.method)));
    let hit = |method: &str, path: &str| Hit {
        method: method.to_string(),
        path: path.to_string(),
    };
    assert_eq!(
        seen,
        vec![
            hit("GET", "/"),
            hit("GET", "/"),
            hit("GET", "/redirect"),
            hit("POST", "/status/404"),
            hit("DELETE", "/status/500"),
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn every_verb_reaches_the_server() {
    let (base, hits) = start_server().await;
    // CONNECT needs an authority-form target, so it is left out here.
    let verbs: Vec<Verb> = Verb::ALL
        .into_iter()
        .filter(|v| *v != Verb::Connect)
        .collect();
    let hooks: Vec<Hook> = verbs
        .iter()
        .map(|v| hook(&format!("{base}/"), *v, v.as_str()))
        .collect();

    let outcomes = dispatcher().dispatch(&hooks, |_| {}).await;

    assert!(outcomes.iter().all(|o| o.is_success()), "{outcomes:?}");
    let mut methods: Vec<String> = hits.read().await.iter().map(|h| h.method.clone()).collect();
    methods.sort();
    let mut expected: Vec<String> = verbs.iter().map(|v| v.to_string()).collect();
    expected.sort();
    assert_eq!(methods, expected);
}

#[tokio::test(flavor = "multi_thread")]
async fn table_rows_keep_registry_order_under_skewed_latency() {
    let (base, _) = start_server().await;
    let registry: Registry = [120, 0, 60, 30]
        .iter()
        .enumerate()
        .map(|(i, ms)| hook(&format!("{base}/delay/{ms}"), Verb::Get, &format!("slow-{i}")))
        .collect();

    let mut out = Vec::new();
    let outcomes = call::run(
        &dispatcher(),
        registry.hooks(),
        CallOptions::default(),
        Reporter::new(false),
        &mut out,
    )
    .await
    .unwrap();

    assert!(outcomes.iter().all(|o| o.is_success()));
    let table = String::from_utf8(out).unwrap();
    let positions: Vec<usize> = (0..4)
        .map(|i| table.find(&format!("slow-{i}")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{table}");
}

#[tokio::test(flavor = "multi_thread")]
async fn log_mode_prints_fail_for_dead_hook_only() {
    let (base, _) = start_server().await;
    let dead = dead_url();
    let hooks = vec![
        hook(&format!("{base}/"), Verb::Get, "alive"),
        hook(&dead, Verb::Get, "dead"),
    ];

    let mut out = Vec::new();
    let options = CallOptions {
        dry_run: false,
        log: true,
    };
    call::run(&dispatcher(), &hooks, options, Reporter::new(false), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort();
    assert_eq!(
        lines,
        vec![
            format!("0 - alive (GET) {base}/ - [ OK ]"),
            format!("1 - dead (GET) {dead} - [ FAIL ]"),
        ]
    );
}
