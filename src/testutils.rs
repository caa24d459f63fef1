use std::sync::{Arc, Mutex};

use axum::{
    extract::RawQuery,
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use url::Url;

const MOCK_PATH: &str = "/v1/cryptocurrency/listings/latest";

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub headers: HeaderMap,
    pub query: Option<String>,
}

/// A throwaway upstream that answers every GET with a fixed status and body
/// and records what it received.
pub struct MockUpstream {
    pub url: Url,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }
}

pub async fn start_mock_upstream(status: StatusCode, body: &'static str) -> MockUpstream {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();

    let app = Router::new().route(
        MOCK_PATH,
        get(move |headers: HeaderMap, RawQuery(query): RawQuery| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(RecordedRequest { headers, query });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream {
        url: Url::parse(&format!("http://{}{}", addr, MOCK_PATH)).unwrap(),
        recorded,
    }
}

/// URL of a local port nothing is listening on.
pub async fn closed_port_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}{}", addr, MOCK_PATH)).unwrap()
}
