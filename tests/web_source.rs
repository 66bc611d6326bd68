use factcheck_dashboard::error::FetchError;
use factcheck_dashboard::models::{RecordId, Verdict};
use factcheck_dashboard::pipeline::{FactSource, FetchStatus, ResultStore, WebFactSource};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// Serve exactly one canned HTTP response on an ephemeral port.
async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
    });
    Url::parse(&format!("http://{addr}/dashboard/fact-checks/")).unwrap()
}

const BODY: &str = r#"[
    {"id": 1, "query_preview": "هل الأرض كروية؟", "case": "حقيقي", "talk": "نعم"},
    {"id": 2, "query_preview": "claim two", "case": "زائف", "talk": "no"},
    {"id": "x3", "query_preview": "claim three", "case": "unknown", "talk": "?"}
]"#;

#[tokio::test]
async fn ok_response_decodes_in_order() {
    let url = serve_once("200 OK", BODY).await;
    let source = WebFactSource::new(url).unwrap();
    let set = source.fetch().await.unwrap();

    assert_eq!(set.len(), 3);
    assert_eq!(set.get(0).unwrap().id, RecordId::Number(1));
    assert_eq!(set.get(0).unwrap().verdict(), Some(Verdict::True));
    assert_eq!(set.get(2).unwrap().id, RecordId::from("x3"));
    assert_eq!(set.get(2).unwrap().verdict(), None);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let url = serve_once("503 Service Unavailable", "{}").await;
    let source = WebFactSource::new(url).unwrap();
    let err = source.fetch().await.unwrap_err();
    match err {
        FetchError::Status(code) => assert_eq!(code.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_shape_failure() {
    let url = serve_once("200 OK", r#"{"detail": "not a list"}"#).await;
    let source = WebFactSource::new(url).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Shape(_)), "got {err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/")).unwrap();
    let source = WebFactSource::new(url).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn store_folds_http_failure_into_failed_status() {
    let url = serve_once("500 Internal Server Error", "oops").await;
    let mut store = ResultStore::new(Arc::new(WebFactSource::new(url).unwrap()));
    store.load().await;
    match store.status() {
        FetchStatus::Failed { message, stale } => {
            assert!(message.contains("500"), "message {message:?}");
            assert!(stale.is_empty());
        }
        other => panic!("unexpected status {other:?}"),
    }
}
