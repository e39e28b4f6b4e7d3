use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use suggest_common::company::{companies_from_file, fetch_companies};
use suggest_common::{CompanyStore, SuggestError};

const COMPANIES_JSON: &str = r#"[
    {"name": "Apple Inc.", "ticker": "AAPL", "website": "www.apple.com"},
    {"name": "Alphabet Inc.", "ticker": "GOOGL"},
    {"name": "Amazon.com", "ticker": "AMZN"}
]"#;

/// Serve a single canned HTTP response on an ephemeral port and return its base URL.
fn serve_once(status: &str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status = status.to_string();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

#[test]
fn embedded_file_loads_in_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(COMPANIES_JSON.as_bytes()).unwrap();

    let companies = companies_from_file(file.path()).unwrap();

    let tickers: Vec<&str> = companies.iter().map(|c| c.ticker.as_str()).collect();
    assert_eq!(tickers, ["AAPL", "GOOGL", "AMZN"]);
    assert_eq!(companies[0].website.as_deref(), Some("apple.com"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = companies_from_file(&dir.path().join("companies.json")).unwrap_err();
    assert!(matches!(err, SuggestError::Io(_)));
}

#[test]
fn endpoint_and_file_are_interchangeable() {
    let base = serve_once("200 OK", COMPANIES_JSON);
    let fetched = fetch_companies(&format!("{}/api/companies", base)).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(COMPANIES_JSON.as_bytes()).unwrap();
    let embedded = companies_from_file(file.path()).unwrap();

    assert_eq!(fetched, embedded);
}

#[test]
fn server_error_status_is_http_error() {
    let base = serve_once("500 Internal Server Error", "[]");
    let err = fetch_companies(&format!("{}/api/companies", base)).unwrap_err();
    assert!(matches!(err, SuggestError::Http(_)));
}

#[test]
fn background_fetch_fills_the_store() {
    let base = serve_once("200 OK", COMPANIES_JSON);
    let store = CompanyStore::new();

    store.spawn_fetch(&format!("{}/api/companies", base)).join().unwrap();

    assert_eq!(store.companies().len(), 3);
}

#[test]
fn unparsable_body_leaves_store_empty() {
    let base = serve_once("200 OK", "<html>not json</html>");
    let store = CompanyStore::new();

    store.spawn_fetch(&format!("{}/api/companies", base)).join().unwrap();

    assert!(store.is_loaded());
    assert!(store.companies().is_empty());
}
