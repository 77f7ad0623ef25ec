#![allow(deprecated)]
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use assert_cmd::Command;
use predicates::prelude::*;
use rustls::pki_types::pem::PemObject;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ServerConfig, ServerConnection, StreamOwned};
use tempfile::TempDir;

const BODY: &str = r#"{"batchcomplete":"","query":{"pages":{"9":{"pageid":9,"title":"Intranet",
    "extract":"The intranet wiki runs on a self-signed certificate.","pagelanguage":"en",
    "canonicalurl":"https://wiki.internal/wiki/Intranet"}}}}"#;

fn bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wiki").unwrap();
    cmd.env_remove("WIKI_LANG")
        .env_remove("WIKI_URL")
        .env_remove("RUST_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Serves one HTTPS connection with a self-signed certificate, answering `BODY`.
fn serve_self_signed() -> (u16, JoinHandle<()>) {
    let certs = CertificateDer::pem_file_iter(fixture("self_signed.cert.pem"))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let key = PrivateKeyDer::from_pem_file(fixture("self_signed.key.pem")).unwrap();
    let config = ServerConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()
    .unwrap()
    .with_no_client_auth()
    .with_single_cert(certs, key)
    .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let conn = ServerConnection::new(Arc::new(config)).unwrap();
        let mut tls = StreamOwned::new(conn, stream);

        // A rejected handshake surfaces here as a read error.
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match tls.read(&mut buf) {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{BODY}",
            BODY.len()
        );
        let _ = tls.write_all(response.as_bytes());
        tls.conn.send_close_notify();
        let _ = tls.flush();
    });

    (port, handle)
}

#[test]
fn self_signed_certificate_is_rejected_by_default() {
    let home = TempDir::new().unwrap();
    let (port, server) = serve_self_signed();

    let out = bin(&home)
        .args([
            "--json",
            "--timeout-secs",
            "5",
            "-u",
            &format!("https://127.0.0.1:{port}/w/api.php"),
            "Intranet",
        ])
        .output()
        .unwrap();
    server.join().unwrap();

    assert_eq!(out.status.code(), Some(3));
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&out.stdout).trim()).unwrap();
    assert_eq!(parsed["ok"], serde_json::json!(false));
    assert_eq!(parsed["code"], serde_json::json!("REQUEST_FAILED"));
}

#[test]
fn no_check_certificate_accepts_self_signed() {
    let home = TempDir::new().unwrap();
    let (port, server) = serve_self_signed();

    bin(&home)
        .args([
            "-s",
            "--no-check-certificate",
            "--timeout-secs",
            "5",
            "-u",
            &format!("https://127.0.0.1:{port}/w/api.php"),
            "Intranet",
        ])
        .assert()
        .success()
        .stdout("The intranet wiki runs on a self-signed certificate.\n")
        .stderr(predicate::str::contains("verification is disabled"));
    server.join().unwrap();
}
