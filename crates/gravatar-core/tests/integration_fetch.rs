//! Integration test: fetch against a local HTTP server.
//!
//! Covers the three outcomes of a fetch: image bytes, absent, and transport
//! failure.

mod common;

use common::avatar_server;
use gravatar_core::{FetchOutcome, GravatarError, ImageFetcher, TransportError};

fn jpeg_like_body() -> Vec<u8> {
    let mut body = vec![0xFF, 0xD8, 0xFF, 0xE0];
    body.extend((0u8..200).cycle().take(4 * 1024));
    body
}

#[test]
fn present_image_returns_bytes() {
    let body = jpeg_like_body();
    let base = avatar_server::start(body.clone());
    let outcome = ImageFetcher::new()
        .fetch(&format!("{base}/avatar/present.jpg?s=100&d=404"))
        .unwrap();
    match outcome {
        FetchOutcome::Image(bytes) => {
            assert!(!bytes.is_empty());
            assert_eq!(bytes, body);
        }
        FetchOutcome::Absent => panic!("expected image bytes"),
    }
}

#[test]
fn not_found_is_absent_not_error() {
    let base = avatar_server::start(jpeg_like_body());
    let outcome = ImageFetcher::new()
        .fetch(&format!("{base}/avatar/0123456789abcdef0123456789abcdef.jpg?d=404"))
        .unwrap();
    assert_eq!(outcome, FetchOutcome::Absent);
}

#[test]
fn gone_is_absent() {
    let base = avatar_server::start(jpeg_like_body());
    let outcome = ImageFetcher::new()
        .fetch(&format!("{base}/avatar/gone.jpg"))
        .unwrap();
    assert!(outcome.is_absent());
}

#[test]
fn redirect_is_followed() {
    let body = jpeg_like_body();
    let base = avatar_server::start(body.clone());
    let outcome = ImageFetcher::new()
        .fetch(&format!("{base}/avatar/moved.jpg"))
        .unwrap();
    assert_eq!(outcome.into_image(), Some(body));
}

#[test]
fn server_error_is_transport_failure() {
    let base = avatar_server::start(jpeg_like_body());
    let url = format!("{base}/avatar/broken.jpg");
    let err = ImageFetcher::new().fetch(&url).unwrap_err();
    match err {
        GravatarError::TransportFailure { url: failed, source } => {
            assert_eq!(failed, url);
            assert!(matches!(source, TransportError::Http(500)));
        }
        other => panic!("expected TransportFailure, got {other:?}"),
    }
}

#[test]
fn connection_refused_is_transport_failure() {
    let err = ImageFetcher::new()
        .fetch(&avatar_server::closed_port_url())
        .unwrap_err();
    match err {
        GravatarError::TransportFailure { source, .. } => {
            assert!(matches!(source, TransportError::Curl(_)));
        }
        other => panic!("expected TransportFailure, got {other:?}"),
    }
}

#[test]
fn parallel_fetches_are_independent() {
    let body = jpeg_like_body();
    let base = avatar_server::start(body.clone());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let base = base.clone();
            std::thread::spawn(move || {
                let path = if i % 2 == 0 { "present" } else { "missing" };
                ImageFetcher::new()
                    .fetch(&format!("{base}/avatar/{path}.jpg"))
                    .unwrap()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let outcome = h.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(outcome.into_image().as_deref(), Some(body.as_slice()));
        } else {
            assert!(outcome.is_absent());
        }
    }
}
