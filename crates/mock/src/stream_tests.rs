// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use futures::StreamExt;

#[tokio::test]
async fn test_chunks_arrive_in_order() {
    let body = StreamBody::from_chunks(vec![b"ab".to_vec(), b"cd".to_vec(), b"e".to_vec()]);

    let chunks: Vec<Vec<u8>> = body.open().map(|c| c.unwrap()).collect().await;
    assert_eq!(chunks, vec![b"ab".to_vec(), b"cd".to_vec(), b"e".to_vec()]);
}

#[tokio::test]
async fn test_each_open_yields_a_fresh_stream() {
    let body = StreamBody::from_text("payload");

    let first = body.collect().await.unwrap();
    let second = body.collect().await.unwrap();

    // The second reader must not see an exhausted stream
    assert_eq!(first, b"payload");
    assert_eq!(second, b"payload");
}

#[tokio::test]
async fn test_clones_share_content_but_not_position() {
    let body = StreamBody::from_chunks(vec![b"xyz".to_vec()]);
    let other = body.clone();

    let mut stream = body.open();
    assert_eq!(stream.next().await.unwrap().unwrap(), b"xyz".to_vec());
    assert!(stream.next().await.is_none());

    assert_eq!(other.collect().await.unwrap(), b"xyz");
}

#[test]
fn test_len_counts_all_chunks() {
    let body = StreamBody::from_chunks(vec![b"ab".to_vec(), b"cde".to_vec()]);
    assert_eq!(body.len(), 5);
    assert!(!body.is_empty());
    assert!(StreamBody::from_chunks(Vec::new()).is_empty());
}
