//! Stub crawler service for dispatcher tests.
//!
//! Serves `POST /crawl/:platform` on an ephemeral local port, records every
//! request path, and holds each response until the test releases it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Router,
};
use tokio::sync::{mpsc, watch};

#[derive(Clone)]
struct StubState {
    hits: Arc<Mutex<Vec<String>>>,
    hit_tx: mpsc::UnboundedSender<String>,
    release_rx: watch::Receiver<bool>,
    status: StatusCode,
}

pub struct CrawlerStub {
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
    hit_rx: mpsc::UnboundedReceiver<String>,
    release_tx: watch::Sender<bool>,
}

impl CrawlerStub {
    /// Start a stub that answers `status` once released.
    pub async fn start(status: StatusCode) -> Self {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let (hit_tx, hit_rx) = mpsc::unbounded_channel();
        let (release_tx, release_rx) = watch::channel(false);

        let state = StubState {
            hits: hits.clone(),
            hit_tx,
            release_rx,
            status,
        };

        let app = Router::new()
            .route("/crawl/:platform", post(crawl_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub crawler");
        let addr = listener.local_addr().expect("stub crawler address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
            hit_rx,
            release_tx,
        }
    }

    /// Wait for the next request to arrive and return its path.
    pub async fn next_hit(&mut self) -> String {
        tokio::time::timeout(Duration::from_secs(5), self.hit_rx.recv())
            .await
            .expect("timed out waiting for crawler request")
            .expect("stub crawler stopped")
    }

    /// Let every pending and future request complete.
    pub fn release(&self) {
        let _ = self.release_tx.send(true);
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

async fn crawl_handler(
    State(mut state): State<StubState>,
    Path(platform): Path<String>,
) -> StatusCode {
    let path = format!("/crawl/{}", platform);
    state.hits.lock().unwrap().push(path.clone());
    let _ = state.hit_tx.send(path);

    while !*state.release_rx.borrow() {
        if state.release_rx.changed().await.is_err() {
            break;
        }
    }
    state.status
}
