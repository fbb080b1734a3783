//! Shared test transport capturing outgoing requests.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use simpleaws_core::{RawResponse, Request, Transport};

/// A transport that records every request and replays canned responses.
pub(crate) struct MockTransport {
    requests: Mutex<Vec<Request>>,
    queued: Mutex<VecDeque<RawResponse>>,
    fallback: RawResponse,
}

impl MockTransport {
    /// A transport answering every request with the same 200 response.
    pub(crate) fn ok(body: &str, content_type: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            queued: Mutex::new(VecDeque::new()),
            fallback: Self::response(200, content_type, body),
        })
    }

    /// A transport answering with the given responses in order, then an
    /// empty 200.
    pub(crate) fn sequence(responses: Vec<RawResponse>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            queued: Mutex::new(responses.into()),
            fallback: Self::response(200, "text/xml", ""),
        })
    }

    /// Build a canned response.
    pub(crate) fn response(status: u16, content_type: &str, body: &str) -> RawResponse {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_owned(), content_type.to_owned());
        RawResponse {
            status,
            headers,
            body: body.to_owned(),
        }
    }

    /// The most recent request sent.
    pub(crate) fn last_request(&self) -> Request {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request was sent")
            .clone()
    }

    /// The request at `index`, in send order.
    pub(crate) fn request(&self, index: usize) -> Request {
        self.requests.lock().unwrap()[index].clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &Request) -> Result<RawResponse, anyhow::Error> {
        self.requests.lock().unwrap().push(request.clone());
        let queued = self.queued.lock().unwrap().pop_front();
        Ok(queued.unwrap_or_else(|| self.fallback.clone()))
    }
}
