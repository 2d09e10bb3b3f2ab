//! Scripted transport for exercising service calls without a browser.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use super::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

pub use futures::executor::block_on;

type Reply = Result<HttpResponse, String>;

/// Replies are queued per (method, url); clones share the script and the
/// request log. Unscripted requests fail like a dropped connection.
#[derive(Clone, Default)]
pub struct FakeTransport {
    replies: Rc<RefCell<HashMap<(Method, String), VecDeque<Reply>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, url: &str, status: u16, body: &str) {
        self.push(
            method,
            url,
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, method: Method, url: &str, error: &str) {
        self.push(method, url, Err(error.to_string()));
    }

    fn push(&self, method: Method, url: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let key = (request.method, request.url.clone());
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(format!("no scripted reply for {} {}", key.0, key.1)))
    }
}
