use gloo_net::http::Request;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request and hands back status and raw body.
/// `Err` is reserved for failures where no response arrived at all.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// Browser `fetch` via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (key, value)| b.header(key, value));

        let response = match request.body {
            Some(body) => {
                builder
                    .body(body)
                    .map_err(|e| format!("Failed to build request: {}", e))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| format!("Failed to send request: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;
        Ok(HttpResponse { status, body })
    }
}
