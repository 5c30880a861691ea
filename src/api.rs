use gloo_net::http::Request;

use crate::config;
use crate::error::Result;
use crate::view_state::inquiry::{HttpReply, Inquiry, InquiryReply, InquiryTransport};

/// Posts inquiries to the configured backend.
pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            url: config::inquiry_url(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl InquiryTransport for HttpTransport {
    async fn post_inquiry(&self, inquiry: &Inquiry) -> Result<HttpReply> {
        let response = Request::post(&self.url).json(inquiry)?.send().await?;
        let ok = response.ok();
        log::debug!("Inquiry endpoint answered {}", response.status());

        let text = response.text().await?;
        let body: InquiryReply = serde_json::from_str(&text)?;
        Ok(HttpReply { ok, body })
    }
}
