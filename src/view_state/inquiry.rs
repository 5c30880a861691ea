//! Contact form validation and the inquiry submit flow.
//!
//! The flow is generic over [`InquiryTransport`] so the outcome handling can
//! run without a browser; `crate::api::HttpTransport` is the real one.

use serde::{Deserialize, Serialize};

use crate::error::{InquiryError, Result};

pub const VALIDATION_NOTICE: &str = "Please fill name, email and message.";
pub const SUCCESS_NOTICE: &str = "Message sent successfully — thank you!";
pub const NETWORK_NOTICE: &str = "Network error — check console or try again later";
pub const FALLBACK_SERVER_ERROR: &str = "Server error";

/// Raw form values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub practice: String,
    pub message: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub practice: String,
    pub message: String,
}

impl ContactFields {
    /// Trims the text inputs and checks the required ones. The practice
    /// select is passed through as chosen.
    pub fn to_inquiry(&self) -> Result<Inquiry> {
        let inquiry = Inquiry {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            practice: self.practice.clone(),
            message: self.message.trim().to_string(),
        };

        let missing: Vec<&str> = [
            ("name", &inquiry.name),
            ("email", &inquiry.email),
            ("message", &inquiry.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(inquiry)
        } else {
            Err(InquiryError::MissingFields(missing.join(", ")))
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryReply {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A reply whose body parsed, whatever its HTTP status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub ok: bool,
    pub body: InquiryReply,
}

#[allow(async_fn_in_trait)]
pub trait InquiryTransport {
    async fn post_inquiry(&self, inquiry: &Inquiry) -> Result<HttpReply>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Sent,
    Rejected(String),
    NetworkFailure,
}

impl SubmitOutcome {
    pub fn from_reply(reply: HttpReply) -> Self {
        if reply.ok && reply.body.success.unwrap_or(false) {
            SubmitOutcome::Sent
        } else {
            let message = reply
                .body
                .error
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| FALLBACK_SERVER_ERROR.to_string());
            SubmitOutcome::Rejected(message)
        }
    }

    /// Text for the blocking notification.
    pub fn notice(&self) -> String {
        match self {
            SubmitOutcome::Invalid => VALIDATION_NOTICE.to_string(),
            SubmitOutcome::Sent => SUCCESS_NOTICE.to_string(),
            SubmitOutcome::Rejected(message) => format!("Error: {}", message),
            SubmitOutcome::NetworkFailure => NETWORK_NOTICE.to_string(),
        }
    }

    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

/// Validates `fields` and, when they pass, posts them once.
pub async fn submit<T: InquiryTransport>(transport: &T, fields: &ContactFields) -> SubmitOutcome {
    let inquiry = match fields.to_inquiry() {
        Ok(inquiry) => inquiry,
        Err(e) => {
            log::debug!("Inquiry not sent: {}", e);
            return SubmitOutcome::Invalid;
        }
    };

    match transport.post_inquiry(&inquiry).await {
        Ok(reply) => {
            let outcome = SubmitOutcome::from_reply(reply);
            log::info!("Inquiry submitted: {:?}", outcome);
            outcome
        }
        Err(e) => {
            log::error!("Network error: {}", e);
            SubmitOutcome::NetworkFailure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    enum Scripted {
        Reply(HttpReply),
        Unreachable,
        Garbage,
    }

    struct MockTransport {
        script: Scripted,
        sent: RefCell<Vec<Inquiry>>,
    }

    impl MockTransport {
        fn new(script: Scripted) -> Self {
            Self {
                script,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn replying(ok: bool, json: &str) -> Self {
            let body = serde_json::from_str(json).unwrap();
            Self::new(Scripted::Reply(HttpReply { ok, body }))
        }
    }

    impl InquiryTransport for MockTransport {
        async fn post_inquiry(&self, inquiry: &Inquiry) -> Result<HttpReply> {
            self.sent.borrow_mut().push(inquiry.clone());
            match &self.script {
                Scripted::Reply(reply) => Ok(reply.clone()),
                Scripted::Unreachable => Err(InquiryError::Transport(gloo_net::Error::GlooError(
                    "connection refused".to_string(),
                ))),
                Scripted::Garbage => Err(serde_json::from_str::<InquiryReply>("<html>")
                    .unwrap_err()
                    .into()),
            }
        }
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "  Ada Lovelace ".to_string(),
            email: "ada@example.com".to_string(),
            phone: " 555-0100 ".to_string(),
            practice: "corporate".to_string(),
            message: "I need advice on a contract.".to_string(),
        }
    }

    #[test]
    fn blank_name_is_rejected_locally() {
        let transport = MockTransport::replying(true, r#"{"success":true}"#);
        let fields = ContactFields {
            name: String::new(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
            ..Default::default()
        };

        let outcome = block_on(submit(&transport, &fields));
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(outcome.notice(), "Please fill name, email and message.");
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn whitespace_only_fields_count_as_blank() {
        let fields = ContactFields {
            name: "Ada".to_string(),
            email: "   ".to_string(),
            message: "\n\t".to_string(),
            ..Default::default()
        };
        match fields.to_inquiry() {
            Err(InquiryError::MissingFields(missing)) => assert_eq!(missing, "email, message"),
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let fields = ContactFields {
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
            ..Default::default()
        };
        let inquiry = fields.to_inquiry().unwrap();
        assert_eq!(inquiry.phone, "");
        assert_eq!(inquiry.practice, "");
    }

    #[test]
    fn success_reply_clears_the_form() {
        let transport = MockTransport::replying(true, r#"{"success":true}"#);
        let outcome = block_on(submit(&transport, &filled()));

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(outcome.clears_form());
        assert_eq!(outcome.notice(), SUCCESS_NOTICE);

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ada Lovelace");
        assert_eq!(sent[0].phone, "555-0100");
    }

    #[test]
    fn server_error_text_is_shown_verbatim() {
        let transport = MockTransport::replying(true, r#"{"success":false,"error":"bad email"}"#);
        let outcome = block_on(submit(&transport, &filled()));

        assert_eq!(outcome, SubmitOutcome::Rejected("bad email".to_string()));
        assert_eq!(outcome.notice(), "Error: bad email");
        assert!(!outcome.clears_form());
    }

    #[test]
    fn http_failure_without_error_text_falls_back() {
        let transport = MockTransport::replying(false, r#"{"success":true}"#);
        let outcome = block_on(submit(&transport, &filled()));
        assert_eq!(outcome.notice(), "Error: Server error");

        let transport = MockTransport::replying(true, "{}");
        let outcome = block_on(submit(&transport, &filled()));
        assert_eq!(outcome, SubmitOutcome::Rejected(FALLBACK_SERVER_ERROR.to_string()));
    }

    #[test]
    fn null_success_and_error_are_a_rejection() {
        let transport = MockTransport::replying(true, r#"{"success":null,"error":null}"#);
        let outcome = block_on(submit(&transport, &filled()));
        assert_eq!(outcome, SubmitOutcome::Rejected(FALLBACK_SERVER_ERROR.to_string()));
        assert_eq!(outcome.notice(), "Error: Server error");
        assert!(!outcome.clears_form());
    }

    #[test]
    fn transport_and_decode_failures_show_network_notice() {
        for script in [Scripted::Unreachable, Scripted::Garbage] {
            let transport = MockTransport::new(script);
            let outcome = block_on(submit(&transport, &filled()));
            assert_eq!(outcome, SubmitOutcome::NetworkFailure);
            assert_eq!(outcome.notice(), NETWORK_NOTICE);
            assert!(!outcome.clears_form());
        }
    }

    #[test]
    fn inquiry_serializes_all_five_fields() {
        let inquiry = filled().to_inquiry().unwrap();
        let json = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["practice"], "corporate");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
