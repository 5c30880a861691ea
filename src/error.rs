use thiserror::Error;

#[derive(Error, Debug)]
pub enum InquiryError {
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("Request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("Unreadable reply: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InquiryError>;
