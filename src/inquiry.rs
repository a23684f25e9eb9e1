//! Property inquiry submission.
//!
//! There is no backend contract yet; [`SimulatedInquiryService`] validates the
//! form, waits a fixed delay and acknowledges every valid inquiry.

use crate::error::{HomefinderError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Contact form sent to a listing agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub property_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl Inquiry {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(HomefinderError::InvalidInquiry("name is required".into()));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(HomefinderError::InvalidInquiry(format!(
                    "'{}' is not an email address",
                    email
                )))
            }
        }
        if self.message.trim().is_empty() {
            return Err(HomefinderError::InvalidInquiry("message is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InquiryReceipt {
    pub property_id: String,
    pub received_at: DateTime<Utc>,
}

#[async_trait]
pub trait InquiryService: Send + Sync {
    async fn submit(&self, inquiry: Inquiry) -> Result<InquiryReceipt>;
}

#[derive(Debug, Clone)]
pub struct SimulatedInquiryService {
    delay: Duration,
}

impl SimulatedInquiryService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedInquiryService {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl InquiryService for SimulatedInquiryService {
    async fn submit(&self, inquiry: Inquiry) -> Result<InquiryReceipt> {
        inquiry.validate()?;
        tokio::time::sleep(self.delay).await;
        info!("Your inquiry about property {} has been sent!", inquiry.property_id);
        Ok(InquiryReceipt {
            property_id: inquiry.property_id,
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> Inquiry {
        Inquiry {
            property_id: "3".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: None,
            message: "Is it still available?".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn valid_inquiry_succeeds_after_delay() {
        let service = SimulatedInquiryService::default();
        let started = tokio::time::Instant::now();
        let receipt = service.submit(inquiry()).await.unwrap();
        assert_eq!(receipt.property_id, "3");
        assert!(started.elapsed() >= DEFAULT_SUBMIT_DELAY);
    }

    #[tokio::test]
    async fn rejects_incomplete_forms() {
        let service = SimulatedInquiryService::new(Duration::ZERO);
        for broken in [
            Inquiry { name: " ".into(), ..inquiry() },
            Inquiry { email: "ana.example.com".into(), ..inquiry() },
            Inquiry { email: "@example.com".into(), ..inquiry() },
            Inquiry { message: String::new(), ..inquiry() },
        ] {
            let err = service.submit(broken).await.unwrap_err();
            assert!(matches!(err, HomefinderError::InvalidInquiry(_)));
        }
    }
}
