//! Ticket payment collaborator.
//!
//! The service charges the purchasing account through [`TicketPaymentService`].
//! [`MockPaymentService`] stands in for the real payment provider during
//! development: it accepts every charge and only logs it.

use crate::types::{AccountId, Money};
use std::sync::Arc;
use thiserror::Error;

/// Result of a payment call
pub type PaymentResult<T> = Result<T, PaymentError>;

/// Failure reported by a payment provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The provider declined the charge
    #[error("Payment declined: {reason}")]
    Declined {
        /// Decline reason
        reason: String,
    },
    /// The provider could not be reached
    #[error("Payment service unavailable")]
    Unavailable,
    /// Other error
    #[error("Payment error: {message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Payment provider trait
///
/// A charge either completes or fails; there is no partial payment.
pub trait TicketPaymentService: Send + Sync {
    /// Charges `amount` to `account_id`
    ///
    /// # Errors
    ///
    /// Returns error if the charge is not taken
    fn make_payment(&self, account_id: AccountId, amount: Money) -> PaymentResult<()>;
}

/// Mock payment service (always succeeds for development)
#[derive(Clone, Debug, Default)]
pub struct MockPaymentService;

impl MockPaymentService {
    /// Creates a new mock payment service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn TicketPaymentService> {
        Arc::new(Self::new())
    }
}

impl TicketPaymentService for MockPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> PaymentResult<()> {
        tracing::info!(
            account_id = account_id.value(),
            amount = amount.pounds(),
            "Mock payment taken"
        );
        Ok(())
    }
}
