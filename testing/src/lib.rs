//! # Ticket Service Testing
//!
//! Testing utilities and helpers for the ticket purchase service.
//!
//! This crate provides:
//! - Recording test doubles for the payment and seat reservation services
//! - A fluent Given-When-Then helper for purchase scenarios
//! - Property-based testing strategies for ticket requests
//!
//! ## Example
//!
//! ```
//! use ticket_service_core::{AccountId, Money, TicketTypeRequest};
//! use ticket_service_testing::{assertions, PurchaseTest};
//!
//! PurchaseTest::new()
//!     .when_purchasing(
//!         Some(AccountId::new(1)),
//!         vec![TicketTypeRequest::adult(2), TicketTypeRequest::child(1)],
//!     )
//!     .then_result(|result| assert!(result.is_ok()))
//!     .then_calls(|calls| {
//!         assertions::assert_charged_then_reserved(calls, AccountId::new(1), Money::from_pounds(50), 3);
//!     })
//!     .run();
//! ```

pub mod mocks;
pub mod properties;

pub use mocks::{CallLog, CollaboratorCall, RecordingPaymentService, RecordingSeatReservationService};
pub use purchase_test::{assertions, PurchaseTest};

/// Installs a `tracing` subscriber that writes through the test harness
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticket_service_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
