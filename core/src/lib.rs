//! # Ticket Service Core
//!
//! Validation, pricing and orchestration for venue ticket purchases.
//!
//! A purchase is an account id plus an ordered list of [`TicketTypeRequest`]s.
//! [`TicketServiceImpl`] checks the purchase against the venue's rules, works
//! out the cost and the number of seats, then calls the payment service and
//! the seat reservation service once each.
//!
//! ## Rules
//!
//! - At least one ticket request, and a positive account id
//! - No more than [`MAX_TICKETS_PER_PURCHASE`] tickets at once
//! - At least one adult ticket
//! - No more infants than adults
//!
//! ## Prices and seats
//!
//! | Type   | Price | Seat |
//! |--------|-------|------|
//! | Adult  | £20   | yes  |
//! | Child  | £10   | yes  |
//! | Infant | £0    | no   |
//!
//! ## Example
//!
//! ```
//! use ticket_service_core::{
//!     AccountId, MockPaymentService, MockSeatReservationService, TicketService,
//!     TicketServiceImpl, TicketTypeRequest,
//! };
//!
//! let service = TicketServiceImpl::new(
//!     MockPaymentService::shared(),
//!     MockSeatReservationService::shared(),
//! );
//!
//! let result = service.purchase_tickets(
//!     Some(AccountId::new(1)),
//!     &[TicketTypeRequest::adult(2), TicketTypeRequest::infant(1)],
//! );
//! assert!(result.is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod payment;
pub mod plan;
pub mod rules;
pub mod seat_reservation;
pub mod service;
pub mod types;

pub use error::{InvalidPurchase, Result};
pub use payment::{MockPaymentService, PaymentError, PaymentResult, TicketPaymentService};
pub use plan::{calculate_cost, plan_purchase, PurchasePlan, TicketTally};
pub use rules::MAX_TICKETS_PER_PURCHASE;
pub use seat_reservation::{
    MockSeatReservationService, ReservationResult, SeatReservationError, SeatReservationService,
};
pub use service::{TicketService, TicketServiceImpl};
pub use types::{AccountId, Money, TicketType, TicketTypeRequest};
