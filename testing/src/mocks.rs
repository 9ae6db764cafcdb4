//! Recording collaborator doubles.
//!
//! Both doubles append to a shared [`CallLog`], so a test can check not only
//! what each collaborator was asked to do but also the order of the calls.

use std::sync::{Arc, Mutex, PoisonError};
use ticket_service_core::{
    AccountId, Money, PaymentError, PaymentResult, ReservationResult, SeatReservationError,
    SeatReservationService, TicketPaymentService,
};

/// A single call made to a collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorCall {
    /// `make_payment(account_id, amount)`
    Payment {
        /// Account charged
        account_id: AccountId,
        /// Amount charged
        amount: Money,
    },
    /// `reserve_seat(account_id, seats)`
    Reservation {
        /// Account reserved for
        account_id: AccountId,
        /// Seats reserved
        seats: u32,
    },
}

/// Ordered record of collaborator calls, shared between doubles
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<CollaboratorCall>>>,
}

impl CallLog {
    /// Create an empty call log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call
    pub fn record(&self, call: CollaboratorCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    /// Snapshot of every call so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<CollaboratorCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Payment calls only
    #[must_use]
    pub fn payments(&self) -> Vec<(AccountId, Money)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                CollaboratorCall::Payment { account_id, amount } => Some((account_id, amount)),
                CollaboratorCall::Reservation { .. } => None,
            })
            .collect()
    }

    /// Reservation calls only
    #[must_use]
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                CollaboratorCall::Reservation { account_id, seats } => Some((account_id, seats)),
                CollaboratorCall::Payment { .. } => None,
            })
            .collect()
    }

    /// Whether no collaborator has been called
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

/// Payment double that records every charge
///
/// Succeeds unless built with [`failing_with`](Self::failing_with). A failing
/// double still records the attempt.
#[derive(Debug, Clone)]
pub struct RecordingPaymentService {
    log: CallLog,
    failure: Option<PaymentError>,
}

impl RecordingPaymentService {
    /// Create a payment double that takes every charge
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log, failure: None }
    }

    /// Create a payment double that rejects every charge with `error`
    #[must_use]
    pub const fn failing_with(log: CallLog, error: PaymentError) -> Self {
        Self {
            log,
            failure: Some(error),
        }
    }
}

impl TicketPaymentService for RecordingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> PaymentResult<()> {
        self.log
            .record(CollaboratorCall::Payment { account_id, amount });
        self.failure.clone().map_or(Ok(()), Err)
    }
}

/// Seat reservation double that records every reservation
#[derive(Debug, Clone)]
pub struct RecordingSeatReservationService {
    log: CallLog,
    failure: Option<SeatReservationError>,
}

impl RecordingSeatReservationService {
    /// Create a reservation double that reserves every request
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log, failure: None }
    }

    /// Create a reservation double that rejects every request with `error`
    #[must_use]
    pub const fn failing_with(log: CallLog, error: SeatReservationError) -> Self {
        Self {
            log,
            failure: Some(error),
        }
    }
}

impl SeatReservationService for RecordingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) -> ReservationResult<()> {
        self.log.record(CollaboratorCall::Reservation {
            account_id,
            seats: total_seats_to_allocate,
        });
        self.failure.clone().map_or(Ok(()), Err)
    }
}
