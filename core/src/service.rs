//! The ticket purchase service.
//!
//! [`TicketServiceImpl`] validates a purchase, works out what it costs and how
//! many seats it needs, then charges the account and reserves the seats:
//!
//! ```text
//! purchase_tickets(account, requests)
//!   │
//!   ├─ plan_purchase ── any rule fails ──▶ Err(InvalidPurchase), no calls
//!   │
//!   ├─ make_payment(account, cost) ── fails ──▶ Err(PaymentFailed), no reservation
//!   │
//!   └─ reserve_seat(account, seats) ── fails ──▶ Err(ReservationFailed)
//! ```

use crate::error::{InvalidPurchase, Result};
use crate::payment::TicketPaymentService;
use crate::plan::{plan_purchase, PurchasePlan};
use crate::seat_reservation::SeatReservationService;
use crate::types::{AccountId, TicketTypeRequest};
use std::fmt;
use std::sync::Arc;

/// Ticket purchasing entry point
pub trait TicketService: Send + Sync {
    /// Purchases the requested tickets for `account_id`
    ///
    /// Succeeds only after the account has been charged and the seats
    /// reserved, each exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchase`] if the purchase breaks a rule or either
    /// collaborator fails. Rule failures happen before any collaborator is
    /// called; a payment failure means no reservation is attempted.
    fn purchase_tickets(
        &self,
        account_id: Option<AccountId>,
        requests: &[TicketTypeRequest],
    ) -> Result<()>;
}

/// [`TicketService`] backed by a payment service and a seat reservation service
///
/// Holds no state of its own, so one instance can serve concurrent callers.
#[derive(Clone)]
pub struct TicketServiceImpl {
    payment_service: Arc<dyn TicketPaymentService>,
    seat_reservation_service: Arc<dyn SeatReservationService>,
}

impl TicketServiceImpl {
    /// Creates a service that charges through `payment_service` and reserves
    /// through `seat_reservation_service`
    #[must_use]
    pub fn new(
        payment_service: Arc<dyn TicketPaymentService>,
        seat_reservation_service: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            payment_service,
            seat_reservation_service,
        }
    }

    fn process_payment(&self, plan: &PurchasePlan) -> Result<()> {
        self.payment_service
            .make_payment(plan.account_id, plan.total_cost)
            .map_err(|error| {
                tracing::error!(
                    account_id = plan.account_id.value(),
                    amount = plan.total_cost.pounds(),
                    error = %error,
                    "Payment failed"
                );
                InvalidPurchase::PaymentFailed(error.to_string())
            })
    }

    fn reserve_seats(&self, plan: &PurchasePlan) -> Result<()> {
        self.seat_reservation_service
            .reserve_seat(plan.account_id, plan.total_seats)
            .map_err(|error| {
                tracing::error!(
                    account_id = plan.account_id.value(),
                    seats = plan.total_seats,
                    error = %error,
                    "Seat reservation failed"
                );
                InvalidPurchase::ReservationFailed(error.to_string())
            })
    }
}

impl fmt::Debug for TicketServiceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketServiceImpl").finish_non_exhaustive()
    }
}

impl TicketService for TicketServiceImpl {
    fn purchase_tickets(
        &self,
        account_id: Option<AccountId>,
        requests: &[TicketTypeRequest],
    ) -> Result<()> {
        let plan = plan_purchase(account_id, requests).inspect_err(|error| {
            tracing::warn!(
                account_id = account_id.map(|id| id.value()),
                requests = requests.len(),
                reason = %error,
                "Purchase rejected"
            );
        })?;

        tracing::debug!(
            account_id = plan.account_id.value(),
            total_cost = plan.total_cost.pounds(),
            total_seats = plan.total_seats,
            "Purchase planned"
        );

        self.process_payment(&plan)?;
        self.reserve_seats(&plan)?;

        tracing::info!(
            account_id = plan.account_id.value(),
            total_cost = plan.total_cost.pounds(),
            total_seats = plan.total_seats,
            "Purchase completed"
        );
        Ok(())
    }
}
