//! Purchase rules.
//!
//! Each rule is a standalone check that either passes a value through or
//! rejects the purchase. [`plan_purchase`](crate::plan::plan_purchase) chains
//! them with `?` in this order:
//!
//! 1. [`require_requests`]
//! 2. [`require_valid_account`]
//! 3. [`check_ticket_cap`]
//! 4. [`require_adult`]
//! 5. [`check_infant_ratio`]
//!
//! The first failing rule decides the error.

use crate::error::{InvalidPurchase, Result};
use crate::plan::TicketTally;
use crate::types::{AccountId, TicketType, TicketTypeRequest};

/// Most tickets that can be bought in one purchase
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Rejects a purchase with no ticket requests
///
/// # Errors
///
/// Returns [`InvalidPurchase::NoTicketRequests`] if `requests` is empty.
pub const fn require_requests(requests: &[TicketTypeRequest]) -> Result<&[TicketTypeRequest]> {
    if requests.is_empty() {
        return Err(InvalidPurchase::NoTicketRequests);
    }
    Ok(requests)
}

/// Rejects a missing or non-positive account id
///
/// # Errors
///
/// Returns [`InvalidPurchase::InvalidAccountId`] if the id is `None` or `<= 0`.
pub fn require_valid_account(account_id: Option<AccountId>) -> Result<AccountId> {
    account_id
        .filter(AccountId::is_valid)
        .ok_or(InvalidPurchase::InvalidAccountId)
}

/// Sums ticket quantities in order, failing as soon as the running total
/// exceeds [`MAX_TICKETS_PER_PURCHASE`]
///
/// Returns the total number of tickets.
///
/// # Errors
///
/// Returns [`InvalidPurchase::TooManyTickets`] at the first prefix whose sum
/// is over the cap.
pub fn check_ticket_cap(requests: &[TicketTypeRequest]) -> Result<u32> {
    requests.iter().try_fold(0_u32, |running, request| {
        running
            .checked_add(request.no_of_tickets())
            .filter(|total| *total <= MAX_TICKETS_PER_PURCHASE)
            .ok_or(InvalidPurchase::TooManyTickets)
    })
}

/// Requires at least one adult request
///
/// Only the category is inspected, so an adult request for zero tickets
/// still satisfies this rule.
///
/// # Errors
///
/// Returns [`InvalidPurchase::NoAdultTicket`] if no request is for adults.
pub fn require_adult(requests: &[TicketTypeRequest]) -> Result<()> {
    if requests
        .iter()
        .any(|request| request.ticket_type() == TicketType::Adult)
    {
        Ok(())
    } else {
        Err(InvalidPurchase::NoAdultTicket)
    }
}

/// Requires at least one adult for every infant
///
/// # Errors
///
/// Returns [`InvalidPurchase::TooManyInfants`] if the infant total is greater
/// than the adult total.
pub const fn check_infant_ratio(tally: &TicketTally) -> Result<()> {
    if tally.infants() > tally.adults() {
        return Err(InvalidPurchase::TooManyInfants);
    }
    Ok(())
}
