//! Cost and seat calculation for a validated purchase

use crate::error::{InvalidPurchase, Result};
use crate::rules;
use crate::types::{AccountId, Money, TicketType, TicketTypeRequest};
use serde::{Deserialize, Serialize};

/// Ticket totals per category for one purchase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTally {
    adults: u32,
    children: u32,
    infants: u32,
}

impl TicketTally {
    /// Aggregates quantities per ticket type
    #[must_use]
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut tally, request| {
            let count = match request.ticket_type() {
                TicketType::Adult => &mut tally.adults,
                TicketType::Child => &mut tally.children,
                TicketType::Infant => &mut tally.infants,
            };
            *count = count.saturating_add(request.no_of_tickets());
            tally
        })
    }

    /// Total adult tickets
    #[must_use]
    pub const fn adults(&self) -> u32 {
        self.adults
    }

    /// Total child tickets
    #[must_use]
    pub const fn children(&self) -> u32 {
        self.children
    }

    /// Total infant tickets
    #[must_use]
    pub const fn infants(&self) -> u32 {
        self.infants
    }

    /// Total for a single ticket type
    #[must_use]
    pub const fn count(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    /// Seats to reserve: one per ticket type that occupies a seat
    #[must_use]
    pub fn seats(&self) -> u32 {
        TicketType::ALL
            .into_iter()
            .filter(|ticket_type| ticket_type.occupies_seat())
            .map(|ticket_type| self.count(ticket_type))
            .fold(0, u32::saturating_add)
    }
}

/// Calculates the total cost of the requested tickets
///
/// # Errors
///
/// Returns [`InvalidPurchase::TooManyTickets`] if the cost cannot be
/// represented. The ticket cap keeps real purchases far below that.
pub fn calculate_cost(requests: &[TicketTypeRequest]) -> Result<Money> {
    requests.iter().try_fold(Money::ZERO, |total, request| {
        request
            .ticket_type()
            .unit_price()
            .checked_mul(request.no_of_tickets())
            .and_then(|line| total.checked_add(line))
            .ok_or(InvalidPurchase::TooManyTickets)
    })
}

/// A validated purchase, ready to be charged and seated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePlan {
    /// Account to charge and reserve against
    pub account_id: AccountId,
    /// Amount to charge
    pub total_cost: Money,
    /// Seats to reserve
    pub total_seats: u32,
}

/// Runs every purchase rule and, if they all pass, calculates cost and seats
///
/// No collaborator is involved, so the outcome depends only on the inputs.
///
/// # Errors
///
/// Returns the [`InvalidPurchase`] of the first rule that fails, in the order
/// documented in [`rules`].
pub fn plan_purchase(
    account_id: Option<AccountId>,
    requests: &[TicketTypeRequest],
) -> Result<PurchasePlan> {
    let requests = rules::require_requests(requests)?;
    let account_id = rules::require_valid_account(account_id)?;
    rules::check_ticket_cap(requests)?;
    rules::require_adult(requests)?;

    let tally = TicketTally::from_requests(requests);
    rules::check_infant_ratio(&tally)?;

    Ok(PurchasePlan {
        account_id,
        total_cost: calculate_cost(requests)?,
        total_seats: tally.seats(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn account() -> Option<AccountId> {
        Some(AccountId::new(1))
    }

    #[test]
    fn test_tally_groups_by_type() {
        let tally = TicketTally::from_requests(&[
            TicketTypeRequest::adult(2),
            TicketTypeRequest::child(1),
            TicketTypeRequest::adult(1),
            TicketTypeRequest::infant(3),
        ]);

        assert_eq!(tally.adults(), 3);
        assert_eq!(tally.children(), 1);
        assert_eq!(tally.infants(), 3);
        assert_eq!(tally.seats(), 4);
    }

    #[test]
    fn test_cost_ignores_infants() {
        let cost = calculate_cost(&[
            TicketTypeRequest::adult(3),
            TicketTypeRequest::infant(2),
            TicketTypeRequest::child(2),
        ])
        .unwrap();

        assert_eq!(cost, Money::from_pounds(80));
    }

    #[test]
    fn test_cost_overflow_is_an_error() {
        let result = calculate_cost(&[TicketTypeRequest::adult(u32::MAX)]);
        assert_eq!(result, Err(InvalidPurchase::TooManyTickets));
    }

    #[test]
    fn test_plan_family_purchase() {
        let plan = plan_purchase(
            account(),
            &[
                TicketTypeRequest::adult(3),
                TicketTypeRequest::infant(2),
                TicketTypeRequest::child(2),
            ],
        )
        .unwrap();

        assert_eq!(
            plan,
            PurchasePlan {
                account_id: AccountId::new(1),
                total_cost: Money::from_pounds(80),
                total_seats: 5,
            }
        );
    }

    #[test]
    fn test_plan_maximum_purchase() {
        let plan = plan_purchase(account(), &[TicketTypeRequest::adult(20)]).unwrap();

        assert_eq!(plan.total_cost, Money::from_pounds(400));
        assert_eq!(plan.total_seats, 20);
    }

    #[test]
    fn test_empty_requests_checked_before_account() {
        assert_eq!(
            plan_purchase(None, &[]),
            Err(InvalidPurchase::NoTicketRequests)
        );
    }

    #[test]
    fn test_account_checked_before_ticket_rules() {
        assert_eq!(
            plan_purchase(Some(AccountId::new(0)), &[TicketTypeRequest::child(30)]),
            Err(InvalidPurchase::InvalidAccountId)
        );
    }

    #[test]
    fn test_cap_checked_before_adult_presence() {
        assert_eq!(
            plan_purchase(account(), &[TicketTypeRequest::child(21)]),
            Err(InvalidPurchase::TooManyTickets)
        );
    }

    #[test]
    fn test_adult_presence_checked_before_ratio() {
        assert_eq!(
            plan_purchase(account(), &[TicketTypeRequest::infant(2)]),
            Err(InvalidPurchase::NoAdultTicket)
        );
    }

    #[test]
    fn test_ratio_rejects_extra_infant() {
        assert_eq!(
            plan_purchase(
                account(),
                &[TicketTypeRequest::infant(5), TicketTypeRequest::adult(4)]
            ),
            Err(InvalidPurchase::TooManyInfants)
        );
    }
}
