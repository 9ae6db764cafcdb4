//! Property-based testing utilities using proptest.
//!
//! Strategies that generate ticket requests shaped to pass or to break a
//! specific purchase rule.

use proptest::prelude::*;
use ticket_service_core::{TicketType, TicketTypeRequest, MAX_TICKETS_PER_PURCHASE};

/// Any ticket type
pub fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

/// A request of any type for up to `max_quantity` tickets
pub fn ticket_request(max_quantity: u32) -> impl Strategy<Value = TicketTypeRequest> {
    (ticket_type(), 0..=max_quantity)
        .prop_map(|(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity))
}

/// Unconstrained purchases: up to `max_len` requests of up to 12 tickets each
pub fn any_requests(max_len: usize) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    prop::collection::vec(ticket_request(12), 0..=max_len)
}

/// Purchases that pass every rule, as `(adults, children, infants, requests)`
///
/// Requests are shuffled, so the adult request is not always first.
pub fn valid_purchase() -> impl Strategy<Value = (u32, u32, u32, Vec<TicketTypeRequest>)> {
    (1..=MAX_TICKETS_PER_PURCHASE)
        .prop_flat_map(|adults| (Just(adults), 0..=MAX_TICKETS_PER_PURCHASE - adults))
        .prop_flat_map(|(adults, children)| {
            let infant_limit = adults.min(MAX_TICKETS_PER_PURCHASE - adults - children);
            (Just(adults), Just(children), 0..=infant_limit)
        })
        .prop_flat_map(|(adults, children, infants)| {
            let mut requests = vec![TicketTypeRequest::adult(adults)];
            if children > 0 {
                requests.push(TicketTypeRequest::child(children));
            }
            if infants > 0 {
                requests.push(TicketTypeRequest::infant(infants));
            }
            (
                Just(adults),
                Just(children),
                Just(infants),
                Just(requests).prop_shuffle(),
            )
        })
}

/// Purchases with an adult ticket whose total goes over the cap
pub fn oversized_purchase() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    (1..=MAX_TICKETS_PER_PURCHASE)
        .prop_flat_map(|adults| {
            (
                Just(adults),
                (MAX_TICKETS_PER_PURCHASE + 1 - adults)..=MAX_TICKETS_PER_PURCHASE,
            )
        })
        .prop_map(|(adults, children)| {
            vec![
                TicketTypeRequest::adult(adults),
                TicketTypeRequest::child(children),
            ]
        })
}

/// Purchases within the cap that contain no adult request
pub fn purchase_without_adult() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    let non_adult = prop_oneof![Just(TicketType::Child), Just(TicketType::Infant)];
    prop::collection::vec(
        (non_adult, 0..=4_u32)
            .prop_map(|(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity)),
        1..=5,
    )
}

/// Purchases within the cap with more infants than adults
pub fn infant_heavy_purchase() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    (1..MAX_TICKETS_PER_PURCHASE / 2)
        .prop_flat_map(|adults| (Just(adults), (adults + 1)..=(MAX_TICKETS_PER_PURCHASE - adults)))
        .prop_map(|(adults, infants)| {
            vec![
                TicketTypeRequest::infant(infants),
                TicketTypeRequest::adult(adults),
            ]
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_purchases_respect_cap((adults, children, infants, requests) in valid_purchase()) {
            let total: u32 = requests.iter().map(TicketTypeRequest::no_of_tickets).sum();
            prop_assert_eq!(total, adults + children + infants);
            prop_assert!(total <= MAX_TICKETS_PER_PURCHASE);
            prop_assert!(infants <= adults);
        }

        #[test]
        fn oversized_purchases_exceed_cap(requests in oversized_purchase()) {
            let total: u32 = requests.iter().map(TicketTypeRequest::no_of_tickets).sum();
            prop_assert!(total > MAX_TICKETS_PER_PURCHASE);
        }

        #[test]
        fn infant_heavy_purchases_stay_within_cap(requests in infant_heavy_purchase()) {
            let total: u32 = requests.iter().map(TicketTypeRequest::no_of_tickets).sum();
            prop_assert!(total <= MAX_TICKETS_PER_PURCHASE);
        }
    }
}
