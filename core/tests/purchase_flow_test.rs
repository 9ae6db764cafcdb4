//! Integration tests for the purchase flow with recording collaborators
//!
//! Each test drives `TicketServiceImpl` end to end and checks both the
//! outcome and the exact collaborator calls, in order.

use std::sync::Arc;
use std::thread;
use ticket_service_core::{
    AccountId, InvalidPurchase, Money, PaymentError, SeatReservationError, TicketService,
    TicketServiceImpl, TicketTypeRequest,
};
use ticket_service_testing::{
    assertions, init_test_tracing, CallLog, PurchaseTest, RecordingPaymentService,
    RecordingSeatReservationService,
};

fn account(id: i64) -> Option<AccountId> {
    Some(AccountId::new(id))
}

#[test]
fn test_family_purchase_charges_and_reserves() {
    init_test_tracing();

    PurchaseTest::new()
        .when_purchasing(
            account(1),
            vec![
                TicketTypeRequest::adult(3),
                TicketTypeRequest::infant(2),
                TicketTypeRequest::child(2),
            ],
        )
        .then_result(|result| assert!(result.is_ok()))
        .then_calls(|calls| {
            assertions::assert_charged_then_reserved(
                calls,
                AccountId::new(1),
                Money::from_pounds(80),
                5,
            );
        })
        .run();
}

#[test]
fn test_empty_purchase_rejected() {
    PurchaseTest::new()
        .when_purchasing(account(1), vec![])
        .then_error(InvalidPurchase::NoTicketRequests)
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_missing_account_rejected() {
    PurchaseTest::new()
        .when_purchasing(None, vec![TicketTypeRequest::adult(1)])
        .then_error(InvalidPurchase::InvalidAccountId)
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_non_positive_accounts_rejected() {
    for id in [0, -1, i64::MIN] {
        PurchaseTest::new()
            .when_purchasing(account(id), vec![TicketTypeRequest::adult(1)])
            .then_error(InvalidPurchase::InvalidAccountId)
            .then_calls(assertions::assert_no_calls)
            .run();
    }
}

#[test]
fn test_no_adult_rejected() {
    PurchaseTest::new()
        .when_purchasing(account(1), vec![TicketTypeRequest::child(2)])
        .then_error(InvalidPurchase::NoAdultTicket)
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_running_total_over_cap_rejected() {
    PurchaseTest::new()
        .when_purchasing(
            account(1),
            vec![TicketTypeRequest::adult(15), TicketTypeRequest::child(7)],
        )
        .then_error(InvalidPurchase::TooManyTickets)
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_twenty_tickets_accepted() {
    PurchaseTest::new()
        .when_purchasing(
            account(7),
            vec![
                TicketTypeRequest::adult(10),
                TicketTypeRequest::child(5),
                TicketTypeRequest::infant(5),
            ],
        )
        .then_result(|result| assert!(result.is_ok()))
        .then_calls(|calls| {
            assertions::assert_charged_then_reserved(
                calls,
                AccountId::new(7),
                Money::from_pounds(250),
                15,
            );
        })
        .run();
}

#[test]
fn test_more_infants_than_adults_rejected() {
    PurchaseTest::new()
        .when_purchasing(
            account(1),
            vec![TicketTypeRequest::infant(5), TicketTypeRequest::adult(4)],
        )
        .then_error(InvalidPurchase::TooManyInfants)
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_payment_failure_wraps_message_and_skips_reservation() {
    PurchaseTest::new()
        .given_payment_failure(PaymentError::Declined {
            reason: "card expired".to_string(),
        })
        .when_purchasing(account(1), vec![TicketTypeRequest::adult(2)])
        .then_result(|result| {
            assert_eq!(
                result.as_ref().err().map(InvalidPurchase::reason),
                Some("Payment declined: card expired".to_string())
            );
        })
        .then_calls(|calls| assertions::assert_call_count(calls, 1))
        .run();
}

#[test]
fn test_reservation_failure_wrapped_after_single_payment() {
    let log = CallLog::new();
    let service = TicketServiceImpl::new(
        Arc::new(RecordingPaymentService::new(log.clone())),
        Arc::new(RecordingSeatReservationService::failing_with(
            log.clone(),
            SeatReservationError::NoSeatsAvailable { requested: 3 },
        )),
    );

    let result = service.purchase_tickets(
        account(5),
        &[TicketTypeRequest::adult(2), TicketTypeRequest::child(1)],
    );

    assert_eq!(
        result,
        Err(InvalidPurchase::ReservationFailed(
            "Not enough seats available: requested 3".to_string()
        ))
    );
    assert_eq!(log.payments(), vec![(AccountId::new(5), Money::from_pounds(50))]);
    assert_eq!(log.reservations(), vec![(AccountId::new(5), 3)]);
}

#[test]
fn test_service_usable_through_trait_object() {
    let log = CallLog::new();
    let service: Arc<dyn TicketService> = Arc::new(TicketServiceImpl::new(
        Arc::new(RecordingPaymentService::new(log.clone())),
        Arc::new(RecordingSeatReservationService::new(log.clone())),
    ));

    assert!(service
        .purchase_tickets(account(2), &[TicketTypeRequest::adult(1)])
        .is_ok());
    assert_eq!(log.calls().len(), 2);
}

#[test]
fn test_concurrent_purchases_are_independent() {
    let log = CallLog::new();
    let service = TicketServiceImpl::new(
        Arc::new(RecordingPaymentService::new(log.clone())),
        Arc::new(RecordingSeatReservationService::new(log.clone())),
    );

    thread::scope(|scope| {
        for id in 1..=8 {
            let service = &service;
            scope.spawn(move || {
                let result = service.purchase_tickets(
                    account(id),
                    &[TicketTypeRequest::adult(1), TicketTypeRequest::child(1)],
                );
                assert!(result.is_ok());
            });
        }
    });

    let mut payments = log.payments();
    payments.sort();
    let expected: Vec<_> = (1..=8)
        .map(|id| (AccountId::new(id), Money::from_pounds(30)))
        .collect();
    assert_eq!(payments, expected);
    assert_eq!(log.reservations().len(), 8);
}
