//! Box office demo binary
//!
//! Runs a fixed set of purchases through the ticket service with mock
//! collaborators and prints what happened to each.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin box-office
//!
//! # Watch payment failures being wrapped
//! BOX_OFFICE_DECLINE_PAYMENTS=true cargo run --bin box-office
//! ```

mod config;

use config::Config;
use std::sync::Arc;
use ticket_service_core::{
    AccountId, MockPaymentService, MockSeatReservationService, Money, PaymentError,
    PaymentResult, TicketPaymentService, TicketService, TicketServiceImpl, TicketTypeRequest,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Payment service that declines every charge
#[derive(Debug, Clone, Copy)]
struct DecliningPaymentService;

impl TicketPaymentService for DecliningPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> PaymentResult<()> {
        tracing::info!(
            account_id = account_id.value(),
            amount = amount.pounds(),
            "Declining payment"
        );
        Err(PaymentError::Declined {
            reason: "demo card rejected".to_string(),
        })
    }
}

fn scenarios() -> Vec<(&'static str, Vec<TicketTypeRequest>)> {
    vec![
        (
            "Family of seven",
            vec![
                TicketTypeRequest::adult(3),
                TicketTypeRequest::infant(2),
                TicketTypeRequest::child(2),
            ],
        ),
        ("Full party of twenty", vec![TicketTypeRequest::adult(20)]),
        ("Nothing requested", vec![]),
        (
            "Coach party over the limit",
            vec![TicketTypeRequest::adult(15), TicketTypeRequest::child(7)],
        ),
        ("Children on their own", vec![TicketTypeRequest::child(2)]),
        (
            "More infants than adults",
            vec![TicketTypeRequest::infant(5), TicketTypeRequest::adult(4)],
        ),
    ]
}

fn main() {
    // Load .env file
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        account_id = config.account_id.value(),
        decline_payments = config.decline_payments,
        "Configuration loaded"
    );

    let payment_service: Arc<dyn TicketPaymentService> = if config.decline_payments {
        Arc::new(DecliningPaymentService)
    } else {
        MockPaymentService::shared()
    };
    let service = TicketServiceImpl::new(payment_service, MockSeatReservationService::shared());

    println!("=== Box Office: account {} ===\n", config.account_id);

    for (label, requests) in scenarios() {
        let summary: Vec<String> = requests.iter().map(ToString::to_string).collect();
        println!(">>> {label}: [{}]", summary.join(", "));

        match service.purchase_tickets(Some(config.account_id), &requests) {
            Ok(()) => println!("    purchased\n"),
            Err(error) => println!("    rejected: {error}\n"),
        }
    }
}
