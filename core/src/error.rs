//! Error type for rejected purchases

use thiserror::Error;

/// Reason a ticket purchase was rejected
///
/// Every failure of [`TicketService::purchase_tickets`](crate::TicketService)
/// surfaces as one of these, including failures reported by the payment and
/// seat reservation collaborators. The `Display` output is the human-readable
/// reason shown to the purchaser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPurchase {
    /// The purchase contained no ticket requests
    #[error("No valid ticket type requests provided")]
    NoTicketRequests,

    /// The account id was missing or not positive
    #[error("Invalid account id provided")]
    InvalidAccountId,

    /// The running ticket count went over the per-purchase cap
    #[error("Too many tickets being purchased at once, please lower the number of tickets")]
    TooManyTickets,

    /// None of the requests were for adult tickets
    #[error("No adult tickets are present, Please add a adult ticket")]
    NoAdultTicket,

    /// More infants than adults were requested
    #[error("Too many infant tickets, there should be at least 1 adult for every infant")]
    TooManyInfants,

    /// The payment collaborator rejected the charge
    #[error("{0}")]
    PaymentFailed(String),

    /// The seat reservation collaborator rejected the reservation
    #[error("{0}")]
    ReservationFailed(String),
}

impl InvalidPurchase {
    /// The human-readable reason for the rejection
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Whether the rejection came from a collaborator rather than a purchase rule
    #[must_use]
    pub const fn is_collaborator_failure(&self) -> bool {
        matches!(self, Self::PaymentFailed(_) | Self::ReservationFailed(_))
    }
}

/// Result alias for purchase operations
pub type Result<T> = std::result::Result<T, InvalidPurchase>;
