//! Domain types for ticket purchases.
//!
//! Value objects passed into [`TicketService::purchase_tickets`](crate::TicketService)
//! and handed on to the payment and seat reservation collaborators. Nothing here
//! is persisted; every value lives for the duration of one purchase attempt.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the account making a purchase
///
/// Any `i64` can be wrapped. Only positive values are accepted by the
/// purchase rules, see [`AccountId::is_valid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Wraps a raw account number
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw account number
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Whether this id can be used for a purchase (strictly positive)
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object
// ============================================================================

/// An amount in whole currency units
///
/// Ticket prices have no fractional part, so the amount is a plain count of
/// pounds. Arithmetic is checked and never wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u32);

impl Money {
    /// Zero
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from whole pounds
    #[must_use]
    pub const fn from_pounds(pounds: u32) -> Self {
        Self(pounds)
    }

    /// Returns the amount in whole pounds
    #[must_use]
    pub const fn pounds(&self) -> u32 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, returning `None` on overflow
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies by a ticket quantity, returning `None` on overflow
    #[must_use]
    pub const fn checked_mul(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}", self.0)
    }
}

// ============================================================================
// Ticket Types
// ============================================================================

/// The fixed set of ticket categories sold at the venue
///
/// Each category carries its own unit price and seat rule. The purchase rules
/// depend on exactly these three variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    /// Adult ticket
    Adult,
    /// Child ticket
    Child,
    /// Infant ticket, sits on an adult's lap
    Infant,
}

impl TicketType {
    /// All ticket types in declaration order
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Price of a single ticket of this type
    #[must_use]
    pub const fn unit_price(self) -> Money {
        match self {
            Self::Adult => Money::from_pounds(20),
            Self::Child => Money::from_pounds(10),
            Self::Infant => Money::ZERO,
        }
    }

    /// Whether a ticket of this type needs its own seat
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adult => write!(f, "ADULT"),
            Self::Child => write!(f, "CHILD"),
            Self::Infant => write!(f, "INFANT"),
        }
    }
}

/// A request for a number of tickets of one type
///
/// Immutable once built. A purchase is an ordered slice of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    /// Creates a request for `no_of_tickets` tickets of `ticket_type`
    #[must_use]
    pub const fn new(ticket_type: TicketType, no_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    /// Shorthand for an adult request
    #[must_use]
    pub const fn adult(no_of_tickets: u32) -> Self {
        Self::new(TicketType::Adult, no_of_tickets)
    }

    /// Shorthand for a child request
    #[must_use]
    pub const fn child(no_of_tickets: u32) -> Self {
        Self::new(TicketType::Child, no_of_tickets)
    }

    /// Shorthand for an infant request
    #[must_use]
    pub const fn infant(no_of_tickets: u32) -> Self {
        Self::new(TicketType::Infant, no_of_tickets)
    }

    /// The requested ticket type
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// The number of tickets requested
    #[must_use]
    pub const fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.ticket_type, self.no_of_tickets)
    }
}
