//! Seat reservation collaborator.

use crate::types::AccountId;
use std::sync::Arc;
use thiserror::Error;

/// Result of a seat reservation call
pub type ReservationResult<T> = Result<T, SeatReservationError>;

/// Failure reported by the seat reservation provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatReservationError {
    /// Not enough seats left for the request
    #[error("Not enough seats available: requested {requested}")]
    NoSeatsAvailable {
        /// Seats asked for
        requested: u32,
    },
    /// The provider could not be reached
    #[error("Seat reservation service unavailable")]
    Unavailable,
    /// Other error
    #[error("Seat reservation error: {message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Seat reservation provider trait
pub trait SeatReservationService: Send + Sync {
    /// Reserves `total_seats_to_allocate` seats for `account_id`
    ///
    /// # Errors
    ///
    /// Returns error if the seats are not reserved
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> ReservationResult<()>;
}

/// Mock seat reservation service (always succeeds for development)
#[derive(Clone, Debug, Default)]
pub struct MockSeatReservationService;

impl MockSeatReservationService {
    /// Creates a new mock seat reservation service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationService> {
        Arc::new(Self::new())
    }
}

impl SeatReservationService for MockSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> ReservationResult<()> {
        tracing::info!(
            account_id = account_id.value(),
            seats = total_seats_to_allocate,
            "Mock seats reserved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reservation_success() {
        let service = MockSeatReservationService::shared();

        assert!(service.reserve_seat(AccountId::new(1), 5).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SeatReservationError::NoSeatsAvailable { requested: 4 }.to_string(),
            "Not enough seats available: requested 4"
        );
    }
}
