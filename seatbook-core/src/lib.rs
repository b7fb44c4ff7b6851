pub mod desk;
pub mod section;

pub use desk::BookingDesk;
pub use section::RequestedSection;

use seatbook_shared::{SeatSection, SEATS_PER_SECTION};

/// Every way a ledger operation can refuse a request. All of them are raised
/// before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("User {email} already has a ticket")]
    AlreadyBooked { email: String },
    #[error("Invalid seat section: {0}")]
    InvalidSection(String),
    #[error("All {capacity} seats in section {section} are occupied", capacity = SEATS_PER_SECTION)]
    SectionFull { section: SeatSection },
    #[error("Seat {seat_number} in section {section} is already occupied")]
    SeatTaken { section: SeatSection, seat_number: u32 },
    #[error("Invalid seat number {0}, seats are numbered 1 to {max}", max = SEATS_PER_SECTION)]
    InvalidSeatNumber(u32),
    #[error("No ticket found for {email}")]
    NotFound { email: String },
    #[error("User email is required")]
    MissingEmail,
}

impl LedgerError {
    /// Stable name of the error kind, free of user data.
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerError::AlreadyBooked { .. } => "AlreadyBooked",
            LedgerError::InvalidSection(_) => "InvalidSection",
            LedgerError::SectionFull { .. } => "SectionFull",
            LedgerError::SeatTaken { .. } => "SeatTaken",
            LedgerError::InvalidSeatNumber(_) => "InvalidSeatNumber",
            LedgerError::NotFound { .. } => "NotFound",
            LedgerError::MissingEmail => "MissingEmail",
        }
    }
}

pub type CoreResult<T> = Result<T, LedgerError>;
