use seatbook_core::LedgerError;
use tonic::{Code, Status};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl From<ApiError> for Status {
    fn from(err: ApiError) -> Self {
        let code = match &err {
            ApiError::Ledger(ledger) => match ledger {
                LedgerError::AlreadyBooked { .. } => Code::AlreadyExists,
                LedgerError::SeatTaken { .. } => Code::FailedPrecondition,
                LedgerError::SectionFull { .. } => Code::ResourceExhausted,
                LedgerError::NotFound { .. } => Code::NotFound,
                LedgerError::InvalidSection(_)
                | LedgerError::InvalidSeatNumber(_)
                | LedgerError::MissingEmail => Code::InvalidArgument,
            },
            ApiError::MissingField(_) => Code::InvalidArgument,
        };

        Status::new(code, err.to_string())
    }
}
