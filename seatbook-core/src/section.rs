use seatbook_shared::SeatSection;

use crate::{CoreResult, LedgerError};

/// A section as the caller asked for it, not yet checked by the ledger.
///
/// The boundary decodes whatever arrives on the wire into this type and the
/// ledger decides when, relative to its other admission checks, an unknown
/// section is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedSection {
    Known(SeatSection),
    /// Raw value the caller sent, kept for the error message
    Unknown(String),
}

impl RequestedSection {
    pub fn resolve(self) -> CoreResult<SeatSection> {
        match self {
            RequestedSection::Known(section) => Ok(section),
            RequestedSection::Unknown(raw) => Err(LedgerError::InvalidSection(raw)),
        }
    }
}

impl From<SeatSection> for RequestedSection {
    fn from(section: SeatSection) -> Self {
        RequestedSection::Known(section)
    }
}
