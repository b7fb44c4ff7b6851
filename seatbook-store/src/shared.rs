use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use seatbook_core::{BookingDesk, CoreResult, RequestedSection};
use seatbook_shared::{Masked, NewUser, Ticket};
use tracing::info;

use crate::ledger::SeatLedger;

/// Thread-safe handle to a single [`SeatLedger`].
///
/// One lock guards both maps and is held for the whole of each operation,
/// validation included. Clones share the same ledger.
#[derive(Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<SeatLedger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ledger(ledger: SeatLedger) -> Self {
        Self { inner: Arc::new(Mutex::new(ledger)) }
    }

    /// Run a read-only closure against a consistent snapshot of the ledger.
    pub fn inspect<R>(&self, f: impl FnOnce(&SeatLedger) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }
}

impl BookingDesk for SharedLedger {
    fn purchase_ticket(&self, user: NewUser, section: RequestedSection, seat_number: u32) -> CoreResult<Ticket> {
        let ticket = self.inner.lock().purchase_ticket(user, section, seat_number)?;
        info!(
            "Ticket issued: {} -> {}{} (user {})",
            Masked(ticket.email()),
            ticket.seat_section,
            ticket.seat_number,
            ticket.user.id
        );
        Ok(ticket)
    }

    fn receipt(&self, email: &str) -> CoreResult<Ticket> {
        self.inner.lock().receipt(email)
    }

    fn section_occupants(&self, section: RequestedSection) -> CoreResult<HashMap<String, Ticket>> {
        let section = section.resolve()?;
        Ok(self.inner.lock().section_occupants(section))
    }

    fn remove_user(&self, email: &str) -> CoreResult<Ticket> {
        let ticket = self.inner.lock().remove_user(email)?;
        info!(
            "User removed: {} freed {}{}",
            Masked(email),
            ticket.seat_section,
            ticket.seat_number
        );
        Ok(ticket)
    }

    fn relocate_user(&self, email: &str, section: RequestedSection, seat_number: u32) -> CoreResult<Ticket> {
        let ticket = self.inner.lock().relocate_user(email, section, seat_number)?;
        info!(
            "User relocated: {} -> {}{}",
            Masked(email),
            ticket.seat_section,
            ticket.seat_number
        );
        Ok(ticket)
    }
}
