use std::collections::HashMap;

use seatbook_shared::{NewUser, Ticket};

use crate::{CoreResult, RequestedSection};

/// The five operations the booking desk offers to the outside world.
///
/// Implementations must run each call atomically: all admission checks and
/// the mutation happen as one step, so concurrent callers observe either the
/// state before or after a call, never a mix. Sections arrive unvalidated so
/// the desk can report `InvalidSection` at its place in the check order.
pub trait BookingDesk: Send + Sync {
    /// Book `seat_number` in `section` for a user who has no ticket yet.
    fn purchase_ticket(&self, user: NewUser, section: RequestedSection, seat_number: u32) -> CoreResult<Ticket>;

    /// The ticket currently held by `email`.
    fn receipt(&self, email: &str) -> CoreResult<Ticket>;

    /// Everyone seated in `section`, keyed by email.
    fn section_occupants(&self, section: RequestedSection) -> CoreResult<HashMap<String, Ticket>>;

    /// Erase the user's ticket, returning what was removed.
    fn remove_user(&self, email: &str) -> CoreResult<Ticket>;

    /// Move the user to another seat, returning the updated ticket.
    fn relocate_user(&self, email: &str, section: RequestedSection, seat_number: u32) -> CoreResult<Ticket>;
}
