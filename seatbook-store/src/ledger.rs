use std::collections::HashMap;

use seatbook_core::{CoreResult, LedgerError, RequestedSection};
use seatbook_shared::{is_valid_seat_number, Masked, NewUser, SeatSection, Ticket, User, SEATS_PER_SECTION};
use tracing::debug;

/// Authoritative in-memory record of every ticket on the train.
///
/// Tickets are stored twice: once by email and once per section, keyed by
/// email. Every operation keeps both views identical, and validates fully
/// before it writes anything.
///
/// `SeatLedger` is single-owner (`&mut self`); share it through
/// [`crate::SharedLedger`].
#[derive(Debug, Default)]
pub struct SeatLedger {
    tickets_by_email: HashMap<String, Ticket>,
    occupants_by_section: HashMap<SeatSection, HashMap<String, Ticket>>,
}

impl SeatLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unbooked -> Booked
    pub fn purchase_ticket(
        &mut self,
        user: NewUser,
        section: impl Into<RequestedSection>,
        seat_number: u32,
    ) -> CoreResult<Ticket> {
        if user.email.trim().is_empty() {
            return Err(LedgerError::MissingEmail);
        }

        if self.tickets_by_email.contains_key(&user.email) {
            debug!("Purchase rejected, {} already booked", Masked(&user.email));
            return Err(LedgerError::AlreadyBooked { email: user.email });
        }

        let section = section.into().resolve()?;

        if self.occupancy(section) >= SEATS_PER_SECTION as usize {
            return Err(LedgerError::SectionFull { section });
        }

        if !is_valid_seat_number(seat_number) {
            return Err(LedgerError::InvalidSeatNumber(seat_number));
        }

        if self.seat_holder(section, seat_number).is_some() {
            return Err(LedgerError::SeatTaken { section, seat_number });
        }

        let ticket = Ticket::issue(User::register(user), section, seat_number);
        self.insert(ticket.clone());

        debug_assert!(self.is_consistent());
        Ok(ticket)
    }

    pub fn receipt(&self, email: &str) -> CoreResult<Ticket> {
        self.tickets_by_email
            .get(email)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound { email: email.to_string() })
    }

    pub fn section_occupants(&self, section: SeatSection) -> HashMap<String, Ticket> {
        self.occupants_by_section.get(&section).cloned().unwrap_or_default()
    }

    /// Booked -> Unbooked. Removal is permanent.
    pub fn remove_user(&mut self, email: &str) -> CoreResult<Ticket> {
        let ticket = self
            .tickets_by_email
            .remove(email)
            .ok_or_else(|| LedgerError::NotFound { email: email.to_string() })?;

        if let Some(occupants) = self.occupants_by_section.get_mut(&ticket.seat_section) {
            occupants.remove(email);
        }

        debug_assert!(self.is_consistent());
        Ok(ticket)
    }

    /// Booked -> Booked with a new section and/or seat number.
    ///
    /// Moving a user onto the seat they already hold succeeds without change.
    pub fn relocate_user(
        &mut self,
        email: &str,
        section: impl Into<RequestedSection>,
        seat_number: u32,
    ) -> CoreResult<Ticket> {
        let current = self
            .tickets_by_email
            .get(email)
            .ok_or_else(|| LedgerError::NotFound { email: email.to_string() })?;

        let section = section.into().resolve()?;

        if !is_valid_seat_number(seat_number) {
            return Err(LedgerError::InvalidSeatNumber(seat_number));
        }

        if current.seat_section == section && current.seat_number == seat_number {
            return Ok(current.clone());
        }

        // The user's own entry never counts as a collision.
        if let Some(holder) = self.seat_holder(section, seat_number) {
            if holder != email {
                return Err(LedgerError::SeatTaken { section, seat_number });
            }
        }

        let mut ticket = match self.tickets_by_email.remove(email) {
            Some(ticket) => ticket,
            None => return Err(LedgerError::NotFound { email: email.to_string() }),
        };
        if let Some(occupants) = self.occupants_by_section.get_mut(&ticket.seat_section) {
            occupants.remove(email);
        }

        ticket.reseat(section, seat_number);
        self.insert(ticket.clone());

        debug_assert!(self.is_consistent());
        Ok(ticket)
    }

    /// Number of tickets currently seated in `section`.
    pub fn occupancy(&self, section: SeatSection) -> usize {
        self.occupants_by_section.get(&section).map_or(0, HashMap::len)
    }

    /// Total number of tickets on the train.
    pub fn len(&self) -> usize {
        self.tickets_by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets_by_email.is_empty()
    }

    /// Check that both views agree, seats are unique per section, and every
    /// seat is in range and within capacity.
    pub fn is_consistent(&self) -> bool {
        let seated: usize = self.occupants_by_section.values().map(HashMap::len).sum();
        if seated != self.tickets_by_email.len() {
            return false;
        }

        for (email, ticket) in &self.tickets_by_email {
            let mirrored = self
                .occupants_by_section
                .get(&ticket.seat_section)
                .and_then(|occupants| occupants.get(email));
            if mirrored != Some(ticket) || ticket.email() != email {
                return false;
            }
        }

        for occupants in self.occupants_by_section.values() {
            if occupants.len() > SEATS_PER_SECTION as usize {
                return false;
            }
            let mut seats: Vec<u32> = occupants.values().map(|t| t.seat_number).collect();
            if !seats.iter().all(|&n| is_valid_seat_number(n)) {
                return false;
            }
            seats.sort_unstable();
            seats.dedup();
            if seats.len() != occupants.len() {
                return false;
            }
        }

        true
    }

    fn seat_holder(&self, section: SeatSection, seat_number: u32) -> Option<&str> {
        self.occupants_by_section
            .get(&section)?
            .values()
            .find(|ticket| ticket.seat_number == seat_number)
            .map(Ticket::email)
    }

    fn insert(&mut self, ticket: Ticket) {
        let email = ticket.email().to_string();
        self.occupants_by_section
            .entry(ticket.seat_section)
            .or_default()
            .insert(email.clone(), ticket.clone());
        self.tickets_by_email.insert(email, ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> NewUser {
        NewUser::new("John", "Doe", "john.doe@example.com")
    }

    fn passenger(n: u32) -> NewUser {
        NewUser::new("Pax", &n.to_string(), &format!("pax{}@example.com", n))
    }

    #[test]
    fn test_purchase_then_receipt() {
        let mut ledger = SeatLedger::new();
        let ticket = ledger.purchase_ticket(john(), SeatSection::A, 7).unwrap();

        let receipt = ledger.receipt("john.doe@example.com").unwrap();
        assert_eq!(receipt, ticket);
        assert_eq!(receipt.seat_section, SeatSection::A);
        assert_eq!(receipt.seat_number, 7);
        assert_eq!(receipt.price_paid, 20.0);
        assert_eq!(receipt.from, "London");
        assert_eq!(receipt.to, "France");
        assert_eq!(receipt.user.first_name, "John");
    }

    #[test]
    fn test_purchase_assigns_distinct_ids() {
        let mut ledger = SeatLedger::new();
        let a = ledger.purchase_ticket(passenger(1), SeatSection::A, 1).unwrap();
        let b = ledger.purchase_ticket(passenger(2), SeatSection::A, 2).unwrap();
        assert_ne!(a.user.id, b.user.id);
    }

    #[test]
    fn test_double_booking_rejected() {
        let mut ledger = SeatLedger::new();
        ledger.purchase_ticket(john(), SeatSection::A, 1).unwrap();

        let result = ledger.purchase_ticket(john(), SeatSection::B, 30);
        assert_eq!(
            result.unwrap_err(),
            LedgerError::AlreadyBooked { email: "john.doe@example.com".to_string() }
        );
        assert_eq!(ledger.occupancy(SeatSection::B), 0);
    }

    #[test]
    fn test_missing_email_rejected() {
        let mut ledger = SeatLedger::new();
        let result = ledger.purchase_ticket(NewUser::new("John", "Doe", "  "), SeatSection::A, 1);
        assert_eq!(result.unwrap_err(), LedgerError::MissingEmail);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_seat_taken_on_purchase() {
        let mut ledger = SeatLedger::new();
        ledger.purchase_ticket(passenger(1), SeatSection::A, 5).unwrap();

        let result = ledger.purchase_ticket(passenger(2), SeatSection::A, 5);
        assert_eq!(
            result.unwrap_err(),
            LedgerError::SeatTaken { section: SeatSection::A, seat_number: 5 }
        );

        // Same number in the other section is a different seat.
        ledger.purchase_ticket(passenger(2), SeatSection::B, 5).unwrap();
    }

    #[test]
    fn test_purchase_seat_number_out_of_range() {
        let mut ledger = SeatLedger::new();
        assert_eq!(
            ledger.purchase_ticket(passenger(1), SeatSection::A, 0).unwrap_err(),
            LedgerError::InvalidSeatNumber(0)
        );
        assert_eq!(
            ledger.purchase_ticket(passenger(1), SeatSection::A, 51).unwrap_err(),
            LedgerError::InvalidSeatNumber(51)
        );
    }

    #[test]
    fn test_section_capacity() {
        let mut ledger = SeatLedger::new();
        for n in 1..=50 {
            ledger.purchase_ticket(passenger(n), SeatSection::A, n).unwrap();
        }
        assert_eq!(ledger.occupancy(SeatSection::A), 50);

        let result = ledger.purchase_ticket(passenger(51), SeatSection::A, 1);
        assert_eq!(result.unwrap_err(), LedgerError::SectionFull { section: SeatSection::A });

        ledger.purchase_ticket(passenger(51), SeatSection::B, 1).unwrap();
        assert_eq!(ledger.occupancy(SeatSection::B), 1);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_receipt_unknown_email() {
        let ledger = SeatLedger::new();
        assert_eq!(
            ledger.receipt("nobody@example.com").unwrap_err(),
            LedgerError::NotFound { email: "nobody@example.com".to_string() }
        );
    }

    #[test]
    fn test_section_occupants() {
        let mut ledger = SeatLedger::new();
        assert!(ledger.section_occupants(SeatSection::A).is_empty());

        ledger.purchase_ticket(passenger(1), SeatSection::A, 1).unwrap();
        ledger.purchase_ticket(passenger(2), SeatSection::A, 2).unwrap();
        ledger.purchase_ticket(passenger(3), SeatSection::B, 1).unwrap();

        let section_a = ledger.section_occupants(SeatSection::A);
        assert_eq!(section_a.len(), 2);
        assert_eq!(section_a["pax2@example.com"].seat_number, 2);
        assert_eq!(ledger.section_occupants(SeatSection::B).len(), 1);
    }

    #[test]
    fn test_remove_user_is_final() {
        let mut ledger = SeatLedger::new();
        ledger.purchase_ticket(john(), SeatSection::B, 4).unwrap();

        let removed = ledger.remove_user("john.doe@example.com").unwrap();
        assert_eq!(removed.seat_number, 4);
        assert!(ledger.receipt("john.doe@example.com").is_err());
        assert!(ledger.section_occupants(SeatSection::B).is_empty());

        // The seat and the email are both free again.
        ledger.purchase_ticket(john(), SeatSection::B, 4).unwrap();
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_remove_unknown_user() {
        let mut ledger = SeatLedger::new();
        assert!(matches!(
            ledger.remove_user("nobody@example.com"),
            Err(LedgerError::NotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_section_checked_after_booking() {
        let mut ledger = SeatLedger::new();
        ledger.purchase_ticket(john(), SeatSection::A, 1).unwrap();
        let unknown = || RequestedSection::Unknown("SEAT_SECTION_UNSPECIFIED".to_string());

        // Already booked wins over a bad section.
        assert!(matches!(
            ledger.purchase_ticket(john(), unknown(), 2),
            Err(LedgerError::AlreadyBooked { .. })
        ));

        // Bad section wins over a full section and a bad seat number.
        for n in 2..=50 {
            ledger.purchase_ticket(passenger(n), SeatSection::A, n).unwrap();
        }
        assert_eq!(
            ledger.purchase_ticket(passenger(51), unknown(), 99).unwrap_err(),
            LedgerError::InvalidSection("SEAT_SECTION_UNSPECIFIED".to_string())
        );
        assert_eq!(ledger.len(), 50);
    }

    #[test]
    fn test_relocate_checks_user_before_section() {
        let mut ledger = SeatLedger::new();
        ledger.purchase_ticket(john(), SeatSection::A, 3).unwrap();
        let unknown = || RequestedSection::Unknown("7".to_string());

        assert!(matches!(
            ledger.relocate_user("nobody@example.com", unknown(), 1),
            Err(LedgerError::NotFound { .. })
        ));
        // Bad section wins over a bad seat number.
        assert_eq!(
            ledger.relocate_user("john.doe@example.com", unknown(), 0).unwrap_err(),
            LedgerError::InvalidSection("7".to_string())
        );
        assert_eq!(ledger.receipt("john.doe@example.com").unwrap().seat_number, 3);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_relocate_across_sections() {
        let mut ledger = SeatLedger::new();
        let original = ledger.purchase_ticket(john(), SeatSection::A, 3).unwrap();

        let moved = ledger.relocate_user("john.doe@example.com", SeatSection::B, 9).unwrap();
        assert_eq!(moved.seat_section, SeatSection::B);
        assert_eq!(moved.seat_number, 9);
        assert_eq!(moved.user, original.user);

        assert!(!ledger.section_occupants(SeatSection::A).contains_key("john.doe@example.com"));
        assert_eq!(ledger.section_occupants(SeatSection::B)["john.doe@example.com"].seat_number, 9);
        assert_eq!(ledger.receipt("john.doe@example.com").unwrap(), moved);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_relocate_within_section() {
        let mut ledger = SeatLedger::new();
        ledger.purchase_ticket(john(), SeatSection::A, 3).unwrap();
        ledger.relocate_user("john.doe@example.com", SeatSection::A, 4).unwrap();

        assert_eq!(ledger.occupancy(SeatSection::A), 1);
        assert_eq!(ledger.receipt("john.doe@example.com").unwrap().seat_number, 4);
    }

    #[test]
    fn test_relocate_to_own_seat_is_noop() {
        let mut ledger = SeatLedger::new();
        let ticket = ledger.purchase_ticket(john(), SeatSection::A, 3).unwrap();

        let same = ledger.relocate_user("john.doe@example.com", SeatSection::A, 3).unwrap();
        assert_eq!(same, ticket);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_relocate_rejections_leave_state_untouched() {
        let mut ledger = SeatLedger::new();
        let john_ticket = ledger.purchase_ticket(john(), SeatSection::A, 3).unwrap();
        ledger.purchase_ticket(passenger(1), SeatSection::B, 9).unwrap();

        assert!(matches!(
            ledger.relocate_user("nobody@example.com", SeatSection::B, 1),
            Err(LedgerError::NotFound { .. })
        ));
        assert_eq!(
            ledger.relocate_user("john.doe@example.com", SeatSection::B, 0).unwrap_err(),
            LedgerError::InvalidSeatNumber(0)
        );
        assert_eq!(
            ledger.relocate_user("john.doe@example.com", SeatSection::B, 51).unwrap_err(),
            LedgerError::InvalidSeatNumber(51)
        );
        assert_eq!(
            ledger.relocate_user("john.doe@example.com", SeatSection::B, 9).unwrap_err(),
            LedgerError::SeatTaken { section: SeatSection::B, seat_number: 9 }
        );

        assert_eq!(ledger.receipt("john.doe@example.com").unwrap(), john_ticket);
        assert_eq!(ledger.occupancy(SeatSection::A), 1);
        assert_eq!(ledger.occupancy(SeatSection::B), 1);
        assert!(ledger.is_consistent());
    }
}
