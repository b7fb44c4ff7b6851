use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{ROUTE_FROM, ROUTE_TO, SEATS_PER_SECTION, TICKET_PRICE};

/// One of the two seating zones on the train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeatSection {
    A,
    B,
}

impl SeatSection {
    pub const ALL: [SeatSection; 2] = [SeatSection::A, SeatSection::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatSection::A => "A",
            SeatSection::B => "B",
        }
    }
}

impl fmt::Display for SeatSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchaser details as supplied by the caller, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }
}

/// A purchaser as recorded on a ticket. Email is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Assign a fresh identity to a new purchaser
    pub fn register(new_user: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
        }
    }
}

/// One paid seat on the London to France route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub from: String,
    pub to: String,
    pub user: User,
    pub price_paid: f64,
    pub seat_section: SeatSection,
    pub seat_number: u32,
}

impl Ticket {
    /// Issue a ticket at the flat fare for the fixed route
    pub fn issue(user: User, seat_section: SeatSection, seat_number: u32) -> Self {
        Self {
            from: ROUTE_FROM.to_string(),
            to: ROUTE_TO.to_string(),
            user,
            price_paid: TICKET_PRICE,
            seat_section,
            seat_number,
        }
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// Move the ticket to another seat. Route, fare and holder stay the same.
    pub fn reseat(&mut self, seat_section: SeatSection, seat_number: u32) {
        self.seat_section = seat_section;
        self.seat_number = seat_number;
    }
}

/// Whether `seat_number` names a physical seat in a section.
pub fn is_valid_seat_number(seat_number: u32) -> bool {
    (1..=SEATS_PER_SECTION).contains(&seat_number)
}
