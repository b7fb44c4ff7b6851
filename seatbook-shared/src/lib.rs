pub mod models;
pub mod pii;

pub use models::ticket::{is_valid_seat_number, NewUser, SeatSection, Ticket, User};
pub use pii::Masked;

/// Departure station of the only route the train runs.
pub const ROUTE_FROM: &str = "London";
/// Arrival station of the only route the train runs.
pub const ROUTE_TO: &str = "France";
/// Flat fare charged for every seat.
pub const TICKET_PRICE: f64 = 20.0;
/// Seats per section, numbered `1..=SEATS_PER_SECTION`.
pub const SEATS_PER_SECTION: u32 = 50;
