//! Mapping between the protobuf contract and the ledger's domain types.

use seatbook_core::RequestedSection;
use seatbook_proto::booking::v1 as pb;
use seatbook_shared::{NewUser, SeatSection, Ticket};

/// Decode a wire section code. Unknown codes and the unspecified zero value
/// are passed on as `Unknown` for the ledger to reject.
pub fn section_from_wire(code: i32) -> RequestedSection {
    match pb::SeatSection::try_from(code) {
        Ok(pb::SeatSection::A) => RequestedSection::Known(SeatSection::A),
        Ok(pb::SeatSection::B) => RequestedSection::Known(SeatSection::B),
        Ok(other) => RequestedSection::Unknown(other.as_str_name().to_string()),
        Err(_) => RequestedSection::Unknown(code.to_string()),
    }
}

pub fn section_to_wire(section: SeatSection) -> pb::SeatSection {
    match section {
        SeatSection::A => pb::SeatSection::A,
        SeatSection::B => pb::SeatSection::B,
    }
}

pub fn new_user_from_wire(user: pb::User) -> NewUser {
    NewUser {
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
    }
}

pub fn ticket_to_wire(ticket: Ticket) -> pb::Ticket {
    pb::Ticket {
        from: ticket.from,
        to: ticket.to,
        user: Some(pb::User {
            id: ticket.user.id.to_string(),
            first_name: ticket.user.first_name,
            last_name: ticket.user.last_name,
            email: ticket.user.email,
        }),
        price_paid: ticket.price_paid,
        seat_section: section_to_wire(ticket.seat_section) as i32,
        seat_number: ticket.seat_number,
    }
}
