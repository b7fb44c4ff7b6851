use std::sync::Arc;

use seatbook_core::{BookingDesk, LedgerError};
use seatbook_proto::booking::v1 as pb;
use seatbook_proto::BookingService;
use seatbook_shared::Masked;
use tonic::{Request, Response, Status};
use tracing::{info, warn};

use crate::convert::{new_user_from_wire, section_from_wire, ticket_to_wire};
use crate::error::ApiError;

pub const REMOVE_CONFIRMATION: &str = "User removed successfully";
pub const RELOCATE_CONFIRMATION: &str = "User Seat successfully modified";

/// gRPC front of the booking desk. Each RPC decodes its request, makes one
/// call into the desk and encodes the answer; it holds no state of its own.
#[derive(Clone)]
pub struct BookingApi {
    desk: Arc<dyn BookingDesk>,
}

impl BookingApi {
    pub fn new(desk: Arc<dyn BookingDesk>) -> Self {
        Self { desk }
    }
}

fn rejected(operation: &str, email: &str, err: LedgerError) -> Status {
    warn!("{} rejected for {}: {}", operation, Masked(email), err.kind());
    ApiError::from(err).into()
}

#[tonic::async_trait]
impl BookingService for BookingApi {
    async fn purchase_ticket(
        &self,
        request: Request<pb::PurchaseTicketRequest>,
    ) -> Result<Response<pb::PurchaseTicketResponse>, Status> {
        let req = request.into_inner();
        let user = req.user.map(new_user_from_wire).ok_or(ApiError::MissingField("user"))?;
        let email = user.email.clone();

        let ticket = self
            .desk
            .purchase_ticket(user, section_from_wire(req.seat_section), req.seat_number)
            .map_err(|e| rejected("PurchaseTicket", &email, e))?;

        Ok(Response::new(pb::PurchaseTicketResponse {
            ticket: Some(ticket_to_wire(ticket)),
        }))
    }

    async fn get_receipt(
        &self,
        request: Request<pb::GetReceiptRequest>,
    ) -> Result<Response<pb::GetReceiptResponse>, Status> {
        let email = request.into_inner().email;
        let ticket = self.desk.receipt(&email).map_err(|e| rejected("GetReceipt", &email, e))?;

        Ok(Response::new(pb::GetReceiptResponse {
            ticket: Some(ticket_to_wire(ticket)),
        }))
    }

    async fn list_section_occupants(
        &self,
        request: Request<pb::ListSectionOccupantsRequest>,
    ) -> Result<Response<pb::ListSectionOccupantsResponse>, Status> {
        let code = request.into_inner().seat_section;
        let occupants = self
            .desk
            .section_occupants(section_from_wire(code))
            .map_err(|e| {
                warn!("ListSectionOccupants rejected: {}", e);
                Status::from(ApiError::from(e))
            })?
            .into_iter()
            .map(|(email, ticket)| (email, ticket_to_wire(ticket)))
            .collect();

        Ok(Response::new(pb::ListSectionOccupantsResponse { occupants }))
    }

    async fn remove_user(
        &self,
        request: Request<pb::RemoveUserRequest>,
    ) -> Result<Response<pb::RemoveUserResponse>, Status> {
        let email = request.into_inner().email;
        self.desk.remove_user(&email).map_err(|e| rejected("RemoveUser", &email, e))?;

        Ok(Response::new(pb::RemoveUserResponse {
            message: REMOVE_CONFIRMATION.to_string(),
        }))
    }

    async fn relocate_user(
        &self,
        request: Request<pb::RelocateUserRequest>,
    ) -> Result<Response<pb::RelocateUserResponse>, Status> {
        let req = request.into_inner();
        let ticket = self
            .desk
            .relocate_user(&req.email, section_from_wire(req.new_seat_section), req.new_seat_number)
            .map_err(|e| rejected("RelocateUser", &req.email, e))?;
        info!("Seat change confirmed for user {}", ticket.user.id);

        Ok(Response::new(pb::RelocateUserResponse {
            message: RELOCATE_CONFIRMATION.to_string(),
        }))
    }
}
