use std::sync::Arc;

use seatbook_core::BookingDesk;
use seatbook_proto::BookingServiceServer;

pub mod convert;
pub mod error;
pub mod service;

pub use error::ApiError;
pub use service::BookingApi;

/// The tonic service wrapping `desk`, ready for `Server::add_service`.
pub fn booking_service(desk: Arc<dyn BookingDesk>) -> BookingServiceServer<BookingApi> {
    BookingServiceServer::new(BookingApi::new(desk))
}
