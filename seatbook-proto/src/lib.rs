//! Generated gRPC contract for the booking service.

pub mod booking {
    pub mod v1 {
        tonic::include_proto!("booking.v1");
    }
}

pub use booking::v1::booking_service_client::BookingServiceClient;
pub use booking::v1::booking_service_server::{BookingService, BookingServiceServer};
