pub mod app_config;
pub mod ledger;
pub mod shared;

pub use app_config::AppConfig;
pub use ledger::SeatLedger;
pub use shared::SharedLedger;
