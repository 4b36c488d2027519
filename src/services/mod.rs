// Service exports
pub mod notifier;
pub mod postgres;

pub use notifier::{MatchNotification, MatchNotifier, NotifyError};
pub use postgres::{ReportStore, StoreError};
