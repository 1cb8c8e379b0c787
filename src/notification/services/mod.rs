//! Notification orchestration services.

mod notifier;

pub use notifier::StatusChangeNotifier;
