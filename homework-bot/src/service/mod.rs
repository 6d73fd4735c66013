//! Service layer
//!
//! The two remote collaborators of the poll loop, behind traits so the loop
//! can be driven by in-memory fakes in tests.

mod homework;
mod notifier;

// Re-export traits
pub use homework::HomeworkSource;
pub use notifier::Notifier;

// Re-export implementations
pub use notifier::TelegramNotifier;
