//! Hand-written test doubles for the delivery seam and the notification sink.

pub mod mock_email_sender;
pub mod recording_notifier;

pub use mock_email_sender::{MockEmailSender, MockResponse};
pub use recording_notifier::RecordingNotifier;
