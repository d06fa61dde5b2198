//! Portal Notify Library
//!
//! Templated-message dispatch for the upload portal. The `Notifier` trait
//! accepts one structured parameter set summarizing a successful upload
//! batch; the EmailJS backend delivers it as a transactional email.
//! Notification is best-effort relative to the upload obligation: callers
//! log failures and move on.

pub mod emailjs;
pub mod params;
pub mod traits;

pub use emailjs::EmailJsNotifier;
pub use params::NotificationParams;
pub use traits::{DeliveryReceipt, Notifier, NotifyError, NotifyResult};
