//! Domain entities owned by the client-side stores

mod booking;
mod notification;
mod toast;
mod user;

pub use booking::{Booking, BookingDraft, BookingPatch, BookingStatus, Participant, TimeSlot};
pub use notification::{Notification, NotificationKind};
pub use toast::{Toast, ToastAction, ToastSeverity};
pub use user::{Profile, ProfilePatch, Registration, Role, SessionUser, UserRecord};

/// Field-level merge used by every patch type: a patched value wins,
/// an unspecified one keeps the prior value.
pub(crate) fn merge_field<T: Clone>(current: &Option<T>, patch: &Option<T>) -> Option<T> {
    patch.clone().or_else(|| current.clone())
}
