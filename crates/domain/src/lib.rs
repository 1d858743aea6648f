pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{
    Booking, BookingDraft, BookingPatch, BookingStatus, Notification, NotificationKind,
    Participant, Profile, ProfilePatch, Registration, Role, SessionUser, TimeSlot, Toast,
    ToastAction, ToastSeverity, UserRecord,
};
pub use error::{AuthError, StorageError};
pub use ids::{BookingId, NotificationId, ToastId, UserId};
