pub mod booking;
pub mod museum;
pub mod review;
pub mod tour;
pub mod user;

pub use booking::{Booking, BookingCard, CreateBookingRequest, PaymentMethod};
pub use museum::{MuseumInfo, UpdateMuseumRequest};
pub use review::{CreateReviewRequest, Review, ReviewCard};
pub use tour::{Highlights, Tour, TourCard, TourPayload};
pub use user::{ChangePasswordRequest, ProfileCard, UpdateProfileRequest, UserProfile};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор сущности. Сервер может прислать и число, и строку
/// (например, Mongo-подобный `_id`), клиент хранит его как есть.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(value) => write!(f, "{}", value),
            EntityId::Str(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Str(value.to_string())
    }
}
