use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Бронирование, как его отдаёт сервер. Статусы - открытое множество
/// строк (`pending`, `confirmed`, `cancelled`, ...); клиент никогда не
/// вычисляет переходы сам, только отражает присланное.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Booking {
    pub id: Option<EntityId>,
    #[serde(rename = "_id")]
    pub alt_id: Option<EntityId>,
    #[serde(rename = "bookingId")]
    pub booking_id: Option<EntityId>,
    #[serde(rename = "tourName")]
    pub tour_name: Option<String>,
    pub tour: Option<BookingTour>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(rename = "numberOfTickets")]
    pub number_of_tickets: Option<u32>,
    pub tickets: Option<u32>,
    #[serde(rename = "totalPrice")]
    pub total_price: Option<f64>,
    pub price: Option<f64>,
    pub status: Option<String>,
    #[serde(rename = "specialRequests")]
    pub special_requests: Option<String>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: Option<String>,
}

/// Вложенная форма ссылки на экскурсию внутри бронирования.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingTour {
    pub name: Option<String>,
}

impl Booking {
    /// `id`, иначе `_id`, иначе `bookingId` (вариант ответа на создание).
    pub fn entity_id(&self) -> Option<&EntityId> {
        self.id
            .as_ref()
            .or(self.alt_id.as_ref())
            .or(self.booking_id.as_ref())
    }

    /// Название экскурсии: плоское `tourName` или вложенное `tour.name`.
    pub fn tour_label(&self) -> String {
        self.tour_name
            .clone()
            .or_else(|| self.tour.as_ref().and_then(|t| t.name.clone()))
            .unwrap_or_else(|| "Tour Booking".to_string())
    }

    pub fn tickets_count(&self) -> Option<u32> {
        self.number_of_tickets.or(self.tickets)
    }

    pub fn total(&self) -> f64 {
        self.total_price.or(self.price).unwrap_or(0.0)
    }

    /// Дата в обоих встречающихся форматах: `YYYY-MM-DD` или RFC 3339.
    pub fn date_parsed(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }

    pub fn is_confirmed(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("confirmed"))
    }

    pub fn is_cancelled(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("cancelled"))
    }
}

/// Карточка бронирования для списка "мои билеты".
#[derive(Debug, Clone, PartialEq)]
pub struct BookingCard {
    pub id: Option<EntityId>,
    pub tour_name: String,
    pub date_label: String,
    pub time_label: String,
    pub tickets_label: String,
    pub total_label: String,
    pub status_label: String,
    /// Кнопки Update/Cancel показываются только для неотменённых броней.
    pub cancellable: bool,
}

impl From<&Booking> for BookingCard {
    fn from(booking: &Booking) -> Self {
        BookingCard {
            id: booking.entity_id().cloned(),
            tour_name: booking.tour_label(),
            date_label: booking
                .date_parsed()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .or_else(|| booking.date.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            time_label: booking.time.clone().unwrap_or_else(|| "N/A".to_string()),
            tickets_label: booking
                .tickets_count()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            total_label: format!("${}", booking.total()),
            status_label: booking
                .status
                .clone()
                .unwrap_or_else(|| "Pending".to_string()),
            cancellable: !booking.is_cancelled(),
        }
    }
}

/// Способ оплаты бронирования.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Points,
}

/// Тело запроса на создание бронирования.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub tour_id: EntityId,
    pub date: NaiveDate,
    pub time: String,
    pub number_of_tickets: u32,
    pub total_price: f64,
    pub special_requests: String,
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_fallback_covers_create_response() {
        let created: Booking = serde_json::from_value(json!({"bookingId": 77})).unwrap();
        assert_eq!(created.entity_id(), Some(&EntityId::Int(77)));
    }

    #[test]
    fn tour_label_reads_flat_then_nested() {
        let flat: Booking =
            serde_json::from_value(json!({"tourName": "Harbor Walk"})).unwrap();
        let nested: Booking =
            serde_json::from_value(json!({"tour": {"name": "Old Town"}})).unwrap();

        assert_eq!(flat.tour_label(), "Harbor Walk");
        assert_eq!(nested.tour_label(), "Old Town");
        assert_eq!(Booking::default().tour_label(), "Tour Booking");
    }

    #[test]
    fn date_parses_both_formats() {
        let plain = Booking {
            date: Some("2026-09-01".to_string()),
            ..Booking::default()
        };
        let rfc = Booking {
            date: Some("2026-09-01T10:00:00Z".to_string()),
            ..Booking::default()
        };
        let garbage = Booking {
            date: Some("next week".to_string()),
            ..Booking::default()
        };

        let expected = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        assert_eq!(plain.date_parsed(), Some(expected));
        assert_eq!(rfc.date_parsed(), Some(expected));
        assert_eq!(garbage.date_parsed(), None);
    }

    #[test]
    fn card_defaults_and_cancellable_flag() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 5,
            "tickets": 2,
            "price": 50.0,
            "status": "cancelled"
        }))
        .unwrap();

        let card = BookingCard::from(&booking);
        assert_eq!(card.tickets_label, "2");
        assert_eq!(card.total_label, "$50");
        assert_eq!(card.status_label, "cancelled");
        assert!(!card.cancellable);

        let empty = BookingCard::from(&Booking::default());
        assert_eq!(empty.status_label, "Pending");
        assert_eq!(empty.total_label, "$0");
        assert!(empty.cancellable);
    }

    #[test]
    fn create_request_serializes_wire_names() {
        let request = CreateBookingRequest {
            tour_id: EntityId::Int(3),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time: "14:00".to_string(),
            number_of_tickets: 3,
            total_price: 75.0,
            special_requests: String::new(),
            payment_method: PaymentMethod::Points,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["tourId"], 3);
        assert_eq!(body["date"], "2026-09-01");
        assert_eq!(body["numberOfTickets"], 3);
        assert_eq!(body["totalPrice"], 75.0);
        assert_eq!(body["paymentMethod"], "points");
    }
}
