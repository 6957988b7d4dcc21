//! summary.rs
//!
//! Живая сводка формы бронирования: название экскурсии, дата и время,
//! количество билетов и итоговая сумма. Сводка - чистая функция четырёх
//! входов и пересчитывается при каждом обращении, поэтому любое
//! изменение формы сразу отражается в следующем чтении.

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::tour::price_label;
use crate::models::{CreateBookingRequest, PaymentMethod, Tour};

/// Сводка для отображения. Все поля уже отформатированы.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub tour_label: String,
    pub date_time: String,
    pub tickets_label: String,
    pub total_label: String,
}

/// Итог считается только по денежной цене экскурсии: у экскурсии с
/// ценой в баллах денежного итога нет, сумма остаётся $0.00.
pub fn compute_summary(
    tour: Option<&Tour>,
    tickets: u32,
    date: Option<NaiveDate>,
    time: Option<&str>,
) -> BookingSummary {
    let tour_label = tour
        .map(|t| {
            let name = t
                .name
                .clone()
                .or_else(|| t.title.clone())
                .unwrap_or_else(|| "Unnamed Tour".to_string());
            format!("{} - {}", name, price_label(t))
        })
        .unwrap_or_else(|| "-".to_string());

    let date_time = match (date, time) {
        (Some(date), Some(time)) if !time.is_empty() => {
            format!("{} at {}", date.format("%Y-%m-%d"), time)
        }
        _ => "-".to_string(),
    };

    let tickets_label = if tickets > 0 {
        format!("{} ticket(s)", tickets)
    } else {
        "-".to_string()
    };

    let total = match tour {
        Some(t) if tickets > 0 => t.price.unwrap_or(0.0) * f64::from(tickets),
        _ => 0.0,
    };

    BookingSummary {
        tour_label,
        date_time,
        tickets_label,
        total_label: format!("${:.2}", total),
    }
}

/// Состояние формы бронирования.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    tour: Option<Tour>,
    tickets: u32,
    date: Option<NaiveDate>,
    time: Option<String>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tour(&mut self, tour: Option<Tour>) {
        self.tour = tour;
    }

    pub fn set_tickets(&mut self, tickets: u32) {
        self.tickets = tickets;
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: Option<String>) {
        self.time = time;
    }

    pub fn selected_tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Актуальная сводка по текущим значениям формы.
    pub fn summary(&self) -> BookingSummary {
        compute_summary(
            self.tour.as_ref(),
            self.tickets,
            self.date,
            self.time.as_deref(),
        )
    }

    /// Собирает тело запроса на создание бронирования. Неполная форма
    /// не отправляется.
    pub fn to_request(
        &self,
        special_requests: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Result<CreateBookingRequest, ApiError> {
        let tour = self
            .tour
            .as_ref()
            .ok_or_else(|| ApiError::Validation("Please select a tour.".to_string()))?;
        let tour_id = tour
            .entity_id()
            .cloned()
            .ok_or_else(|| ApiError::Validation("Selected tour has no id.".to_string()))?;
        let date = self
            .date
            .ok_or_else(|| ApiError::Validation("Please pick a date.".to_string()))?;
        let time = self
            .time
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Validation("Please pick a time.".to_string()))?;
        if self.tickets == 0 {
            return Err(ApiError::Validation(
                "Number of tickets must be at least 1.".to_string(),
            ));
        }

        Ok(CreateBookingRequest {
            tour_id,
            date,
            time,
            number_of_tickets: self.tickets,
            total_price: tour.price.unwrap_or(0.0) * f64::from(self.tickets),
            special_requests: special_requests.into(),
            payment_method,
        })
    }
}
