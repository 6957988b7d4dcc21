use std::fmt::Display;

/// Реестр адресов API: все потребители получают URL только отсюда,
/// поэтому смена базового адреса не трогает вызывающий код.
#[derive(Debug, Clone)]
pub struct ApiEndpoints {
    base_url: String,
}

impl ApiEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Без завершающего слэша, чтобы конкатенация была предсказуемой
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // --- Аутентификация ---

    pub fn register(&self) -> String {
        format!("{}/api/v1/auth/register", self.base_url)
    }

    pub fn login(&self) -> String {
        format!("{}/api/v1/auth/login", self.base_url)
    }

    // --- Профиль пользователя ---

    pub fn profile(&self) -> String {
        format!("{}/api/v1/users/profile", self.base_url)
    }

    pub fn profile_password(&self) -> String {
        format!("{}/api/v1/users/profile/password", self.base_url)
    }

    // --- Экскурсии и отзывы ---

    pub fn tours(&self) -> String {
        format!("{}/api/v1/tours", self.base_url)
    }

    pub fn tour_by_id(&self, id: impl Display) -> String {
        format!("{}/api/v1/tours/{}", self.base_url, id)
    }

    pub fn tour_reviews(&self, tour_id: impl Display) -> String {
        format!("{}/api/v1/tours/{}/reviews", self.base_url, tour_id)
    }

    pub fn create_review(&self) -> String {
        format!("{}/api/v1/reviews", self.base_url)
    }

    // --- Бронирования ---

    pub fn bookings(&self) -> String {
        format!("{}/api/v1/bookings", self.base_url)
    }

    pub fn booking_by_id(&self, id: impl Display) -> String {
        format!("{}/api/v1/bookings/{}", self.base_url, id)
    }

    pub fn pay_cash(&self, id: impl Display) -> String {
        format!("{}/api/v1/bookings/{}/pay-cash", self.base_url, id)
    }

    pub fn pay_points(&self, id: impl Display) -> String {
        format!("{}/api/v1/bookings/{}/pay-points", self.base_url, id)
    }

    // --- Информация о музее ---

    pub fn home(&self) -> String {
        format!("{}/api/v1/home", self.base_url)
    }

    // --- Администрирование ---

    pub fn admin_users(&self) -> String {
        format!("{}/api/v1/admin/users", self.base_url)
    }

    pub fn admin_tours(&self) -> String {
        format!("{}/api/v1/admin/tours", self.base_url)
    }

    pub fn admin_home(&self) -> String {
        format!("{}/api/v1/admin/home", self.base_url)
    }
}
