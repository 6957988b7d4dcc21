//! Профиль пользователя: данные аккаунта, смена пароля и статистика,
//! выводимая из списка бронирований.

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::gateway;
use crate::models::{Booking, ChangePasswordRequest, UpdateProfileRequest, UserProfile};
use crate::services::bookings;
use crate::ApiContext;

/// Профиль текущего пользователя.
pub async fn get_profile(ctx: &ApiContext) -> Result<UserProfile, ApiError> {
    let response = ctx.gateway.get(&ctx.endpoints.profile()).await?;
    let response = gateway::ensure_success(response).await?;
    Ok(response.json().await?)
}

/// Обновляет профиль и перечитывает авторитетную копию с сервера.
pub async fn update_profile(
    ctx: &ApiContext,
    request: &UpdateProfileRequest,
) -> Result<UserProfile, ApiError> {
    let response = ctx.gateway.put(&ctx.endpoints.profile(), request).await?;
    gateway::ensure_success(response).await?;
    get_profile(ctx).await
}

/// Смена пароля. Совпадение и минимальная длина проверяются до
/// отправки.
pub async fn change_password(
    ctx: &ApiContext,
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), ApiError> {
    if new != confirm {
        return Err(ApiError::Validation(
            "New password and confirm password do not match!".to_string(),
        ));
    }
    if new.chars().count() < 6 {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters long!".to_string(),
        ));
    }

    let request = ChangePasswordRequest {
        current_password: current.to_string(),
        new_password: new.to_string(),
    };
    let response = ctx
        .gateway
        .put(&ctx.endpoints.profile_password(), &request)
        .await?;
    gateway::ensure_success(response).await?;
    Ok(())
}

/// Статистика аккаунта, выводимая из списка бронирований.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountStats {
    pub total_bookings: usize,
    pub confirmed_bookings: usize,
    pub upcoming_bookings: usize,
    pub total_spent: f64,
}

impl AccountStats {
    /// Чистая свёртка по списку: `today` передаётся снаружи, чтобы
    /// "предстоящие" считались детерминированно.
    pub fn from_bookings(bookings: &[Booking], today: NaiveDate) -> Self {
        AccountStats {
            total_bookings: bookings.len(),
            confirmed_bookings: bookings.iter().filter(|b| b.is_confirmed()).count(),
            upcoming_bookings: bookings
                .iter()
                .filter(|b| {
                    !b.is_cancelled() && b.date_parsed().is_some_and(|date| date >= today)
                })
                .count(),
            total_spent: bookings.iter().map(Booking::total).sum(),
        }
    }

    pub fn total_spent_label(&self) -> String {
        format!("${:.2}", self.total_spent)
    }
}

/// Загружает бронирования и считает статистику аккаунта.
pub async fn account_stats(ctx: &ApiContext, today: NaiveDate) -> Result<AccountStats, ApiError> {
    let bookings = bookings::list_bookings(ctx).await?;
    Ok(AccountStats::from_bookings(&bookings, today))
}
