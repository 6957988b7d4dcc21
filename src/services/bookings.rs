//! Бронирования: список, создание, оплата и отмена. Все операции идут
//! через аутентифицированный шлюз.

use serde_json::Value;
use tracing::{error, info};

use crate::error::ApiError;
use crate::gateway;
use crate::listing::normalize_collection;
use crate::models::{Booking, CreateBookingRequest, EntityId, PaymentMethod};
use crate::ApiContext;

/// Бронирования текущего пользователя в порядке сервера.
pub async fn list_bookings(ctx: &ApiContext) -> Result<Vec<Booking>, ApiError> {
    let response = ctx.gateway.get(&ctx.endpoints.bookings()).await?;
    let response = gateway::ensure_success(response).await?;

    let body: Value = response.json().await?;
    Ok(normalize_collection(body, "bookings")?)
}

/// Создаёт бронирование и возвращает его идентификатор.
pub async fn create_booking(
    ctx: &ApiContext,
    request: &CreateBookingRequest,
) -> Result<EntityId, ApiError> {
    let response = ctx.gateway.post(&ctx.endpoints.bookings(), request).await?;
    let response = gateway::ensure_success(response).await?;

    let created: Booking = response.json().await?;
    created
        .entity_id()
        .cloned()
        .ok_or_else(|| ApiError::Decode("booking id missing in response".to_string()))
}

/// Проводит оплату бронирования. Сбой оплаты логируется, но не считается
/// ошибкой потока бронирования: бронь уже создана, оплату можно
/// повторить позже.
pub async fn pay_booking(ctx: &ApiContext, id: &EntityId, method: PaymentMethod) {
    let url = match method {
        PaymentMethod::Cash => ctx.endpoints.pay_cash(id),
        PaymentMethod::Points => ctx.endpoints.pay_points(id),
    };

    match ctx.gateway.post_empty(&url).await {
        Ok(response) if !response.status().is_success() => {
            error!("Payment processing failed: {}", response.status());
        }
        Err(e) => {
            error!("Error processing payment: {:?}", e);
        }
        Ok(_) => {}
    }
}

/// Полный поток бронирования со страницы билетов.
pub async fn book_and_pay(
    ctx: &ApiContext,
    request: &CreateBookingRequest,
) -> Result<EntityId, ApiError> {
    // 1. Создаём бронирование
    let booking_id = create_booking(ctx, request).await?;
    info!("Booking {} created", booking_id);

    // 2. Проводим оплату выбранным способом
    pay_booking(ctx, &booking_id, request.payment_method).await;

    Ok(booking_id)
}

/// Отмена бронирования.
pub async fn cancel_booking(ctx: &ApiContext, id: &EntityId) -> Result<(), ApiError> {
    let response = ctx.gateway.delete(&ctx.endpoints.booking_by_id(id)).await?;
    gateway::ensure_success(response).await?;
    info!("Booking {} cancelled", id);
    Ok(())
}
