//! Операции с экскурсиями и отзывами. Чтения публичные и идут напрямую
//! через общий HTTP-клиент, без шлюза; создание отзыва - через шлюз.

use serde_json::Value;
use tracing::error;

use crate::error::ApiError;
use crate::gateway;
use crate::listing::normalize_collection;
use crate::models::{CreateReviewRequest, EntityId, Review, Tour};
use crate::ApiContext;

/// Полный список экскурсий в порядке сервера.
pub async fn list_tours(ctx: &ApiContext) -> Result<Vec<Tour>, ApiError> {
    let response = ctx.http.get(ctx.endpoints.tours()).send().await?;
    let response = gateway::ensure_success(response).await?;

    let body: Value = response.json().await?;
    Ok(normalize_collection(body, "tours")?)
}

/// Детали одной экскурсии.
pub async fn get_tour(ctx: &ApiContext, id: &EntityId) -> Result<Tour, ApiError> {
    let response = ctx.http.get(ctx.endpoints.tour_by_id(id)).send().await?;
    let response = gateway::ensure_success(response).await?;
    Ok(response.json().await?)
}

/// Детали с запасным вариантом: если запрос детализации не удался,
/// используется уже имеющаяся запись из списка.
pub async fn load_tour_details(ctx: &ApiContext, tour: &Tour) -> Tour {
    let Some(id) = tour.entity_id() else {
        return tour.clone();
    };
    match get_tour(ctx, id).await {
        Ok(detailed) => detailed,
        Err(e) => {
            error!("Error loading tour details: {:?}", e);
            tour.clone()
        }
    }
}

/// Отзывы по экскурсии.
pub async fn list_reviews(ctx: &ApiContext, tour_id: &EntityId) -> Result<Vec<Review>, ApiError> {
    let response = ctx
        .http
        .get(ctx.endpoints.tour_reviews(tour_id))
        .send()
        .await?;
    let response = gateway::ensure_success(response).await?;

    let body: Value = response.json().await?;
    Ok(normalize_collection(body, "reviews")?)
}

/// Создание отзыва (требует входа).
pub async fn create_review(
    ctx: &ApiContext,
    request: &CreateReviewRequest,
) -> Result<(), ApiError> {
    let response = ctx
        .gateway
        .post(&ctx.endpoints.create_review(), request)
        .await?;
    gateway::ensure_success(response).await?;
    Ok(())
}

/// Переход со списка к бронированию: без входа выбор не откладывается,
/// страница бронирования всё равно недоступна.
pub fn select_for_booking(ctx: &ApiContext, tour: Tour) -> Result<(), ApiError> {
    if !ctx.session.is_authenticated() {
        return Err(ApiError::Validation(
            "Please login to book a tour.".to_string(),
        ));
    }
    ctx.session.stash_selected_tour(tour);
    Ok(())
}
