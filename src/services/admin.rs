//! Административные операции: управление экскурсиями, создание
//! администраторов и сведения о музее. Все изменения идут через шлюз;
//! чтение сведений о музее публичное.

use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::error::ApiError;
use crate::gateway;
use crate::models::{EntityId, MuseumInfo, TourPayload, UpdateMuseumRequest};
use crate::ApiContext;

/// Публичные сведения о музее (главная страница).
pub async fn fetch_museum_info(ctx: &ApiContext) -> Result<MuseumInfo, ApiError> {
    let response = ctx.http.get(ctx.endpoints.home()).send().await?;
    let response = gateway::ensure_success(response).await?;
    Ok(response.json().await?)
}

/// Обновление сведений о музее.
pub async fn update_museum_info(
    ctx: &ApiContext,
    request: &UpdateMuseumRequest,
) -> Result<(), ApiError> {
    let response = ctx.gateway.put(&ctx.endpoints.admin_home(), request).await?;
    gateway::ensure_success(response).await?;
    info!("Museum info updated");
    Ok(())
}

/// Создание экскурсии.
pub async fn create_tour(ctx: &ApiContext, payload: &TourPayload) -> Result<(), ApiError> {
    let response = ctx
        .gateway
        .post(&ctx.endpoints.admin_tours(), payload)
        .await?;
    gateway::ensure_success(response).await?;
    info!("Tour '{}' created", payload.name);
    Ok(())
}

/// Обновление экскурсии: идентификатор передаётся в теле.
pub async fn update_tour(ctx: &ApiContext, payload: &TourPayload) -> Result<(), ApiError> {
    if payload.id.is_none() {
        return Err(ApiError::Validation(
            "Tour id is required for update.".to_string(),
        ));
    }

    let response = ctx
        .gateway
        .put(&ctx.endpoints.admin_tours(), payload)
        .await?;
    gateway::ensure_success(response).await?;
    info!("Tour '{}' updated", payload.name);
    Ok(())
}

#[derive(Debug, Serialize)]
struct DeleteTourRequest<'a> {
    id: &'a EntityId,
}

/// Удаление экскурсии: адрес коллекции общий, идентификатор в теле.
pub async fn delete_tour(ctx: &ApiContext, id: &EntityId) -> Result<(), ApiError> {
    let response = ctx
        .gateway
        .delete_with(&ctx.endpoints.admin_tours(), &DeleteTourRequest { id })
        .await?;
    gateway::ensure_success(response).await?;
    info!("Tour {} deleted", id);
    Ok(())
}

/// Данные формы создания администратора.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(email(message = "Invalid Email Format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Minimum 6 Characters"))]
    pub password: String,
    pub role: String,
}

/// Создание администратора (валидация до отправки).
pub async fn create_admin(ctx: &ApiContext, request: &CreateAdminRequest) -> Result<(), ApiError> {
    request.validate()?;

    let response = ctx
        .gateway
        .post(&ctx.endpoints.admin_users(), request)
        .await?;
    gateway::ensure_success(response).await?;
    info!("Admin user {} created", request.email);
    Ok(())
}
