//! Регистрация, вход и выход. Валидация формы выполняется до отправки:
//! невалидные данные в сеть не уходят.

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::error::ApiError;
use crate::gateway;
use crate::ApiContext;

/// Данные формы входа/регистрации.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Credentials {
    #[validate(email(message = "Invalid Email Format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Minimum 6 Characters"))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    pub message: Option<String>,
    pub token: Option<String>,
}

/// Регистрация нового посетителя. Токен при регистрации не сохраняется:
/// пользователь входит отдельно.
pub async fn register(ctx: &ApiContext, credentials: &Credentials) -> Result<String, ApiError> {
    credentials.validate()?;

    let response = ctx
        .http
        .post(ctx.endpoints.register())
        .json(credentials)
        .send()
        .await?;
    let response = gateway::ensure_success(response).await?;

    let body: AuthResponse = response.json().await?;
    info!("Registration succeeded for {}", credentials.email);
    Ok(body.message.unwrap_or_default())
}

/// Вход. При успехе сервер может вернуть токен - тогда он сохраняется
/// в сессии и дальше подставляется шлюзом во все запросы.
pub async fn login(ctx: &ApiContext, credentials: &Credentials) -> Result<String, ApiError> {
    credentials.validate()?;

    let response = ctx
        .http
        .post(ctx.endpoints.login())
        .json(credentials)
        .send()
        .await?;
    let response = gateway::ensure_success(response).await?;

    let body: AuthResponse = response.json().await?;
    if let Some(token) = &body.token {
        ctx.session.set_token(token.clone());
        info!("Login succeeded, session token stored");
    }
    Ok(body.message.unwrap_or_default())
}

/// Выход: стирает токен сессии. Запрос на сервер не отправляется.
pub fn logout(ctx: &ApiContext) {
    ctx.session.clear_token();
    info!("Session token cleared on logout");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_email() {
        let credentials = Credentials::new("not-an-email", "secret-1");
        let err = ApiError::from(credentials.validate().unwrap_err());
        match err {
            ApiError::Validation(message) => assert_eq!(message, "Invalid Email Format"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_short_password() {
        let credentials = Credentials::new("ana@example.com", "12345");
        let err = ApiError::from(credentials.validate().unwrap_err());
        match err {
            ApiError::Validation(message) => assert_eq!(message, "Minimum 6 Characters"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_credentials() {
        assert!(Credentials::new("ana@example.com", "secret-1")
            .validate()
            .is_ok());
    }
}
