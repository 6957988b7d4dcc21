//! gateway.rs
//!
//! Этот модуль реализует шлюз аутентифицированных запросов к API музея.
//!
//! Ключевые компоненты:
//! 1.  **ApiGateway**: обёртка над `reqwest::Client`, которая к каждому
//!     запросу подмешивает заголовок `Content-Type: application/json` и,
//!     если в сессии есть токен, `Authorization: Bearer <token>`.
//! 2.  **Глобальная реакция на 401**: при любом ответе 401 токен сессии
//!     безусловно стирается и вызывается хук `on_unauthorized` (аналог
//!     редиректа на страницу входа) ещё до возврата ответа вызывающему
//!     коду. Ни одна точка вызова не повторяет эту проверку сама.
//! 3.  **error_message / ensure_success**: извлечение сообщения об ошибке
//!     из JSON-тела не-2xx ответа с запасным значением "Unknown error".
//!
//! Шлюз не делает повторов и не различает сетевые и прикладные сбои:
//! сетевая ошибка поднимается как `reqwest::Error`, а HTTP-ошибка
//! возвращается обычным ответом с не-ok статусом, который проверяет
//! вызывающий код. Публичные чтения (список экскурсий, отзывы, сведения
//! о музее) идут мимо шлюза напрямую через общий `reqwest::Client`.

use reqwest::{header, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::error::ApiError;
use crate::session::SessionStore;

/// Хук, вызываемый при получении 401.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiGateway {
    http: reqwest::Client,
    session: SessionStore,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiGateway {
    pub fn new(http: reqwest::Client, session: SessionStore) -> Self {
        Self {
            http,
            session,
            on_unauthorized: None,
        }
    }

    /// Регистрирует реакцию на истёкшую сессию.
    pub fn with_unauthorized_hook(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = Some(hook);
        self
    }

    pub async fn get(&self, url: &str) -> Result<Response, reqwest::Error> {
        self.execute(self.http.get(url)).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Response, reqwest::Error> {
        self.execute(self.http.post(url).json(body)).await
    }

    /// POST без тела (операции оплаты).
    pub async fn post_empty(&self, url: &str) -> Result<Response, reqwest::Error> {
        self.execute(self.http.post(url)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Response, reqwest::Error> {
        self.execute(self.http.put(url).json(body)).await
    }

    pub async fn delete(&self, url: &str) -> Result<Response, reqwest::Error> {
        self.execute(self.http.delete(url)).await
    }

    /// DELETE с JSON-телом (админское удаление экскурсии шлёт `{id}`).
    pub async fn delete_with<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Response, reqwest::Error> {
        self.execute(self.http.delete(url).json(body)).await
    }

    /// Выполняет запрос с подмешанными заголовками и глобальной
    /// обработкой 401.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response, reqwest::Error> {
        let mut builder = builder.header(header::CONTENT_TYPE, "application/json");

        // Токен читается на каждом запросе: он мог смениться между
        // проверкой и использованием (logout в соседней вкладке)
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("Received 401 - clearing session token");
            self.session.clear_token();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
        }

        Ok(response)
    }
}

/// Достаёт сообщение об ошибке из JSON-тела ответа.
pub async fn error_message(response: Response) -> String {
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error")
            .to_string(),
        Err(_) => "Unknown error".to_string(),
    }
}

/// Превращает не-2xx ответ в `ApiError::Api` с сообщением сервера.
pub async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Api {
            status,
            message: error_message(response).await,
        })
    }
}
