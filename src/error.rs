use reqwest::StatusCode;
use thiserror::Error;

/// Ошибки клиентского слоя API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Сетевая ошибка: запрос не дошёл до сервера или ответ не получен.
    #[error("could not connect to server: {0}")]
    Network(#[from] reqwest::Error),

    /// Ошибка уровня приложения: сервер ответил не-2xx.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Тело ответа не удалось разобрать в ожидаемую форму.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Клиентская валидация: запрос в сеть не отправлялся.
    #[error("{0}")]
    Validation(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        // Берём первое сообщение - формы показывают ошибки по одной
        let message = err
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| err.to_string());
        ApiError::Validation(message)
    }
}
