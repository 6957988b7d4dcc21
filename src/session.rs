use std::sync::{Arc, RwLock};

use crate::models::Tour;

// Внутреннее состояние: токен + отложенная передача выбранной экскурсии
// со страницы списка на страницу бронирования
#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    selected_tour: Option<Tour>,
}

/// Хранилище сессии. Клоны разделяют одно состояние, поэтому его можно
/// передавать во все компоненты вместо обращения к общему глобальному
/// стораджу. Токен не разбирается и не проверяется на срок действия:
/// сохранённая непустая строка считается действительной, пока сервер
/// не ответит 401.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().unwrap().token.clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.inner.write().unwrap().token = Some(token.into());
    }

    pub fn clear_token(&self) {
        self.inner.write().unwrap().token = None;
    }

    /// Признак входа: хранится непустой токен.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap()
            .token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }

    /// Откладывает выбранную экскурсию для страницы бронирования.
    pub fn stash_selected_tour(&self, tour: Tour) {
        self.inner.write().unwrap().selected_tour = Some(tour);
    }

    /// Забирает отложенную экскурсию. Слот очищается при чтении.
    pub fn take_selected_tour(&self) -> Option<Tour> {
        self.inner.write().unwrap().selected_tour.take()
    }
}
