//! listing.rs
//!
//! Конвейер списков, общий для экскурсий, бронирований и отзывов:
//!
//! 1.  **Нормализация**: тело коллекции приходит либо голым массивом,
//!     либо объектом с именованным полем (`tours`, `bookings`,
//!     `reviews`); обе формы сводятся к одной упорядоченной
//!     последовательности с сохранением порядка сервера.
//! 2.  **Машина состояний** `Idle -> Loading -> {Populated | Empty |
//!     Error}`: пустой результат и ошибка - разные терминальные
//!     состояния с разными заглушками.
//! 3.  **Счётчик поколений**: каждый запуск загрузки получает новый
//!     номер; завершение с устаревшим номером отбрасывается, поэтому
//!     поздний ответ вытесненного запроса не затирает свежие данные.
//! 4.  **Фильтр списка экскурсий**: подстрока без учёта регистра по
//!     названию/описанию плюс точное совпадение гида. Фильтр всегда
//!     применяется к полному загруженному набору и пересчитывает
//!     Populated/Empty без повторного входа в Loading.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::models::tour::TourCard;
use crate::models::{EntityId, Tour};

/// Состояние представления списка.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Idle,
    Loading,
    Populated(Vec<T>),
    Empty,
    Error(String),
}

/// Нормализация тела коллекции: голый массив или объект с именованным
/// полем-коллекцией. Объект без такого поля считается пустой коллекцией.
pub fn normalize_collection<T: DeserializeOwned>(
    body: Value,
    key: &str,
) -> Result<Vec<T>, serde_json::Error> {
    let items = match body {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => map.remove(key).unwrap_or_else(|| Value::Array(Vec::new())),
        _ => Value::Array(Vec::new()),
    };
    serde_json::from_value(items)
}

/// Представление одного списка со счётчиком поколений.
#[derive(Debug)]
pub struct ListView<T> {
    state: ListState<T>,
    generation: u64,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            state: ListState::Idle,
            generation: 0,
        }
    }
}

impl<T> ListView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// Переход в Loading. Возвращает номер поколения этого запроса;
    /// его нужно передать в [`ListView::resolve`].
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = ListState::Loading;
        self.generation
    }

    /// Завершение загрузки. Результат устаревшего поколения игнорируется.
    pub fn resolve(&mut self, generation: u64, outcome: Result<Vec<T>, String>) {
        if generation != self.generation {
            debug!(
                "Discarding stale list response (generation {} != {})",
                generation, self.generation
            );
            return;
        }

        self.state = match outcome {
            Ok(items) if items.is_empty() => ListState::Empty,
            Ok(items) => ListState::Populated(items),
            Err(message) => {
                error!("Error loading list: {}", message);
                ListState::Error(message)
            }
        };
    }

    /// Полный загруженный набор (пустой срез вне Populated).
    pub fn items(&self) -> &[T] {
        match &self.state {
            ListState::Populated(items) => items,
            _ => &[],
        }
    }
}

// --- Фильтр списка экскурсий ---

/// Пустой запрос нейтрален; иначе подстрока без учёта регистра по
/// `name`/`title`/`description`.
pub fn matches_query(tour: &Tour, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let hit = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|value| value.to_lowercase().contains(&query))
    };
    hit(&tour.name) || hit(&tour.title) || hit(&tour.description)
}

/// Пустой фильтр гида нейтрален; иначе точное совпадение с
/// `guide`/`guideName`.
pub fn matches_guide(tour: &Tour, guide: &str) -> bool {
    if guide.is_empty() {
        return true;
    }
    tour.guide.as_deref() == Some(guide) || tour.guide_name.as_deref() == Some(guide)
}

pub fn matches_filters(tour: &Tour, query: &str, guide: &str) -> bool {
    matches_query(tour, query) && matches_guide(tour, guide)
}

/// Листинг экскурсий: полный набор плюс текущие значения фильтра.
/// Смена фильтра не перезагружает данные - видимое состояние каждый раз
/// пересчитывается от полного набора.
#[derive(Debug, Default)]
pub struct TourListing {
    view: ListView<Tour>,
    query: String,
    guide: String,
}

impl TourListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> u64 {
        self.view.begin_load()
    }

    pub fn resolve(&mut self, generation: u64, outcome: Result<Vec<Tour>, String>) {
        self.view.resolve(generation, outcome);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_guide(&mut self, guide: impl Into<String>) {
        self.guide = guide.into();
    }

    /// Отфильтрованные записи в порядке сервера.
    pub fn visible(&self) -> Vec<&Tour> {
        self.view
            .items()
            .iter()
            .filter(|tour| matches_filters(tour, &self.query, &self.guide))
            .collect()
    }

    /// Поиск записи по идентификатору: обработчики взаимодействия
    /// диспетчеризуются по id, а не по позиции в отрисованном списке.
    pub fn find_by_id(&self, id: &EntityId) -> Option<&Tour> {
        self.view
            .items()
            .iter()
            .find(|tour| tour.entity_id() == Some(id))
    }

    /// Видимое состояние с уже применённым фильтром и отрисованными
    /// карточками. Непустой набор, отфильтрованный в ноль, показывается
    /// как Empty.
    pub fn snapshot(&self) -> ListState<TourCard> {
        match self.view.state() {
            ListState::Idle => ListState::Idle,
            ListState::Loading => ListState::Loading,
            ListState::Empty => ListState::Empty,
            ListState::Error(message) => ListState::Error(message.clone()),
            ListState::Populated(_) => {
                let cards: Vec<TourCard> =
                    self.visible().into_iter().map(TourCard::from).collect();
                if cards.is_empty() {
                    ListState::Empty
                } else {
                    ListState::Populated(cards)
                }
            }
        }
    }
}
