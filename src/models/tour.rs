use serde::{Deserialize, Serialize};

use super::EntityId;

/// Экскурсия в том виде, в каком её отдаёт сервер. Контракт нестрогий:
/// любое поле может отсутствовать, часть полей приходит под
/// альтернативными именами (`name`/`title`, `guide`/`guideName`,
/// `maxCapacity`/`capacity`, `id`/`_id`). Сырые варианты сохраняются
/// как есть, а цепочки подстановок собраны в одном месте - в
/// преобразовании во вью-модель [`TourCard`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tour {
    pub id: Option<EntityId>,
    #[serde(rename = "_id")]
    pub alt_id: Option<EntityId>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub guide: Option<String>,
    #[serde(rename = "guideName")]
    pub guide_name: Option<String>,
    pub duration: Option<String>,
    pub language: Option<String>,
    pub price: Option<f64>,
    pub points: Option<i64>,
    #[serde(rename = "maxCapacity")]
    pub max_capacity: Option<u32>,
    pub capacity: Option<u32>,
    pub description: Option<String>,
    pub highlights: Option<Highlights>,
}

impl Tour {
    /// `id`, иначе `_id`.
    pub fn entity_id(&self) -> Option<&EntityId> {
        self.id.as_ref().or(self.alt_id.as_ref())
    }
}

/// Список достопримечательностей: сервер присылает либо одну строку,
/// либо массив.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Highlights {
    One(String),
    Many(Vec<String>),
}

impl Highlights {
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Highlights::One(item) => vec![item.clone()],
            Highlights::Many(items) => items.clone(),
        }
    }
}

/// Карточка экскурсии - типизированная вью-модель списка. Все цепочки
/// подстановок применяются здесь, один раз.
#[derive(Debug, Clone, PartialEq)]
pub struct TourCard {
    /// Идентификатор записи: обработчики взаимодействия привязываются
    /// по нему, а не по позиции в списке.
    pub id: Option<EntityId>,
    pub name: String,
    pub guide: String,
    pub duration: String,
    pub language: String,
    pub capacity: String,
    /// Описание, усечённое до 150 символов.
    pub description: Option<String>,
    pub price_label: String,
    pub highlights: Vec<String>,
}

impl From<&Tour> for TourCard {
    fn from(tour: &Tour) -> Self {
        TourCard {
            id: tour.entity_id().cloned(),
            name: tour
                .name
                .clone()
                .or_else(|| tour.title.clone())
                .unwrap_or_else(|| "Unnamed Tour".to_string()),
            guide: tour
                .guide
                .clone()
                .or_else(|| tour.guide_name.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            duration: tour
                .duration
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            language: tour
                .language
                .clone()
                .unwrap_or_else(|| "English".to_string()),
            capacity: tour
                .max_capacity
                .or(tour.capacity)
                .map(|c| c.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            description: tour
                .description
                .as_deref()
                .map(|text| truncate_chars(text, 150)),
            price_label: price_label(tour),
            highlights: tour
                .highlights
                .as_ref()
                .map(Highlights::to_list)
                .unwrap_or_default(),
        }
    }
}

/// Ценник: `$25`, `120 points` или `Price TBA`. Нулевая цена считается
/// неуказанной.
pub fn price_label(tour: &Tour) -> String {
    match (tour.price, tour.points) {
        (Some(price), _) if price > 0.0 => format!("${}", price),
        (_, Some(points)) if points > 0 => format!("{} points", points),
        _ => "Price TBA".to_string(),
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let cut: String = text.chars().take(limit).collect();
        format!("{}...", cut)
    }
}

/// Тело запроса админских операций создания/обновления экскурсии.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPayload {
    /// Присутствует только при обновлении.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub guide: String,
    pub duration: String,
    pub language: String,
    pub price: f64,
    pub max_capacity: u32,
    pub description: String,
}
