use serde::{Deserialize, Serialize};

use super::EntityId;

/// Отзыв об экскурсии. Для клиента сущность только на чтение.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub rating: Option<u8>,
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    pub user: Option<String>,
    pub comment: Option<String>,
    pub review: Option<String>,
    pub date: Option<String>,
}

/// Вью-модель отзыва: рейтинг уже развёрнут в пятизвёздочную шкалу.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub stars: String,
    pub author: String,
    pub comment: String,
    pub date_label: Option<String>,
}

impl From<&Review> for ReviewCard {
    fn from(review: &Review) -> Self {
        // Отсутствующий рейтинг показывается как пять звёзд
        let rating = usize::from(review.rating.unwrap_or(5).min(5));
        ReviewCard {
            stars: format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating)),
            author: review
                .user_name
                .clone()
                .or_else(|| review.user.clone())
                .unwrap_or_else(|| "Anonymous".to_string()),
            comment: review
                .comment
                .clone()
                .or_else(|| review.review.clone())
                .unwrap_or_default(),
            date_label: review.date.clone(),
        }
    }
}

/// Тело запроса на создание отзыва.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub tour_id: EntityId,
    pub rating: u8,
    pub comment: String,
}
