use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Профиль посетителя.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub bio: Option<String>,
    pub points: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl UserProfile {
    pub fn created_date(&self) -> Option<NaiveDate> {
        let raw = self.created_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.date_naive())
            .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }
}

/// Вью-модель страницы профиля.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub country: String,
    pub member_since: String,
    pub points: Option<i64>,
    pub bio: Option<String>,
}

impl From<&UserProfile> for ProfileCard {
    fn from(profile: &UserProfile) -> Self {
        ProfileCard {
            email: profile.email.clone().unwrap_or_else(|| "N/A".to_string()),
            full_name: profile
                .name
                .clone()
                .or_else(|| profile.full_name.clone())
                .unwrap_or_else(|| "Not set".to_string()),
            phone: profile
                .phone
                .clone()
                .or_else(|| profile.phone_number.clone())
                .unwrap_or_else(|| "Not set".to_string()),
            country: profile
                .country
                .clone()
                .unwrap_or_else(|| "Not set".to_string()),
            member_since: profile
                .created_date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            points: profile.points,
            bio: profile.bio.clone(),
        }
    }
}

/// Тело запроса обновления профиля.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub country: String,
    pub bio: String,
}

/// Тело запроса смены пароля.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
