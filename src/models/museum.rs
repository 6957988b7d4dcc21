use serde::{Deserialize, Serialize};

/// Сведения о музее - единственная запись, которую читают все страницы
/// и меняет только админская операция обновления.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuseumInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    #[serde(rename = "openingHours")]
    pub opening_hours: Option<String>,
}

/// Тело админского запроса обновления сведений о музее.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMuseumRequest {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub opening_hours: String,
}
