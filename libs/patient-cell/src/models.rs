use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub phone: String,
    pub email: String,
    /// Ayurvedic constitution (prakriti), e.g. "Vata-Pitta".
    pub constitution: String,
    pub current_condition: String,
}
