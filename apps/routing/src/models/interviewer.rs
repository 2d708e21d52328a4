use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specialization {
    Technical,
    Specialist,
    Cultural,
    Leadership,
    General,
    /// Any specialization outside the known set; scored as a mismatch.
    #[serde(other)]
    Other,
}

/// A candidate interviewer as supplied by the calling service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interviewer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub specialization: Specialization,
    /// Years of experience.
    pub experience: u32,
    pub availability: bool,
    pub current_load: i32,
    pub max_load: i32,
    pub rating: f64,
    pub languages: Vec<String>,
    pub cost_per_hour: f64,
}
