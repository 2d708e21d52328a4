use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewTranscript {
    pub title: String,
    pub content: String,
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    pub duration: u32,
    #[serde(default)]
    pub interviewer_notes: String,
}

/// A single past interview. `duration` is in minutes, `rating` on a 0–5 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewHistoryEntry {
    pub id: String,
    pub date: String,
    pub duration: f64,
    pub cost: f64,
    pub interviewer: String,
    pub rating: f64,
    #[serde(default)]
    pub notes: String,
    pub outcome: String,
    #[serde(default)]
    pub transcript: Option<InterviewTranscript>,
}

/// Aggregates precomputed by the caller. `average_interview_cost` may be absent
/// for users who have never been interviewed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub average_interview_time: f64,
    #[serde(default)]
    pub average_interview_cost: Option<f64>,
    #[serde(default)]
    pub total_interviews: u32,
    #[serde(default)]
    pub last_interview_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub preferred_language: String,
    #[serde(default)]
    pub preferred_time: String,
    #[serde(default)]
    pub special_needs: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub age: u32,
    pub gender: String,
    pub demographic: String,
    pub education: String,
    pub industry: String,
    pub location: Location,
    #[serde(default)]
    pub interview_history: Vec<InterviewHistoryEntry>,
    #[serde(default)]
    pub metadata: Metadata,
    pub preferences: Preferences,
}
