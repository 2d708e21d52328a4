//! Builders shared by unit tests across the crate.

use crate::models::interviewer::{Interviewer, Specialization};
use crate::models::user::{InterviewHistoryEntry, Location, Metadata, Preferences, User};

pub fn make_user(language: &str, education: &str, industry: &str) -> User {
    User {
        id: "user-1".to_string(),
        name: "Ana Torres".to_string(),
        email: "ana@example.com".to_string(),
        age: 31,
        gender: "Female".to_string(),
        demographic: "Urban".to_string(),
        education: education.to_string(),
        industry: industry.to_string(),
        location: Location {
            city: "Austin".to_string(),
            state: "TX".to_string(),
            country: "USA".to_string(),
        },
        interview_history: vec![],
        metadata: Metadata::default(),
        preferences: Preferences {
            preferred_language: language.to_string(),
            preferred_time: "Morning".to_string(),
            special_needs: None,
        },
    }
}

pub fn make_history(duration: f64, cost: f64, rating: f64) -> InterviewHistoryEntry {
    InterviewHistoryEntry {
        id: format!("int-{duration}-{cost}"),
        date: "2024-03-01".to_string(),
        duration,
        cost,
        interviewer: "int-0".to_string(),
        rating,
        notes: String::new(),
        outcome: "Completed".to_string(),
        transcript: None,
    }
}

/// Attaches history and keeps the metadata aggregates consistent with it.
pub fn with_history(mut user: User, history: Vec<InterviewHistoryEntry>) -> User {
    let count = history.len();
    if count > 0 {
        let n = count as f64;
        user.metadata.average_interview_cost = Some(history.iter().map(|h| h.cost).sum::<f64>() / n);
        user.metadata.average_interview_time = history.iter().map(|h| h.duration).sum::<f64>() / n;
    }
    user.metadata.total_interviews = count as u32;
    user.interview_history = history;
    user
}

pub fn make_interviewer(id: &str, languages: &[&str], specialization: Specialization) -> Interviewer {
    Interviewer {
        id: id.to_string(),
        name: format!("Interviewer {id}"),
        kind: "Senior".to_string(),
        specialization,
        experience: 5,
        availability: true,
        current_load: 2,
        max_load: 10,
        rating: 3.0,
        languages: languages.iter().map(|l| l.to_string()).collect(),
        cost_per_hour: 100.0,
    }
}
