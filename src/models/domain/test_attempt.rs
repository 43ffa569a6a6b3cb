use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One submitted (question, selected label) pair. Exists only inside a
/// submission request and inside the persisted attempt record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub question_id: String,
    pub selected_answer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Sample,
    Full,
}

/// A completed scoring run, persisted append-only. Attempts are created
/// exactly once per submission and never updated or deleted.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TestAttempt {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub test_type: TestType,
    pub answers: Vec<Answer>,
    pub score: f64,
    pub total_marks: f64,
    pub time_taken: u32,
    pub submitted_at: DateTime<Utc>,
}

impl TestAttempt {
    pub fn new(
        user_id: Option<String>,
        test_type: TestType,
        answers: Vec<Answer>,
        score: f64,
        total_marks: f64,
        time_taken: u32,
    ) -> Self {
        TestAttempt {
            id: Uuid::new_v4().to_string(),
            user_id,
            test_type,
            answers,
            score,
            total_marks,
            time_taken,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_attempt(user_id: Option<String>) -> TestAttempt {
        TestAttempt::new(
            user_id,
            TestType::Sample,
            vec![Answer {
                question_id: "q-1".to_string(),
                selected_answer: "A".to_string(),
            }],
            2.0,
            3.0,
            120,
        )
    }

    #[test]
    fn test_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TestType::Sample).unwrap(),
            "\"sample\""
        );
        assert_eq!(serde_json::to_string(&TestType::Full).unwrap(), "\"full\"");
    }

    #[test]
    fn attempt_round_trip_preserves_scoring_fields() {
        let attempt = make_attempt(Some("user-1".to_string()));

        let json = serde_json::to_string(&attempt).expect("attempt should serialize");
        let parsed: TestAttempt = serde_json::from_str(&json).expect("attempt should deserialize");

        assert_eq!(parsed.score, 2.0);
        assert_eq!(parsed.total_marks, 3.0);
        assert_eq!(parsed.time_taken, 120);
        assert_eq!(parsed.answers.len(), 1);
    }

    #[test]
    fn anonymous_attempt_omits_user_id() {
        let attempt = make_attempt(None);

        let json = serde_json::to_string(&attempt).expect("attempt should serialize");
        assert!(!json.contains("user_id"));

        let parsed: TestAttempt = serde_json::from_str(&json).expect("attempt should deserialize");
        assert!(parsed.user_id.is_none());
    }

    #[test]
    fn attempts_get_distinct_ids() {
        let first = make_attempt(None);
        let second = make_attempt(None);
        assert_ne!(first.id, second.id);
    }
}
