//! JSON request/response boundary over the calculators.
//!
//! Requests use the camelCase field names of the web forms. Engine failures
//! become a non-2xx status with a `{kind, code, message}` body.

pub mod requests;

use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

use crate::age::parse_date;
use crate::config::Settings;
use crate::eligibility::{
    age_report, attempts_report, check_exam, check_full_eligibility, check_upsc_eligibility, Exam,
    Qualification,
};
use crate::error::ValidationError;
use crate::scoring::{calculate_final_marks, calculate_score, evaluate_csat, evaluate_prelims};
use crate::syllabus::{progress_from_ids, progress_percent, toggle_topic, total_topics};
use requests::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Age,
    Upsc,
    Attempts,
    Eligibility,
    Exam,
    Score,
    Csat,
    Prelims,
    Marks,
    Syllabus,
}

impl Endpoint {
    pub const ALL: [Endpoint; 10] = [
        Endpoint::Age,
        Endpoint::Upsc,
        Endpoint::Attempts,
        Endpoint::Eligibility,
        Endpoint::Exam,
        Endpoint::Score,
        Endpoint::Csat,
        Endpoint::Prelims,
        Endpoint::Marks,
        Endpoint::Syllabus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Age => "age",
            Endpoint::Upsc => "upsc",
            Endpoint::Attempts => "attempts",
            Endpoint::Eligibility => "eligibility",
            Endpoint::Exam => "exam",
            Endpoint::Score => "score",
            Endpoint::Csat => "csat",
            Endpoint::Prelims => "prelims",
            Endpoint::Marks => "marks",
            Endpoint::Syllabus => "syllabus",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    /// Accepts bare names and `/api/calculate/<name>` paths.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches("/api/calculate/").trim_matches('/');
        Endpoint::ALL
            .into_iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| format!("Unknown endpoint: {}", s))
    }
}

#[derive(Error, Debug)]
enum ApiError {
    #[error("Malformed request body: {0}")]
    BadRequest(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to encode response: {0}")]
    Encode(serde_json::Error),
}

/// Status code and JSON body, as an HTTP layer would send them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, kind: &str, code: Option<&str>, message: String) -> Self {
        let mut body = json!({ "kind": kind, "message": message });
        if let Some(code) = code {
            body["code"] = Value::String(code.to_string());
        }
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Dispatch one request. Never panics; every failure is an error response.
pub fn handle(endpoint: &str, body: &str, settings: &Settings) -> ApiResponse {
    let endpoint = match endpoint.parse::<Endpoint>() {
        Ok(e) => e,
        Err(message) => return ApiResponse::error(404, "not_found", None, message),
    };

    debug!("Handling {} request ({} bytes)", endpoint, body.len());

    match dispatch(endpoint, body, settings) {
        Ok(value) => ApiResponse::ok(value),
        Err(ApiError::BadRequest(e)) => {
            debug!("Rejected malformed {} request: {}", endpoint, e);
            ApiResponse::error(400, "bad_request", None, format!("Malformed request body: {}", e))
        }
        Err(ApiError::Validation(e)) => {
            debug!("Validation failed for {} request: {}", endpoint, e);
            ApiResponse::error(422, "validation_error", Some(e.kind()), e.to_string())
        }
        Err(e @ ApiError::Encode(_)) => {
            warn!("{}", e);
            ApiResponse::error(500, "internal_error", None, e.to_string())
        }
    }
}

fn dispatch(endpoint: Endpoint, body: &str, settings: &Settings) -> Result<Value, ApiError> {
    match endpoint {
        Endpoint::Age => {
            let req: AgeRequest = serde_json::from_str(body)?;
            let birth = parse_date(&req.date_of_birth)?;
            let cutoff =
                Exam::UpscCse.resolve_cutoff(req.cutoff_date.as_deref(), settings.exam_year)?;
            encode(&age_report(birth, cutoff, req.category)?)
        }
        Endpoint::Upsc => {
            let req: UpscRequest = serde_json::from_str(body)?;
            let birth = parse_date(&req.date_of_birth)?;
            let cutoff =
                Exam::UpscCse.resolve_cutoff(req.cutoff_date.as_deref(), settings.exam_year)?;
            let attempts = count("attempts", req.attempts)?;
            encode(&check_upsc_eligibility(birth, cutoff, req.category, attempts)?)
        }
        Endpoint::Attempts => {
            let req: AttemptsRequest = serde_json::from_str(body)?;
            let used = count("usedAttempts", req.used_attempts)?;
            let age = count("currentAge", req.current_age)?;
            encode(&attempts_report(req.category, used, age))
        }
        Endpoint::Eligibility => {
            let req: EligibilityRequest = serde_json::from_str(body)?;
            let birth = parse_date(&req.date_of_birth)?;
            let cutoff =
                Exam::UpscCse.resolve_cutoff(req.cutoff_date.as_deref(), settings.exam_year)?;
            let attempts = count("usedAttempts", req.used_attempts)?;
            let qualification = Qualification::parse(&req.education);
            encode(&check_full_eligibility(
                birth,
                cutoff,
                req.category,
                &qualification,
                attempts,
            )?)
        }
        Endpoint::Exam => {
            let req: ExamRequest = serde_json::from_str(body)?;
            let exam: Exam = req.exam.parse()?;
            let birth = parse_date(&req.date_of_birth)?;
            let cutoff = exam.resolve_cutoff(req.cutoff_date.as_deref(), settings.exam_year)?;
            let qualification =
                Qualification::parse(req.education.as_deref().unwrap_or("bachelor"));
            encode(&check_exam(exam, birth, cutoff, req.category, &qualification)?)
        }
        Endpoint::Score => {
            let req: ScoreRequest = serde_json::from_str(body)?;
            let correct = count("correctAnswers", req.correct_answers)?;
            let wrong = count("wrongAnswers", req.wrong_answers)?;
            let total = match req.total_questions {
                Some(t) => count("totalQuestions", t)?,
                None => settings.scoring.total_questions(),
            };
            encode(&calculate_score(
                correct,
                wrong,
                total,
                &settings.scoring.gs_scheme(),
            )?)
        }
        Endpoint::Csat => {
            let req: CsatRequest = serde_json::from_str(body)?;
            encode(&evaluate_csat(
                count("correctAnswers", req.correct_answers)?,
                count("wrongAnswers", req.wrong_answers)?,
                count("notAttempted", req.not_attempted)?,
                &settings.scoring,
            )?)
        }
        Endpoint::Prelims => {
            let req: PrelimsRequest = serde_json::from_str(body)?;
            encode(&evaluate_prelims(
                count("gs1Correct", req.gs1_correct)?,
                count("gs1Wrong", req.gs1_wrong)?,
                count("csatCorrect", req.csat_correct)?,
                count("csatWrong", req.csat_wrong)?,
                &settings.scoring,
            )?)
        }
        Endpoint::Marks => {
            let req: MarksRequest = serde_json::from_str(body)?;
            if let Some(prelims) = req.prelims_marks {
                debug!("Ignoring prelimsMarks={} (not part of final merit)", prelims);
            }
            encode(&calculate_final_marks(req.mains_marks, req.interview_marks)?)
        }
        Endpoint::Syllabus => {
            let req: SyllabusRequest = serde_json::from_str(body)?;
            let mut progress = progress_from_ids(&req.completed)?;
            if let Some(ref topic) = req.toggle {
                progress = toggle_topic(&progress, topic)?;
            }
            Ok(json!({
                "completed": &progress,
                "completedCount": progress.len(),
                "totalTopics": total_topics(),
                "percent": progress_percent(&progress),
            }))
        }
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(ApiError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(endpoint: &str, body: &str) -> ApiResponse {
        handle(endpoint, body, &Settings::default())
    }

    #[test]
    fn test_endpoint_parsing() {
        assert_eq!("csat".parse::<Endpoint>().unwrap(), Endpoint::Csat);
        assert_eq!(
            "/api/calculate/eligibility".parse::<Endpoint>().unwrap(),
            Endpoint::Eligibility
        );
        assert!("nope".parse::<Endpoint>().is_err());
    }

    #[test]
    fn test_unknown_endpoint_is_404() {
        let response = call("horoscope", "{}");
        assert_eq!(response.status, 404);
        assert_eq!(response.body["kind"], "not_found");
    }

    #[test]
    fn test_upsc_default_cutoff() {
        let response = call("upsc", r#"{"dateOfBirth": "2000-08-01", "category": "general"}"#);
        assert_eq!(response.status, 200);
        assert_eq!(response.body["age"]["years"], 25);
        assert_eq!(response.body["age"]["months"], 0);
        assert_eq!(response.body["age"]["days"], 0);
        assert_eq!(response.body["eligible"], true);
        assert_eq!(response.body["cutoffDate"], "2025-08-01");
    }

    #[test]
    fn test_age_endpoint() {
        let response = call("age", r#"{"dateOfBirth": "2000-08-01", "category": "obc"}"#);
        assert!(response.is_success());
        assert_eq!(response.body["currentAge"], 25);
        assert_eq!(response.body["ageLimit"], "21-35 years");
        assert_eq!(response.body["yearsRemaining"], 10);
    }

    #[test]
    fn test_invalid_date_is_422() {
        let response = call("age", r#"{"dateOfBirth": "31/12/2000"}"#);
        assert_eq!(response.status, 422);
        assert_eq!(response.body["kind"], "validation_error");
        assert_eq!(response.body["code"], "invalid_date");
    }

    #[test]
    fn test_malformed_json_is_400() {
        let response = call("score", "{correctAnswers: 5");
        assert_eq!(response.status, 400);
        assert_eq!(response.body["kind"], "bad_request");
    }

    #[test]
    fn test_missing_field_is_400() {
        let response = call("score", r#"{"correctAnswers": 5}"#);
        assert_eq!(response.status, 400);
    }

    #[test]
    fn test_score_reference_scenario() {
        let response = call(
            "score",
            r#"{"correctAnswers": 50, "wrongAnswers": 20, "totalQuestions": 100}"#,
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.body["positiveMarks"], 100.0);
        assert_eq!(response.body["negativeMarks"], 13.2);
        assert_eq!(response.body["totalMarks"], 86.8);
        assert_eq!(response.body["unattempted"], 30);
        assert_eq!(response.body["accuracy"], 71.43);
    }

    #[test]
    fn test_score_sum_exceeds_total() {
        let response = call(
            "score",
            r#"{"correctAnswers": 60, "wrongAnswers": 50, "totalQuestions": 100}"#,
        );
        assert_eq!(response.status, 422);
        assert_eq!(response.body["code"], "sum_exceeds_total");
    }

    #[test]
    fn test_negative_count_is_validation_error() {
        let response = call("score", r#"{"correctAnswers": -3, "wrongAnswers": 0}"#);
        assert_eq!(response.status, 422);
        assert_eq!(response.body["code"], "negative_count");
        assert!(response.body["message"]
            .as_str()
            .unwrap()
            .contains("correctAnswers"));
    }

    #[test]
    fn test_score_uses_configured_factor() {
        let mut settings = Settings::default();
        settings.scoring.negative_per_wrong = Some(0.67);
        let response = handle(
            "score",
            r#"{"correctAnswers": 50, "wrongAnswers": 20}"#,
            &settings,
        );
        assert_eq!(response.body["negativeMarks"], 13.4);
    }

    #[test]
    fn test_attempts_endpoint_unlimited() {
        let response = call(
            "attempts",
            r#"{"category": "sc_st", "usedAttempts": 15, "currentAge": 30}"#,
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.body["remaining"], "unlimited");
        assert_eq!(response.body["eligible"], true);
    }

    #[test]
    fn test_eligibility_endpoint() {
        let response = call(
            "eligibility",
            r#"{"dateOfBirth": "2000-08-01", "category": "general",
                "education": "bachelor", "usedAttempts": 0}"#,
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.body["overallEligible"], true);
    }

    #[test]
    fn test_exam_endpoint_uses_exam_cutoff() {
        let response = call(
            "exam",
            r#"{"exam": "ssc_cgl", "dateOfBirth": "2000-08-01", "category": "general"}"#,
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.body["cutoffDate"], "2025-01-01");
        assert_eq!(response.body["age"]["years"], 24);
    }

    #[test]
    fn test_unknown_exam_is_422() {
        let response = call("exam", r#"{"exam": "gate", "dateOfBirth": "2000-08-01"}"#);
        assert_eq!(response.status, 422);
        assert_eq!(response.body["code"], "unknown_exam");
    }

    #[test]
    fn test_csat_and_prelims_endpoints() {
        let csat = call(
            "csat",
            r#"{"correctAnswers": 40, "wrongAnswers": 10, "notAttempted": 30}"#,
        );
        assert_eq!(csat.body["qualified"], true);
        assert_eq!(csat.body["notAttempted"], 30);

        let prelims = call(
            "prelims",
            r#"{"gs1Correct": 60, "gs1Wrong": 20, "csatCorrect": 40, "csatWrong": 10}"#,
        );
        assert_eq!(prelims.body["gs1Score"], 106.8);
        assert_eq!(prelims.body["qualified"], true);
    }

    #[test]
    fn test_marks_endpoint_ignores_prelims() {
        let response = call(
            "marks",
            r#"{"prelimsMarks": 120, "mainsMarks": 850, "interviewMarks": 180}"#,
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.body["totalScore"], 1030.0);
        assert_eq!(response.body["breakdown"]["mains"], "850/1750");
    }

    #[test]
    fn test_syllabus_endpoint() {
        let response = call(
            "syllabus",
            r#"{"completed": ["p1-0", "p1-1"], "toggle": "p1-2"}"#,
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.body["completedCount"], 3);
        assert_eq!(response.body["percent"], 10);

        let response = call("syllabus", r#"{"toggle": "p99-1"}"#);
        assert_eq!(response.status, 422);
        assert_eq!(response.body["code"], "unknown_topic");
    }

    #[test]
    fn test_identical_requests_identical_responses() {
        let body = r#"{"dateOfBirth": "1996-02-29", "category": "pwd_obc", "attempts": 4}"#;
        assert_eq!(call("upsc", body), call("upsc", body));
    }
}
