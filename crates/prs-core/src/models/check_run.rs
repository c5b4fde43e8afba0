//! CI check run model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Dto, timestamp};

string_enum! {
    /// Lifecycle phase of a check run.
    pub enum CheckStatus {
        /// Waiting to start.
        Queued => "queued",
        /// Running.
        InProgress => "in_progress",
        /// Finished; see the conclusion.
        Completed => "completed",
        /// Waiting on a dependency.
        Waiting => "waiting",
        /// Requested but not yet queued.
        Requested => "requested",
        /// Pending a runner.
        Pending => "pending",
    }
}

string_enum! {
    /// Terminal outcome of a completed check run.
    pub enum CheckConclusion {
        /// Passed.
        Success => "success",
        /// Failed.
        Failure => "failure",
        /// Finished without a pass/fail verdict.
        Neutral => "neutral",
        /// Cancelled before finishing.
        Cancelled => "cancelled",
        /// Skipped.
        Skipped => "skipped",
        /// Exceeded its time limit.
        TimedOut => "timed_out",
        /// Needs manual action.
        ActionRequired => "action_required",
        /// Marked stale by GitHub.
        Stale => "stale",
    }
}

/// A CI check run on a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRun {
    /// Check run ID.
    pub id: u64,

    /// Check name.
    pub name: String,

    /// Lifecycle phase.
    pub status: CheckStatus,

    /// Outcome, present only once completed.
    #[serde(default)]
    pub conclusion: Option<CheckConclusion>,

    /// URL to view the check.
    pub html_url: String,

    /// When the check started.
    #[serde(with = "timestamp")]
    pub started_at: DateTime<FixedOffset>,

    /// When the check finished.
    #[serde(default, with = "timestamp::option")]
    pub completed_at: Option<DateTime<FixedOffset>>,
}

impl CheckRun {
    /// Whether the check has reached its terminal phase.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == CheckStatus::Completed
    }

    /// Whether the check concluded successfully.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.conclusion == Some(CheckConclusion::Success)
    }

    /// Whether the check concluded with a failure, timeout or required action.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(
            self.conclusion,
            Some(
                CheckConclusion::Failure
                    | CheckConclusion::TimedOut
                    | CheckConclusion::ActionRequired
            )
        )
    }
}

impl Dto for CheckRun {
    const RESOURCE: &'static str = "check run";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::test_support::check_run_json;

    fn with_conclusion(conclusion: Option<&str>) -> CheckRun {
        let mut raw = check_run_json("build", "completed", conclusion);
        if conclusion.is_none() {
            raw["status"] = json!("in_progress");
        }
        CheckRun::from_value(raw).unwrap()
    }

    #[test]
    fn test_failed_conclusions() {
        for conclusion in ["failure", "timed_out", "action_required"] {
            let run = with_conclusion(Some(conclusion));
            assert!(run.is_failed(), "{conclusion} should count as failed");
            assert!(!run.is_successful());
        }
    }

    #[test]
    fn test_non_failed_conclusions() {
        for conclusion in ["success", "neutral", "cancelled"] {
            assert!(
                !with_conclusion(Some(conclusion)).is_failed(),
                "{conclusion} should not count as failed"
            );
        }
        assert!(!with_conclusion(None).is_failed());
    }

    #[test]
    fn test_completed_and_successful() {
        let run = with_conclusion(Some("success"));
        assert!(run.is_completed());
        assert!(run.is_successful());

        let running = with_conclusion(None);
        assert!(!running.is_completed());
        assert!(!running.is_successful());
        assert_eq!(running.completed_at, None);
    }

    #[test]
    fn test_round_trip_in_progress() {
        let raw = json!({
            "id": 5,
            "name": "lint",
            "status": "in_progress",
            "conclusion": null,
            "html_url": "https://github.com/acme/widgets/runs/5",
            "started_at": "2024-01-15T10:30:00+00:00",
            "completed_at": null
        });
        let run = CheckRun::from_value(raw.clone()).unwrap();

        assert_eq!(run.status, CheckStatus::InProgress);
        assert_eq!(run.to_value(), raw);
    }

    #[test]
    fn test_missing_started_at_is_malformed() {
        let mut raw = check_run_json("build", "completed", Some("success"));
        raw.as_object_mut().unwrap().remove("started_at");
        assert!(CheckRun::from_value(raw).is_err());

        assert!(CheckRun::from_value(Value::Null).is_err());
    }
}
