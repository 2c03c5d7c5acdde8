//! Usage counter mapping
//!
//! Maps product events to idempotent counter increments. This layer only
//! computes *what* to increment; callers apply the returned table
//! transactionally against the counter documents (atomic adds in the store
//! adapter). Nothing here reads or writes state.
//!
//! Session starts are tracked on two independent dimensions (capture
//! method and output purpose), each with its own counter family. Both
//! families must individually sum to the `sessions_started` total, so when
//! a caller supplies only one dimension the other defaults to that
//! dimension's primary member. Older callers send a single legacy `source`
//! string instead; it is matched against both dimensions.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{CaptureMethod, OutputPurpose};

/// One increment directive for a counter field
///
/// The concrete mechanism (e.g. an atomic server-side add) is supplied by
/// the caller's store adapter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Increment {
    /// Add one to an event counter
    One,
    /// Add the given positive amount to an accumulator
    Add(f64),
}

impl Increment {
    /// Numeric amount this directive adds
    pub fn amount(&self) -> f64 {
        match self {
            Increment::One => 1.0,
            Increment::Add(v) => *v,
        }
    }
}

/// Counter-field name → increment directive
pub type CounterIncrements = BTreeMap<String, Increment>;

/// Properties of a session-start event
///
/// Prefer the two typed dimensions; `source` is the legacy single-dimension
/// property and is only consulted when a typed dimension is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStartedProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_purpose: Option<OutputPurpose>,

    /// Legacy single-dimension property; matched against both dimensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl SessionStartedProps {
    /// Resolve both dimensions, defaulting a missing one to its primary
    /// member so the per-family totals still sum to `sessions_started`.
    fn resolved_dimensions(&self) -> (CaptureMethod, OutputPurpose) {
        let legacy = self.source.as_deref();
        let capture = self
            .capture_method
            .or_else(|| legacy.and_then(CaptureMethod::from_wire))
            .unwrap_or_else(CaptureMethod::primary);
        let purpose = self
            .output_purpose
            .or_else(|| legacy.and_then(OutputPurpose::from_wire))
            .unwrap_or_else(OutputPurpose::primary);
        (capture, purpose)
    }
}

/// Properties of a session-completion event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionCompletedProps {
    /// Capture duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

/// Properties of a completed translation job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationGeneratedProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
}

/// Properties of a rendered video artifact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoRenderedProps {
    /// Rendered video duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

/// A countable product event with its typed properties
#[derive(Debug, Clone)]
pub enum UsageAction {
    SessionStarted(SessionStartedProps),
    SessionCompleted(SessionCompletedProps),
    TranslationGenerated(TranslationGeneratedProps),
    GuideExported,
    VideoRendered(VideoRenderedProps),
    /// Forward-compatibility escape hatch: actions this library does not
    /// know yield an empty increment table, never an error.
    Other(String),
}

/// Insert an accumulator increment when the supplied value is positive
fn add_if_positive(inc: &mut CounterIncrements, field: &str, value: Option<f64>) {
    if let Some(v) = value {
        if v > 0.0 {
            inc.insert(field.to_string(), Increment::Add(v));
        }
    }
}

/// Map an action to the counter increments it produces
///
/// Event counters get `One`; duration/token/cost accumulators get `Add`
/// with the supplied value when positive. Unknown actions map to an empty
/// table.
pub fn counter_increments(action: &UsageAction) -> CounterIncrements {
    let mut inc = CounterIncrements::new();
    match action {
        UsageAction::SessionStarted(props) => {
            let (capture, purpose) = props.resolved_dimensions();
            inc.insert("sessions_started".to_string(), Increment::One);
            inc.insert(
                format!("sessions_by_capture_{}", capture.as_str()),
                Increment::One,
            );
            inc.insert(
                format!("sessions_by_purpose_{}", purpose.as_str()),
                Increment::One,
            );
        }
        UsageAction::SessionCompleted(props) => {
            inc.insert("sessions_completed".to_string(), Increment::One);
            add_if_positive(&mut inc, "capture_seconds", props.duration_seconds);
        }
        UsageAction::TranslationGenerated(props) => {
            inc.insert("translations_generated".to_string(), Increment::One);
            add_if_positive(&mut inc, "translation_tokens", props.tokens);
            add_if_positive(&mut inc, "translation_cost_usd", props.cost_usd);
        }
        UsageAction::GuideExported => {
            inc.insert("guides_exported".to_string(), Increment::One);
        }
        UsageAction::VideoRendered(props) => {
            inc.insert("videos_rendered".to_string(), Increment::One);
            add_if_positive(&mut inc, "video_render_seconds", props.duration_seconds);
        }
        UsageAction::Other(_) => {}
    }
    inc
}

/// Path of a user's daily usage counter document
pub fn daily_usage_path(user_id: &str, day: NaiveDate) -> String {
    format!("usage_counters/{}/daily/{}", user_id, day.format("%Y-%m-%d"))
}

/// Path of a user's monthly usage counter document
pub fn monthly_usage_path(user_id: &str, day: NaiveDate) -> String {
    format!("usage_counters/{}/monthly/{}", user_id, day.format("%Y-%m"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Apply increment tables the way a store adapter would
    fn apply(totals: &mut BTreeMap<String, f64>, inc: &CounterIncrements) {
        for (field, directive) in inc {
            *totals.entry(field.clone()).or_insert(0.0) += directive.amount();
        }
    }

    #[test]
    fn test_session_started_both_dimensions() {
        let inc = counter_increments(&UsageAction::SessionStarted(SessionStartedProps {
            capture_method: Some(CaptureMethod::Desktop),
            output_purpose: Some(OutputPurpose::Video),
            source: None,
        }));
        assert_eq!(inc.get("sessions_started"), Some(&Increment::One));
        assert_eq!(inc.get("sessions_by_capture_desktop"), Some(&Increment::One));
        assert_eq!(inc.get("sessions_by_purpose_video"), Some(&Increment::One));
        assert_eq!(inc.len(), 3);
    }

    #[test]
    fn test_missing_dimension_defaults_to_primary() {
        let inc = counter_increments(&UsageAction::SessionStarted(SessionStartedProps {
            capture_method: Some(CaptureMethod::Mcp),
            output_purpose: None,
            source: None,
        }));
        assert_eq!(
            inc.get("sessions_by_purpose_workflow_guide"),
            Some(&Increment::One)
        );

        let inc = counter_increments(&UsageAction::SessionStarted(SessionStartedProps::default()));
        assert_eq!(inc.get("sessions_by_capture_extension"), Some(&Increment::One));
        assert_eq!(
            inc.get("sessions_by_purpose_workflow_guide"),
            Some(&Increment::One)
        );
    }

    #[test]
    fn test_legacy_source_maps_onto_both_families() {
        // legacy value naming a capture method
        let inc = counter_increments(&UsageAction::SessionStarted(SessionStartedProps {
            source: Some("desktop".to_string()),
            ..SessionStartedProps::default()
        }));
        assert_eq!(inc.get("sessions_by_capture_desktop"), Some(&Increment::One));
        assert_eq!(
            inc.get("sessions_by_purpose_workflow_guide"),
            Some(&Increment::One)
        );

        // legacy value naming an output purpose
        let inc = counter_increments(&UsageAction::SessionStarted(SessionStartedProps {
            source: Some("video".to_string()),
            ..SessionStartedProps::default()
        }));
        assert_eq!(inc.get("sessions_by_capture_extension"), Some(&Increment::One));
        assert_eq!(inc.get("sessions_by_purpose_video"), Some(&Increment::One));

        // typed dimensions win over the legacy property
        let inc = counter_increments(&UsageAction::SessionStarted(SessionStartedProps {
            capture_method: Some(CaptureMethod::Upload),
            source: Some("desktop".to_string()),
            ..SessionStartedProps::default()
        }));
        assert_eq!(inc.get("sessions_by_capture_upload"), Some(&Increment::One));
    }

    #[test]
    fn test_counter_symmetry_across_families() {
        let events = vec![
            SessionStartedProps {
                capture_method: Some(CaptureMethod::Extension),
                output_purpose: Some(OutputPurpose::Video),
                source: None,
            },
            SessionStartedProps {
                capture_method: Some(CaptureMethod::Desktop),
                output_purpose: None,
                source: None,
            },
            SessionStartedProps {
                capture_method: None,
                output_purpose: Some(OutputPurpose::KnowledgeBase),
                source: None,
            },
            SessionStartedProps {
                source: Some("mcp".to_string()),
                ..SessionStartedProps::default()
            },
            SessionStartedProps::default(),
        ];

        let mut totals = BTreeMap::new();
        for props in events {
            apply(
                &mut totals,
                &counter_increments(&UsageAction::SessionStarted(props)),
            );
        }

        let family_sum = |prefix: &str| -> f64 {
            totals
                .iter()
                .filter(|(k, _)| k.starts_with(prefix))
                .map(|(_, v)| *v)
                .sum()
        };

        let started = totals["sessions_started"];
        assert_eq!(started, 5.0);
        assert_eq!(family_sum("sessions_by_capture_"), started);
        assert_eq!(family_sum("sessions_by_purpose_"), started);
    }

    #[test]
    fn test_accumulators_add_positive_values_only() {
        let inc = counter_increments(&UsageAction::SessionCompleted(SessionCompletedProps {
            duration_seconds: Some(92.5),
        }));
        assert_eq!(inc.get("capture_seconds"), Some(&Increment::Add(92.5)));

        for bad in [Some(0.0), Some(-3.0), None] {
            let inc = counter_increments(&UsageAction::SessionCompleted(SessionCompletedProps {
                duration_seconds: bad,
            }));
            assert_eq!(inc.get("sessions_completed"), Some(&Increment::One));
            assert!(inc.get("capture_seconds").is_none());
        }
    }

    #[test]
    fn test_translation_counters() {
        let inc = counter_increments(&UsageAction::TranslationGenerated(
            TranslationGeneratedProps {
                tokens: Some(1800.0),
                cost_usd: Some(0.04),
            },
        ));
        assert_eq!(inc.get("translations_generated"), Some(&Increment::One));
        assert_eq!(inc.get("translation_tokens"), Some(&Increment::Add(1800.0)));
        assert_eq!(inc.get("translation_cost_usd"), Some(&Increment::Add(0.04)));
    }

    #[test]
    fn test_unknown_action_yields_empty_mapping() {
        let inc = counter_increments(&UsageAction::Other("quantum_export".to_string()));
        assert!(inc.is_empty());
    }

    #[test]
    fn test_usage_paths() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(
            daily_usage_path("user-1", day),
            "usage_counters/user-1/daily/2024-06-03"
        );
        assert_eq!(
            monthly_usage_path("user-1", day),
            "usage_counters/user-1/monthly/2024-06"
        );
    }
}
