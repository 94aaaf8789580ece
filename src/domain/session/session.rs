//! JournalSession aggregate - in-memory state for one journaling cycle.
//!
//! Holds the entry text, the latest analysis outcome, the current selection
//! and the session status. Lifetime is one process session; nothing here is
//! persisted.
//!
//! Invariant: a selection exists only in `Selected` status and always names a
//! member of the most recent candidate set.

use crate::domain::analysis::AnalysisOutcome;
use crate::domain::emotion::{ActionPlan, EmotionCandidate, EmotionPlan};
use crate::domain::foundation::StateMachine;

use super::{SessionError, SessionStatus};

/// Mutable session state driving one analyze-select-save cycle.
#[derive(Debug, Clone)]
pub struct JournalSession {
    text: String,
    status: SessionStatus,
    candidates: Vec<EmotionCandidate>,
    plan: ActionPlan,
    selected: Option<String>,
}

impl Default for JournalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalSession {
    /// Creates an idle session with empty text.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            status: SessionStatus::Idle,
            candidates: Vec::new(),
            plan: ActionPlan::default(),
            selected: None,
        }
    }

    /// Current journal text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Candidates from the most recent successful analysis.
    pub fn candidates(&self) -> &[EmotionCandidate] {
        &self.candidates
    }

    /// Action plan from the most recent successful analysis.
    pub fn plan(&self) -> &ActionPlan {
        &self.plan
    }

    /// The currently selected emotion label, if any.
    pub fn selected_emotion(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Plan entry for the currently selected emotion.
    pub fn selected_plan(&self) -> Option<&EmotionPlan> {
        self.selected
            .as_deref()
            .and_then(|label| self.plan.plan_for(label))
    }

    /// True when an analysis may be started right now.
    pub fn can_analyze(&self) -> bool {
        !self.text.trim().is_empty() && self.status != SessionStatus::Analyzing
    }

    /// Replaces the journal text.
    ///
    /// Editing after a successful analysis makes that analysis stale: the
    /// session drops back to `Idle`, clearing candidates, plan and selection
    /// while keeping the new text. Editing is refused while a request is in
    /// flight.
    pub fn edit_text(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        if self.status == SessionStatus::Analyzing {
            return Err(SessionError::invalid_state("edit the entry", self.status));
        }

        self.text = text.into();

        if matches!(
            self.status,
            SessionStatus::Reviewing | SessionStatus::Selected
        ) {
            self.status = self.status.transition_to(SessionStatus::Idle)?;
            self.clear_analysis_state();
        }

        Ok(())
    }

    /// Starts an analysis cycle.
    ///
    /// Refused while another request is in flight (single-flight) and for
    /// blank text. Any previous candidates, plan and selection are dropped
    /// before the request goes out.
    pub fn begin_analysis(&mut self) -> Result<(), SessionError> {
        if self.status == SessionStatus::Analyzing {
            return Err(SessionError::invalid_state(
                "start an analysis",
                self.status,
            ));
        }
        if self.text.trim().is_empty() {
            return Err(SessionError::EmptyEntry);
        }

        self.status = self.status.transition_to(SessionStatus::Analyzing)?;
        self.clear_analysis_state();
        Ok(())
    }

    /// Records a successful analysis and moves to `Reviewing`.
    pub fn complete_analysis(&mut self, outcome: AnalysisOutcome) -> Result<(), SessionError> {
        if self.status != SessionStatus::Analyzing {
            return Err(SessionError::invalid_state(
                "complete an analysis",
                self.status,
            ));
        }

        self.status = self.status.transition_to(SessionStatus::Reviewing)?;
        self.candidates = outcome.candidates;
        self.plan = outcome.plan;
        Ok(())
    }

    /// Records a failed analysis and returns to `Idle`.
    ///
    /// Candidates and plan stay cleared; the entry text is preserved so the
    /// user can retry.
    pub fn fail_analysis(&mut self) -> Result<(), SessionError> {
        if self.status != SessionStatus::Analyzing {
            return Err(SessionError::invalid_state(
                "fail an analysis",
                self.status,
            ));
        }

        self.status = self.status.transition_to(SessionStatus::Idle)?;
        self.clear_analysis_state();
        Ok(())
    }

    /// Selects one of the current candidates.
    ///
    /// Allowed in `Reviewing` and `Selected` (re-selection); the label must
    /// be a member of the most recent candidate set.
    pub fn select_emotion(&mut self, label: &str) -> Result<(), SessionError> {
        if !matches!(
            self.status,
            SessionStatus::Reviewing | SessionStatus::Selected
        ) {
            return Err(SessionError::invalid_state(
                "select an emotion",
                self.status,
            ));
        }

        if !self.candidates.iter().any(|c| c.label == label) {
            return Err(SessionError::UnknownCandidate {
                label: label.to_string(),
            });
        }

        self.status = self.status.transition_to(SessionStatus::Selected)?;
        self.selected = Some(label.to_string());
        Ok(())
    }

    /// Drops the current selection, returning to `Reviewing`.
    pub fn clear_selection(&mut self) -> Result<(), SessionError> {
        if self.status != SessionStatus::Selected {
            return Err(SessionError::invalid_state(
                "clear the selection",
                self.status,
            ));
        }

        self.status = self.status.transition_to(SessionStatus::Reviewing)?;
        self.selected = None;
        Ok(())
    }

    /// Finishes a save: all transient state is cleared and the session
    /// returns to `Idle`, ready for the next entry.
    pub fn complete_save(&mut self) -> Result<(), SessionError> {
        if self.status != SessionStatus::Selected {
            return Err(SessionError::invalid_state("save", self.status));
        }

        self.status = self.status.transition_to(SessionStatus::Idle)?;
        self.text.clear();
        self.clear_analysis_state();
        Ok(())
    }

    fn clear_analysis_state(&mut self) {
        self.candidates.clear();
        self.plan = ActionPlan::default();
        self.selected = None;
    }
}
