//! Score submission workflow.
//!
//! A small screen-state machine replacing the original UI's ad-hoc
//! visibility toggling: exactly one screen is active at a time, and the
//! "current" profile/report pair lives here instead of in loose globals.

use std::time::Duration;

use crate::loan::LoanSuggestion;
use crate::profile::CreditProfile;
use crate::score::model::ScoreReport;

/// Which section of the score UI is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Input,
    Loading,
    Score,
}

/// State of the loan-suggestion panel overlaying the score screen.
#[derive(Debug, Clone, PartialEq)]
pub enum LoanPanel {
    Hidden,
    Requesting,
    Suggested(LoanSuggestion),
    Failed(String),
}

/// Cosmetic four-stage analysis animation. Runs on its own clock,
/// uncorrelated with actual backend latency.
pub const AGENT_STAGES: &[AgentStage] = &[
    AgentStage { name: "Profile Intake", detail: "Reading your financial profile" },
    AgentStage { name: "Payment Signals", detail: "Weighing rent and utility history" },
    AgentStage { name: "Stability Check", detail: "Assessing income and balances" },
    AgentStage { name: "Score Synthesis", detail: "Composing your final score" },
];

/// Fixed duration of each animation stage.
pub const STAGE_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentStage {
    pub name: &'static str,
    pub detail: &'static str,
}

/// Index of the stage currently "analyzing" after `elapsed` time, or `None`
/// once every stage has finished.
pub fn stage_for_elapsed(elapsed: Duration) -> Option<usize> {
    let idx = (elapsed.as_millis() / STAGE_DURATION.as_millis()) as usize;
    if idx < AGENT_STAGES.len() {
        Some(idx)
    } else {
        None
    }
}

/// The score workflow view-model.
#[derive(Debug)]
pub struct ScoreWorkflow {
    screen: Screen,
    profile: Option<CreditProfile>,
    report: Option<ScoreReport>,
    loan: LoanPanel,
}

impl Default for ScoreWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreWorkflow {
    pub fn new() -> Self {
        Self {
            screen: Screen::Input,
            profile: None,
            report: None,
            loan: LoanPanel::Hidden,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn profile(&self) -> Option<&CreditProfile> {
        self.profile.as_ref()
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    pub fn loan(&self) -> &LoanPanel {
        &self.loan
    }

    /// Capture the submitted form and move Input -> Loading. Any previous
    /// report or loan suggestion is discarded.
    pub fn begin_submission(&mut self, profile: CreditProfile) {
        self.profile = Some(profile);
        self.report = None;
        self.loan = LoanPanel::Hidden;
        self.screen = Screen::Loading;
    }

    /// Store a successful score report and move Loading -> Score.
    pub fn apply_report(&mut self, report: ScoreReport) {
        self.report = Some(report);
        self.screen = Screen::Score;
    }

    /// A failed submission retains nothing: back to Input, score cleared.
    pub fn fail_submission(&mut self) {
        self.profile = None;
        self.report = None;
        self.loan = LoanPanel::Hidden;
        self.screen = Screen::Input;
    }

    /// A loan can only be requested once a score exists.
    pub fn loan_allowed(&self) -> bool {
        self.report.is_some() && self.profile.is_some()
    }

    /// Guard and start a loan request, yielding the data to send.
    /// Returns `None` (and issues no request) without a prior score.
    pub fn begin_loan(&mut self) -> Option<(CreditProfile, u32)> {
        let profile = self.profile.clone()?;
        let total = self.report.as_ref()?.score.total_score;
        self.loan = LoanPanel::Requesting;
        Some((profile, total))
    }

    pub fn apply_loan(&mut self, suggestion: LoanSuggestion) {
        self.loan = LoanPanel::Suggested(suggestion);
    }

    pub fn fail_loan(&mut self, message: impl Into<String>) {
        self.loan = LoanPanel::Failed(message.into());
    }

    /// Revert to a pristine Input screen.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
