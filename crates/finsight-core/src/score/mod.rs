//! Credit score domain: response models and the submission workflow.

pub mod model;
pub mod workflow;

pub use model::{
    AiAnalysis, Breakdown, CategoryScore, Priority, Recommendation, ScoreReport, ScoreSummary,
};
pub use workflow::{
    stage_for_elapsed, AgentStage, LoanPanel, ScoreWorkflow, Screen, AGENT_STAGES, STAGE_DURATION,
};
