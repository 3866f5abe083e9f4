//! Score calculation command.
//!
//! Prompts for any financial details not given as flags, runs the staged
//! analysis animation while the request is in flight, then prints the score
//! report and optionally a loan suggestion.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use indicatif::ProgressBar;

use finsight_client::{ScoringClient, DEFAULT_SCORING_URL};
use finsight_core::profile::{CreditProfile, HistoryTier, StabilityTier};
use finsight_core::score::{AGENT_STAGES, STAGE_DURATION};

use crate::output;

#[derive(Args)]
pub struct ScoreArgs {
    /// Scoring backend base URL
    #[arg(long, env = "FINSIGHT_SCORING_URL", default_value = DEFAULT_SCORING_URL)]
    pub scoring_url: String,

    /// Use the demo profile instead of prompting
    #[arg(long)]
    pub sample: bool,

    /// Also request a loan suggestion after scoring
    #[arg(long)]
    pub loan: bool,

    /// Monthly income
    #[arg(long)]
    pub monthly_income: Option<f64>,

    /// Monthly rent
    #[arg(long)]
    pub rent_amount: Option<f64>,

    /// Rent payment history (excellent, good, fair, poor)
    #[arg(long)]
    pub rent_history: Option<HistoryTier>,

    /// Average bank balance
    #[arg(long)]
    pub avg_balance: Option<f64>,

    /// Savings rate, 0 to 1
    #[arg(long)]
    pub savings_rate: Option<f64>,

    /// Overdrafts in the last year
    #[arg(long)]
    pub overdrafts: Option<u32>,

    /// Employment stability (high, medium, low)
    #[arg(long)]
    pub employment_stability: Option<StabilityTier>,

    /// Utility payment history (excellent, good, fair, poor)
    #[arg(long)]
    pub utility_history: Option<HistoryTier>,
}

pub async fn execute(args: ScoreArgs) -> Result<()> {
    let profile = if args.sample {
        CreditProfile::sample()
    } else {
        build_profile(&args)?
    };

    let client = ScoringClient::new(&args.scoring_url);

    // Fire the request, then run the four-stage animation on its own fixed
    // clock. The stages are decorative and finish on their schedule whether
    // or not the backend has answered.
    let request = tokio::spawn({
        let client = client.clone();
        let profile = profile.clone();
        async move { client.score(&profile).await }
    });

    println!();
    for stage in AGENT_STAGES {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("{}: {}", stage.name, stage.detail));
        spinner.enable_steady_tick(std::time::Duration::from_millis(120));
        tokio::time::sleep(STAGE_DURATION).await;
        spinner.finish_with_message(format!("{}: done", stage.name));
    }
    println!();

    let report = match request.await.context("score request task failed")? {
        Ok(report) => report,
        Err(err) => {
            println!("{} {}", "Could not calculate score:".red().bold(), err);
            return Ok(());
        }
    };

    output::print_score(&report);

    let want_loan = args.loan
        || Confirm::new()
            .with_prompt("Ask Finsight AI for a loan suggestion?")
            .default(false)
            .interact()
            .unwrap_or(false);

    if want_loan {
        match client
            .suggest_loan(&profile, report.score.total_score)
            .await
        {
            Ok(loan) => output::print_loan(&loan),
            Err(err) => println!("{} {}", "Could not fetch loan suggestion:".red(), err),
        }
    }

    Ok(())
}

/// Fill in any fields not provided as flags by asking interactively.
fn build_profile(args: &ScoreArgs) -> Result<CreditProfile> {
    let monthly_income = match args.monthly_income {
        Some(value) => value,
        None => prompt_number("Monthly income")?,
    };
    let rent_amount = match args.rent_amount {
        Some(value) => value,
        None => prompt_number("Monthly rent")?,
    };
    let rent_history = match args.rent_history {
        Some(tier) => tier,
        None => prompt_history("Rent payment history")?,
    };
    let avg_balance = match args.avg_balance {
        Some(value) => value,
        None => prompt_number("Average bank balance")?,
    };
    let savings_rate = match args.savings_rate {
        Some(value) => value,
        None => prompt_number("Savings rate (0 to 1)")?,
    };
    let overdrafts = match args.overdrafts {
        Some(value) => value,
        None => Input::new()
            .with_prompt("Overdrafts in the last year")
            .default(0u32)
            .interact_text()?,
    };
    let employment_stability = match args.employment_stability {
        Some(tier) => tier,
        None => prompt_stability("Employment stability")?,
    };
    let utility_history = match args.utility_history {
        Some(tier) => tier,
        None => prompt_history("Utility payment history")?,
    };

    Ok(CreditProfile {
        monthly_income,
        rent_amount,
        rent_history,
        avg_balance,
        savings_rate,
        overdrafts,
        employment_stability,
        utility_history,
    })
}

fn prompt_number(prompt: &str) -> Result<f64> {
    Ok(Input::new().with_prompt(prompt).interact_text()?)
}

fn prompt_history(prompt: &str) -> Result<HistoryTier> {
    let items: Vec<&str> = HistoryTier::ALL.iter().map(|t| t.as_str()).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(1)
        .interact()?;
    Ok(HistoryTier::ALL[index])
}

fn prompt_stability(prompt: &str) -> Result<StabilityTier> {
    let items: Vec<&str> = StabilityTier::ALL.iter().map(|t| t.as_str()).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(1)
        .interact()?;
    Ok(StabilityTier::ALL[index])
}
