//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use finsight_core::loan::LoanSuggestion;
use finsight_core::score::{Priority, ScoreReport};
use finsight_core::timefmt;
use finsight_core::video::VideoResult;
use unicode_width::UnicodeWidthStr;

/// Print a full score report: headline, breakdown meters, AI commentary.
pub fn print_score(report: &ScoreReport) {
    let rating_colored = match report.score.rating.as_str() {
        "Excellent" | "Very Good" => report.score.rating.as_str().green().bold(),
        "Good" => report.score.rating.as_str().cyan().bold(),
        "Fair" => report.score.rating.as_str().yellow().bold(),
        "Poor" => report.score.rating.as_str().red().bold(),
        other => other.normal().bold(),
    };

    println!(
        "  {} {}  {}",
        report.score.total_score.to_string().bold(),
        rating_colored,
        report.score.trend.dimmed()
    );
    println!();

    for (default_label, category) in report.score.breakdown.categories() {
        let label = category.label.as_deref().unwrap_or(default_label);
        println!(
            "  {} {} {}",
            pad_right(label, 20),
            meter(category.score, 20),
            format!("{}/100", category.score).dimmed()
        );
    }

    println!();
    println!("{}", "AI Insights".bold());
    if report.analysis.insights.is_empty() {
        println!("  {}", "Could not load AI insights.".dimmed());
    } else {
        for insight in &report.analysis.insights {
            println!("  {} {}", "●".cyan(), insight);
        }
    }

    println!();
    println!("{}", "Action Plan".bold());
    if report.analysis.recommendations.is_empty() {
        println!("  {}", "Could not load AI recommendations.".dimmed());
    } else {
        for rec in &report.analysis.recommendations {
            println!(
                "  {} {} {}",
                priority_indicator(rec.priority),
                rec.title.bold(),
                format!("({})", rec.priority.as_str()).dimmed()
            );
            println!(
                "       impact: {}  difficulty: {}",
                rec.impact.dimmed(),
                rec.difficulty.dimmed()
            );
        }
    }
    println!();
}

/// Print a loan suggestion.
pub fn print_loan(loan: &LoanSuggestion) {
    println!();
    if loan.eligibility {
        println!("{}", "Loan Eligibility: Approved".green().bold());
        println!("  {}: ₹{}", "Amount".bold(), loan.amount_display());
        println!("  {}: {}%", "Interest Rate".bold(), loan.interest_rate);
        println!("  {}: {} months", "Term".bold(), loan.term);
        println!("  {}: {}", "Why this loan".bold(), loan.reason);
    } else {
        println!("{}", "Loan Eligibility: Not Eligible".red().bold());
        println!("  {}: {}", "Reason".bold(), loan.reason);
        println!("  Improve your score to unlock better loan options!");
    }
    println!();
}

/// Print video results as a table.
pub fn print_videos_table(videos: &[VideoResult]) {
    if videos.is_empty() {
        println!("{}", "No videos found.".dimmed());
        return;
    }

    let width = term_width();
    let age_w = 14;
    let channel_w = 22;
    let title_w = width.saturating_sub(age_w + channel_w + 6).clamp(20, 56);

    println!(
        "{} {} {}",
        pad_right("Title", title_w).bold(),
        pad_right("Channel", channel_w).bold(),
        "Published".bold()
    );
    println!("{}", "─".repeat((title_w + channel_w + age_w + 2).min(width)));

    let now = chrono::Utc::now();
    for video in videos {
        println!(
            "{} {} {}",
            pad_right(&truncate_visual(&video.title, title_w), title_w),
            pad_right(&truncate_visual(&video.channel, channel_w), channel_w).cyan(),
            timefmt::time_ago(video.published_at, now).dimmed()
        );
    }

    println!();
    println!("{} video(s)", videos.len());
}

/// Fixed-width meter bar for a 0-100 sub-score.
fn meter(score: u32, width: usize) -> String {
    let filled = (score.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Get priority indicator.
fn priority_indicator(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "!!".red().bold(),
        Priority::Medium => "! ".yellow(),
        Priority::Low => "· ".dimmed(),
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_proportions() {
        assert_eq!(meter(0, 20), "░".repeat(20));
        assert_eq!(meter(100, 20), "█".repeat(20));
        assert_eq!(meter(80, 20), format!("{}{}", "█".repeat(16), "░".repeat(4)));
    }

    #[test]
    fn test_truncate_visual_short_circuit() {
        assert_eq!(truncate_visual("short", 20), "short");
        let truncated = truncate_visual("a very long video title indeed", 12);
        assert!(truncated.ends_with(".."));
        assert!(UnicodeWidthStr::width(truncated.as_str()) <= 12);
    }
}
