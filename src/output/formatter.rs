use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::analysis::AnalysisResponse;
use crate::scoring::{Impact, PredictionResult, ScoreBreakdown};

const BAR_WIDTH: usize = 20;
const FACTOR_NAME_WIDTH: usize = 24;
const DEFAULT_WRAP_WIDTH: usize = 80;
const INDENT: &str = "  ";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to 80 columns for pipes
fn get_wrap_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WRAP_WIDTH)
}

/// Fixed-width bar for a 0-100 score, e.g. "[#######-------------]"
pub fn format_score_bar(score: u8, width: usize) -> String {
    let filled = (usize::from(score.min(100)) * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn colorize_score(text: &str, score: u8, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    if score >= 70 {
        text.green().to_string()
    } else if score >= 50 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

fn impact_label(impact: Impact, use_colors: bool) -> String {
    let label = match impact {
        Impact::Positive => "positive",
        Impact::Negative => "negative",
        Impact::Neutral => "neutral",
    };
    if !use_colors {
        return label.to_string();
    }
    match impact {
        Impact::Positive => label.green().to_string(),
        Impact::Negative => label.red().to_string(),
        Impact::Neutral => label.yellow().to_string(),
    }
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Greedy word wrap. Words longer than the width get a line of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn push_wrapped(out: &mut Vec<String>, prefix: &str, text: &str, width: usize) {
    let continuation = " ".repeat(prefix.chars().count());
    let available = width.saturating_sub(prefix.chars().count());
    for (i, line) in wrap_text(text, available).into_iter().enumerate() {
        if i == 0 {
            out.push(format!("{}{}", prefix, line));
        } else {
            out.push(format!("{}{}", continuation, line));
        }
    }
}

/// Render a prediction for the terminal.
pub fn format_prediction(company: &str, result: &PredictionResult, use_colors: bool) -> String {
    format_prediction_with_width(company, result, use_colors, get_wrap_width())
}

fn format_prediction_with_width(
    company: &str,
    result: &PredictionResult,
    use_colors: bool,
    width: usize,
) -> String {
    let mut out = Vec::new();

    let score_text = format!("{}%", result.score);
    out.push(format!(
        "{} {} {} success score ({} confidence)",
        heading(company, use_colors),
        format_score_bar(result.score, BAR_WIDTH),
        colorize_score(&score_text, result.score, use_colors),
        result.confidence
    ));

    out.push(String::new());
    out.push(heading("Key factors", use_colors));
    for factor in &result.key_factors {
        let score_text = format!("{:>3}", factor.score);
        out.push(format!(
            "{}{:<name_width$} {}  {}",
            INDENT,
            factor.name(),
            colorize_score(&score_text, factor.score, use_colors),
            impact_label(factor.impact, use_colors),
            name_width = FACTOR_NAME_WIDTH
        ));
    }

    out.push(String::new());
    out.push(heading("Strengths", use_colors));
    for line in &result.strengths {
        push_wrapped(&mut out, &format!("{}+ ", INDENT), line, width);
    }

    out.push(String::new());
    out.push(heading("Weaknesses", use_colors));
    for line in &result.weaknesses {
        push_wrapped(&mut out, &format!("{}- ", INDENT), line, width);
    }

    out.push(String::new());
    out.push(heading("Recommendations", use_colors));
    for (i, line) in result.recommendations.iter().enumerate() {
        push_wrapped(&mut out, &format!("{}{}. ", INDENT, i + 1), line, width);
    }

    out.join("\n")
}

/// Render how each input moved the headline score (verbose mode).
pub fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut out = vec![format!("Base score: {}", breakdown.base_score)];
    for c in &breakdown.contributions {
        out.push(format!(
            "{}{:<24} {:>+4}  ({})",
            INDENT, c.label, c.delta, c.value
        ));
    }
    out.push(format!(
        "Raw score: {} (clamped to {})",
        breakdown.raw_score,
        breakdown.raw_score.clamp(0, 100)
    ));
    out.join("\n")
}

/// Render the analysis service's answer verbatim, wrapped to the terminal.
pub fn format_analysis(response: &AnalysisResponse, use_colors: bool) -> String {
    format_analysis_with_width(response, use_colors, get_wrap_width())
}

fn format_analysis_with_width(
    response: &AnalysisResponse,
    use_colors: bool,
    width: usize,
) -> String {
    let mut out = Vec::new();

    out.push(heading("Business Health Assessment", use_colors));
    push_wrapped(&mut out, INDENT, &response.business_health_assessment, width);

    out.push(String::new());
    out.push(heading("Business Reasoning", use_colors));
    for paragraph in response.business_reasoning.split('\n') {
        if paragraph.trim().is_empty() {
            continue;
        }
        push_wrapped(&mut out, INDENT, paragraph, width);
    }

    out.push(String::new());
    out.push(heading("Recommended Actions", use_colors));
    if response.recommended_best_actions.is_empty() {
        out.push(format!("{}(none)", INDENT));
    }
    for action in &response.recommended_best_actions {
        push_wrapped(&mut out, &format!("{}* ", INDENT), action, width);
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{predict, score_breakdown, ScoringConfig};
    use crate::startup::*;

    fn sample_description() -> StartupDescription {
        StartupDescription {
            company_name: "Acme".to_string(),
            industry: Industry::Healthcare,
            founding_year: "2020".to_string(),
            team_size: TeamSize::SixToTen,
            founder_experience: FounderExperience::IndustryExpert,
            funding_amount: FundingAmount::SeriesA,
            product_stage: ProductStage::Launched,
            target_market: TargetMarket::B2b,
            competition_level: 30,
            business_model: "Clinics pay a monthly fee per practitioner for scheduling software"
                .to_string(),
        }
    }

    fn sample_analysis() -> AnalysisResponse {
        AnalysisResponse {
            business_health_assessment: "Stable".to_string(),
            business_reasoning: "Strong margins.\nSmall sales team.".to_string(),
            recommended_best_actions: vec!["Hire two account executives".to_string()],
        }
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(format_score_bar(0, 10), "[----------]");
        assert_eq!(format_score_bar(50, 10), "[#####-----]");
        assert_eq!(format_score_bar(100, 10), "[##########]");
        assert_eq!(format_score_bar(64, 10), "[######----]");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert_eq!(wrap_text("", 10), Vec::<String>::new());
        assert_eq!(wrap_text("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_push_wrapped_hangs_continuation() {
        let mut out = Vec::new();
        push_wrapped(&mut out, "  - ", "alpha beta gamma", 12);
        assert_eq!(out, vec!["  - alpha", "    beta", "    gamma"]);
    }

    #[test]
    fn test_format_prediction_plain() {
        let desc = sample_description();
        let result = predict(&desc, &ScoringConfig::default());
        let text = format_prediction_with_width("Acme", &result, false, 200);

        assert!(text.starts_with("Acme ["));
        assert!(text.contains(&format!("{}% success score", result.score)));
        assert!(text.contains(&format!("({} confidence)", result.confidence)));
        assert!(text.contains("Key factors"));
        assert!(text.contains("Team & Leadership"));
        assert!(text.contains("  1. "));
        assert!(text.contains(crate::scoring::narrative::GENERAL_RECOMMENDATION));
    }

    #[test]
    fn test_format_prediction_lists_factors_in_order() {
        let result = predict(&sample_description(), &ScoringConfig::default());
        let text = format_prediction_with_width("Acme", &result, false, 200);
        let first = text.find(result.key_factors[0].name()).unwrap();
        let last = text.find(result.key_factors[5].name()).unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_format_breakdown() {
        let breakdown = score_breakdown(&sample_description(), &ScoringConfig::default());
        let text = format_breakdown(&breakdown);
        assert!(text.starts_with("Base score: 60"));
        assert!(text.contains("Competition"));
        assert!(text.contains("  -3  (30)"));
        assert!(text.contains("Raw score:"));
    }

    #[test]
    fn test_format_analysis_plain() {
        let text = format_analysis_with_width(&sample_analysis(), false, 80);
        assert!(text.starts_with("Business Health Assessment\n  Stable"));
        assert!(text.contains("  Strong margins.\n  Small sales team."));
        assert!(text.contains("  * Hire two account executives"));
    }

    #[test]
    fn test_format_analysis_empty_actions() {
        let mut analysis = sample_analysis();
        analysis.recommended_best_actions.clear();
        let text = format_analysis_with_width(&analysis, false, 80);
        assert!(text.contains("(none)"));
    }
}
