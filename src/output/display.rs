//! Display functions for command results

use super::formatters::{create_progress_bar, tile};
use crate::commands::{AnalysisResult, CheckResult};
use colored::Colorize;

/// Print the feedback for a single secret/guess pair
pub fn print_check_result(result: &CheckResult) {
    let tiles: String = result
        .guess
        .chars()
        .zip(result.feedback.iter())
        .map(|(letter, state)| tile(letter, state).to_string())
        .collect();

    println!(
        "\n{} {}",
        "Secret:".bright_black(),
        result.secret.to_uppercase().bright_white().bold()
    );
    println!("{} {}", "Guess: ".bright_black(), tiles);
    println!("        {}", result.feedback.to_emoji());
    println!("        {}", result.feedback);

    if result.feedback.is_solved() {
        println!("\n{}", "Solved!".green().bold());
    }
}

/// Print how a guess splits the answer set
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_answers);
    println!("   Distinct feedbacks: {}", result.bucket_count);
    println!(
        "   Expected:           {} answers remain",
        format!("{:.1}", result.expected_remaining).bright_yellow()
    );
    println!("   Worst case:         {} answers remain", result.largest_bucket);

    println!("\n📈 {}", "Most common feedback:".bright_cyan().bold());
    for &(feedback, count) in &result.top_buckets {
        let pct = count as f64 / result.total_answers as f64 * 100.0;
        let bar = create_progress_bar(count as f64, result.largest_bucket as f64, 30);
        println!(
            "   {} {} {count:5} ({pct:5.1}%)",
            feedback.to_emoji(),
            bar.green()
        );
    }
}
