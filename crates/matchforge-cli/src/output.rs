//! Human-readable rendering of command results.

use matchforge::{RuleRegistry, SolveResult, StickCount, TokenSequence};
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

pub fn print_result(result: &SolveResult, show_others: bool) {
    println!();
    if result.is_solved() {
        println!(
            "{} {} {}",
            "Solutions for".bold(),
            result.equation.white().bold(),
            format!("({})", result.solution_count()).bright_black()
        );
        for solution in &result.solutions {
            println!("  {} {}", "✓".bright_green(), solution.bright_green());
        }
    } else {
        println!(
            "{} {}",
            "No solution for".bright_red().bold(),
            result.equation.white().bold()
        );
    }

    if show_others && !result.others.is_empty() {
        println!();
        println!(
            "{} {}",
            "Other well-formed candidates".bold(),
            format!("({})", result.others.len()).bright_black()
        );
        for other in &result.others {
            println!("  {} {}", "·".bright_black(), other);
        }
    }

    let stats = &result.statistics;
    println!();
    println!(
        "{} {} mutations │ {} plausible │ {} variant{}{}",
        "Searched".bright_black(),
        result
            .total_mutations
            .to_formatted_string(&Locale::en)
            .white(),
        stats.plausible_count.to_formatted_string(&Locale::en).white(),
        stats.variant_count,
        if stats.variant_count == 1 { "" } else { "s" },
        if stats.terminated_early {
            format!(" │ {}", "budget exhausted".bright_yellow())
        } else {
            String::new()
        }
    );
}

pub fn print_check(equation: &str, valid: bool, holds: bool) {
    let verdict = if holds {
        "true".bright_green().bold().to_string()
    } else if valid {
        "false".bright_red().bold().to_string()
    } else {
        "malformed".bright_yellow().bold().to_string()
    };
    println!("{} is {}", equation.white().bold(), verdict);
}

pub fn print_variants(variants: &[TokenSequence]) {
    for (index, variant) in variants.iter().enumerate() {
        let glyphs: Vec<String> = variant.iter().map(|s| format!("[{s}]")).collect();
        println!(
            "{} {}",
            format!("reading {}:", index + 1).bright_black(),
            glyphs.join(" ").white()
        );
    }
}

pub fn print_modes(registry: &RuleRegistry) {
    let active = registry.active_mode();
    for name in registry.mode_names() {
        let Ok(rules) = registry.rule_set(name) else {
            continue;
        };
        let marker = if Some(name) == active { "*" } else { " " };
        println!(
            "{} {:<12} {} rules │ {} one-stick transforms │ {} two-stick transforms",
            marker.bright_green(),
            name.white().bold(),
            rules.rule_count(),
            rules.transforms(StickCount::One).len() / 2,
            rules.transforms(StickCount::Two).len() / 2,
        );
    }
}
