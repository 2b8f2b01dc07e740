//! Terminal renderers for the four study-guide sections.
//!
//! Each renderer is a read-only view over one slice of the guide; none of
//! them validate the data they are given. The matching `format_*` functions
//! in [`crate::types`] produce the plain-text summaries used for clipboard
//! export.

use crate::types::{
    CoreVocabulary, ReadingLogicAnalysis, SpeakingPractice, StudyGuide, SyntaxAnalysis,
};
use crate::ui;
use crate::ui::rgb;
use colored::Colorize;

const WRAP_WIDTH: usize = 78;

fn print_section_header(title: &str) {
    println!();
    println!("{}", ui::create_gradient_text(title).bold());
    println!(
        "{}",
        "─".repeat(WRAP_WIDTH)
            .truecolor(rgb::DIM_SEPARATOR.0, rgb::DIM_SEPARATOR.1, rgb::DIM_SEPARATOR.2)
    );
}

fn print_wrapped_dim(text: &str) {
    for line in textwrap::wrap(text, WRAP_WIDTH) {
        println!(
            "{}",
            line.truecolor(rgb::DIM_WHITE.0, rgb::DIM_WHITE.1, rgb::DIM_WHITE.2)
                .italic()
        );
    }
}

fn print_wrapped(text: &str) {
    for line in textwrap::wrap(text, WRAP_WIDTH) {
        println!("{line}");
    }
}

/// Render the speaking practice section
pub fn render_speaking(section: &SpeakingPractice) {
    print_section_header("◆ Speaking Practice");
    print_wrapped_dim(&section.description);
    for item in &section.items {
        println!();
        println!(
            "  {}",
            item.phrase
                .truecolor(rgb::NEON_CYAN.0, rgb::NEON_CYAN.1, rgb::NEON_CYAN.2)
                .bold()
        );
        println!("  {}", item.meaning);
        println!(
            "  {}",
            item.meaning_cn
                .truecolor(rgb::CORAL.0, rgb::CORAL.1, rgb::CORAL.2)
        );
        for sentence in &item.practice_sentences {
            println!(
                "    {} {}",
                "·".truecolor(rgb::DIM_SEPARATOR.0, rgb::DIM_SEPARATOR.1, rgb::DIM_SEPARATOR.2),
                sentence.italic()
            );
        }
    }
}

/// Render the core vocabulary section
pub fn render_vocabulary(section: &CoreVocabulary) {
    print_section_header("◆ Core Vocabulary");
    print_wrapped_dim(&section.description);
    for word in &section.words {
        println!();
        println!(
            "  {} {}",
            word.word
                .truecolor(rgb::NEON_CYAN.0, rgb::NEON_CYAN.1, rgb::NEON_CYAN.2)
                .bold(),
            format!("({})", word.part_of_speech).dimmed()
        );
        println!("  {}", word.definition);
        println!(
            "  {}",
            word.definition_cn
                .truecolor(rgb::CORAL.0, rgb::CORAL.1, rgb::CORAL.2)
        );
        if !word.synonyms.is_empty() {
            println!(
                "  {} {}",
                "Synonyms:".dimmed(),
                word.synonyms.join(", ").truecolor(
                    rgb::ELECTRIC_YELLOW.0,
                    rgb::ELECTRIC_YELLOW.1,
                    rgb::ELECTRIC_YELLOW.2
                )
            );
        }
    }
}

/// Render the reading logic section
pub fn render_reading(section: &ReadingLogicAnalysis) {
    print_section_header("◆ Reading Logic Analysis");
    print_wrapped_dim(&section.description);
    println!();
    println!("  {}", "Main idea".bold());
    print_wrapped(&format!("  {}", section.main_idea));
    println!(
        "  {}",
        section
            .main_idea_cn
            .truecolor(rgb::CORAL.0, rgb::CORAL.1, rgb::CORAL.2)
    );
    println!();
    println!("  {}", "Structure".bold());
    for (i, point) in section.structure_breakdown.iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1)
                .truecolor(rgb::NEON_CYAN.0, rgb::NEON_CYAN.1, rgb::NEON_CYAN.2),
            point.en
        );
        println!(
            "     {}",
            point.cn.truecolor(rgb::CORAL.0, rgb::CORAL.1, rgb::CORAL.2)
        );
    }
    println!();
    println!("  {}", "Critical thinking".bold());
    print_wrapped(&format!("  {}", section.critical_thinking_point));
    println!(
        "  {}",
        section
            .critical_thinking_point_cn
            .truecolor(rgb::CORAL.0, rgb::CORAL.1, rgb::CORAL.2)
    );
}

/// Render the syntax analysis section
pub fn render_syntax(section: &SyntaxAnalysis) {
    print_section_header("◆ Syntax Analysis");
    print_wrapped_dim(&section.description);
    println!();
    print_wrapped(&format!("  “{}”", section.target_sentence));
    println!(
        "  {}",
        section
            .analysis
            .sentence_type
            .truecolor(rgb::ELECTRIC_YELLOW.0, rgb::ELECTRIC_YELLOW.1, rgb::ELECTRIC_YELLOW.2)
            .bold()
    );
    println!();
    for clause in &section.analysis.clauses_breakdown {
        println!(
            "  {} {}",
            clause
                .part
                .truecolor(rgb::NEON_CYAN.0, rgb::NEON_CYAN.1, rgb::NEON_CYAN.2),
            format!("— {} ({})", clause.function, clause.function_cn).dimmed()
        );
    }
    println!();
    println!("  {}", "Grammar highlight".bold());
    print_wrapped(&format!("  {}", section.analysis.grammar_highlight));
    println!(
        "  {}",
        section
            .analysis
            .grammar_highlight_cn
            .truecolor(rgb::CORAL.0, rgb::CORAL.1, rgb::CORAL.2)
    );
}

/// Render all four sections in their canonical order
pub fn render_guide(guide: &StudyGuide) {
    render_speaking(&guide.speaking_practice);
    render_vocabulary(&guide.core_vocabulary);
    render_reading(&guide.reading_logic_analysis);
    render_syntax(&guide.syntax_analysis);
    println!();
}

/// Place a plain-text summary on the system clipboard.
///
/// Falls back to printing the text when no clipboard is available (e.g.
/// headless sessions), so the summary is never silently lost.
pub fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string()))
    {
        Ok(()) => ui::print_success("✓ Copied to clipboard"),
        Err(e) => {
            ui::print_warning(&format!("Clipboard unavailable ({e}); printing instead"));
            println!("{text}");
        }
    }
}
