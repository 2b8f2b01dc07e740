use crate::cli::Section;
use crate::common::CommonParams;
use crate::config::Config;
use crate::llm::{self, MIN_ARTICLE_CHARS};
use crate::log_debug;
use crate::output;
use crate::providers::Provider;
use crate::store::ResultStore;
use crate::types::{
    StudyGuide, format_reading_section, format_speaking_section, format_study_guide,
    format_syntax_section, format_vocabulary_section,
};
use crate::ui;
use crate::ui::rgb;
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;

/// Handle the 'analyze' command
pub async fn handle_analyze_command(
    common: CommonParams,
    file: Option<PathBuf>,
    print: bool,
) -> Result<()> {
    log_debug!(
        "Starting 'analyze' command with common: {:?}, file: {:?}, print: {}",
        common,
        file,
        print
    );

    let article = read_article(file)?;
    if article.chars().count() < MIN_ARTICLE_CHARS {
        return Err(anyhow!(
            "Article too short: need at least {MIN_ARTICLE_CHARS} characters for a meaningful analysis"
        ));
    }

    let mut config = Config::load()?;
    // One-shot overrides; deliberately not persisted
    common.apply_to_config(&mut config)?;

    let provider = config.active_provider();
    let spinner = ui::create_spinner(&format!(
        "Analyzing with {} ({})...",
        provider.display_name(),
        config.provider_config(provider).effective_model(provider)
    ));

    let result = llm::analyze_article(&article, &config).await;
    spinner.finish_and_clear();

    let guide = result?;

    if print {
        println!("{}", format_study_guide(&guide));
        return Ok(());
    }

    ResultStore::open()?.save(&guide)?;
    output::render_guide(&guide);
    ui::print_message(&format!(
        "{}",
        "Saved. Re-display any time with `lexiband show`.".dimmed()
    ));

    Ok(())
}

/// Handle the 'show' command
pub fn handle_show_command(section: Option<Section>, copy: bool) -> Result<()> {
    let store = ResultStore::open()?;
    let Some(guide) = store.load()? else {
        ui::print_warning("No saved study guide. Run `lexiband analyze` first.");
        return Ok(());
    };

    match section {
        Some(Section::Speaking) => output::render_speaking(&guide.speaking_practice),
        Some(Section::Vocab) => output::render_vocabulary(&guide.core_vocabulary),
        Some(Section::Reading) => output::render_reading(&guide.reading_logic_analysis),
        Some(Section::Syntax) => output::render_syntax(&guide.syntax_analysis),
        None => output::render_guide(&guide),
    }

    if copy {
        output::copy_to_clipboard(&section_text(&guide, section));
    }

    Ok(())
}

/// Handle the 'clear' command
pub fn handle_clear_command() -> Result<()> {
    ResultStore::open()?.clear()?;
    ui::print_success("Saved study guide cleared.");
    Ok(())
}

/// Handle the 'config' command
pub fn handle_config_command(
    common: &CommonParams,
    api_key: Option<String>,
    list: bool,
) -> Result<()> {
    log_debug!(
        "Starting 'config' command with common: {:?}, api_key set: {}, list: {}",
        common,
        api_key.is_some(),
        list
    );

    let mut config = Config::load()?;

    let mut changes_made = common.apply_to_config(&mut config)?;

    if let Some(key) = api_key {
        let provider = config.active_provider();
        let provider_config = config.provider_config_mut(provider);
        if provider_config.api_key != key {
            provider_config.api_key = key;
            changes_made = true;
        }
    }

    if changes_made {
        config.save()?;
        ui::print_success("Configuration updated successfully.");
        ui::print_newline();
    }

    if list || !changes_made {
        print_configuration(&config);
    }

    Ok(())
}

/// Serialize the requested slice of the guide as plain text
fn section_text(guide: &StudyGuide, section: Option<Section>) -> String {
    match section {
        Some(Section::Speaking) => format_speaking_section(&guide.speaking_practice),
        Some(Section::Vocab) => format_vocabulary_section(&guide.core_vocabulary),
        Some(Section::Reading) => format_reading_section(&guide.reading_logic_analysis),
        Some(Section::Syntax) => format_syntax_section(&guide.syntax_analysis),
        None => format_study_guide(guide),
    }
}

/// Read the article from a file, or from stdin when no file is given
fn read_article(file: Option<PathBuf>) -> Result<String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("Could not read {}: {e}", path.display()))?,
        None => {
            if !ui::is_quiet_mode() {
                ui::print_message(&format!(
                    "{}",
                    "Paste your article, then press Ctrl-D:".dimmed()
                ));
            }
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text.trim().to_string())
}

/// Print the current configuration with API keys masked
fn print_configuration(config: &Config) {
    let purple = rgb::ELECTRIC_PURPLE;
    let cyan = rgb::NEON_CYAN;
    let dim = rgb::DIM_WHITE;
    let dim_sep = rgb::DIM_SEPARATOR;

    println!(
        "\n{}",
        ui::create_gradient_text("📖 lexiband configuration").bold()
    );
    println!("{}", "─".repeat(40).truecolor(dim_sep.0, dim_sep.1, dim_sep.2));

    for provider in Provider::ALL {
        let provider_config = config.provider_config(*provider);
        let is_active = config.active_provider() == *provider;
        let header = if is_active {
            format!("{} ✦", provider.name().to_uppercase())
        } else {
            provider.name().to_uppercase()
        };
        println!();
        println!(
            "{} {}",
            "─".truecolor(purple.0, purple.1, purple.2),
            header.truecolor(purple.0, purple.1, purple.2).bold()
        );

        print_config_row(
            "Model",
            provider_config.effective_model(*provider),
            cyan,
            is_active,
        );
        print_config_row("API Key", &mask_key(&provider_config.api_key), dim, false);
        print_config_row(
            "Models",
            &provider.available_models().join(", "),
            dim,
            false,
        );
    }

    println!();
    println!("{}", "─".repeat(40).truecolor(dim_sep.0, dim_sep.1, dim_sep.2));
    println!();
}

/// Print a config row with label and value
fn print_config_row(label: &str, value: &str, value_color: (u8, u8, u8), highlight: bool) {
    let dim = rgb::DIM_WHITE;
    let label_styled = format!("{label:>12}").truecolor(dim.0, dim.1, dim.2);

    let value_styled = if highlight {
        value
            .truecolor(value_color.0, value_color.1, value_color.2)
            .bold()
    } else {
        value.truecolor(value_color.0, value_color.1, value_color.2)
    };

    println!("{label_styled}  {value_styled}");
}

/// Mask an API key for display, keeping only the last four characters
fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }
    let tail: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key(""), "(not set)");
        assert_eq!(mask_key("sk-abcdef123456"), "…3456");
        assert_eq!(mask_key("abc"), "…abc");
    }
}
