//! Study guide types and plain-text formatting
//!
//! Field names mirror the JSON shape the model is instructed to produce, so
//! the guide deserializes directly from the provider's response content. All
//! four top-level sections are required; inner fields are passed through
//! exactly as the model returned them, defaulting to empty when absent, so
//! partial model output still renders.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One idiomatic phrase with bilingual meaning and practice sentences
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SpeakingItem {
    pub phrase: String,
    pub meaning: String,
    /// Chinese translation of the meaning
    pub meaning_cn: String,
    pub practice_sentences: Vec<String>,
}

/// Speaking practice section
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SpeakingPractice {
    pub description: String,
    pub items: Vec<SpeakingItem>,
}

/// One vocabulary entry with bilingual definition and synonyms
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VocabWord {
    pub word: String,
    pub part_of_speech: String,
    pub definition: String,
    /// Chinese translation of the definition
    pub definition_cn: String,
    pub synonyms: Vec<String>,
}

/// Core vocabulary section
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CoreVocabulary {
    pub description: String,
    pub words: Vec<VocabWord>,
}

/// A single structure point in English and Chinese
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StructurePoint {
    pub en: String,
    pub cn: String,
}

/// Reading logic section: main idea, structure, and a critical thinking point
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReadingLogicAnalysis {
    pub description: String,
    pub main_idea: String,
    pub main_idea_cn: String,
    pub structure_breakdown: Vec<StructurePoint>,
    pub critical_thinking_point: String,
    pub critical_thinking_point_cn: String,
}

/// One clause of the target sentence with its grammatical function
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClauseBreakdown {
    pub part: String,
    pub function: String,
    /// Chinese translation of the function (e.g. 主语从句)
    pub function_cn: String,
}

/// Clause-level dissection of the target sentence
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SyntaxAnalysisDetails {
    pub sentence_type: String,
    pub clauses_breakdown: Vec<ClauseBreakdown>,
    pub grammar_highlight: String,
    pub grammar_highlight_cn: String,
}

/// Syntax analysis section
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SyntaxAnalysis {
    pub description: String,
    pub target_sentence: String,
    pub analysis: SyntaxAnalysisDetails,
}

/// The full four-section study guide produced by one analysis call
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StudyGuide {
    pub speaking_practice: SpeakingPractice,
    pub core_vocabulary: CoreVocabulary,
    pub reading_logic_analysis: ReadingLogicAnalysis,
    pub syntax_analysis: SyntaxAnalysis,
}

const WRAP_WIDTH: usize = 78;

fn push_wrapped(out: &mut String, text: &str) {
    for line in textwrap::wrap(text, WRAP_WIDTH) {
        out.push_str(&line);
        out.push('\n');
    }
}

/// Formats the speaking practice section as a plain-text summary
pub fn format_speaking_section(section: &SpeakingPractice) -> String {
    let mut out = String::from("SPEAKING PRACTICE\n\n");
    push_wrapped(&mut out, &section.description);
    for item in &section.items {
        writeln!(&mut out, "\n• {}", item.phrase).expect("write to string should not fail");
        writeln!(&mut out, "  {} / {}", item.meaning, item.meaning_cn)
            .expect("write to string should not fail");
        for sentence in &item.practice_sentences {
            writeln!(&mut out, "  - {sentence}").expect("write to string should not fail");
        }
    }
    out
}

/// Formats the core vocabulary section as a plain-text summary
pub fn format_vocabulary_section(section: &CoreVocabulary) -> String {
    let mut out = String::from("CORE VOCABULARY\n\n");
    push_wrapped(&mut out, &section.description);
    for word in &section.words {
        writeln!(&mut out, "\n• {} ({})", word.word, word.part_of_speech)
            .expect("write to string should not fail");
        writeln!(&mut out, "  {} / {}", word.definition, word.definition_cn)
            .expect("write to string should not fail");
        if !word.synonyms.is_empty() {
            writeln!(&mut out, "  Synonyms: {}", word.synonyms.join(", "))
                .expect("write to string should not fail");
        }
    }
    out
}

/// Formats the reading logic section as a plain-text summary
pub fn format_reading_section(section: &ReadingLogicAnalysis) -> String {
    let mut out = String::from("READING LOGIC ANALYSIS\n\n");
    push_wrapped(&mut out, &section.description);
    out.push_str("\nMain idea:\n");
    push_wrapped(&mut out, &section.main_idea);
    push_wrapped(&mut out, &section.main_idea_cn);
    out.push_str("\nStructure breakdown:\n");
    for (i, point) in section.structure_breakdown.iter().enumerate() {
        writeln!(&mut out, "{}. {}", i + 1, point.en).expect("write to string should not fail");
        writeln!(&mut out, "   {}", point.cn).expect("write to string should not fail");
    }
    out.push_str("\nCritical thinking:\n");
    push_wrapped(&mut out, &section.critical_thinking_point);
    push_wrapped(&mut out, &section.critical_thinking_point_cn);
    out
}

/// Formats the syntax analysis section as a plain-text summary
pub fn format_syntax_section(section: &SyntaxAnalysis) -> String {
    let mut out = String::from("SYNTAX ANALYSIS\n\n");
    push_wrapped(&mut out, &section.description);
    out.push_str("\nTarget sentence:\n");
    push_wrapped(&mut out, &section.target_sentence);
    writeln!(&mut out, "\nSentence type: {}", section.analysis.sentence_type)
        .expect("write to string should not fail");
    out.push_str("\nClauses:\n");
    for clause in &section.analysis.clauses_breakdown {
        writeln!(
            &mut out,
            "• {} — {} ({})",
            clause.part, clause.function, clause.function_cn
        )
        .expect("write to string should not fail");
    }
    out.push_str("\nGrammar highlight:\n");
    push_wrapped(&mut out, &section.analysis.grammar_highlight);
    push_wrapped(&mut out, &section.analysis.grammar_highlight_cn);
    out
}

/// Formats all four sections into one plain-text document
pub fn format_study_guide(guide: &StudyGuide) -> String {
    let divider = format!("\n{}\n\n", "=".repeat(WRAP_WIDTH));
    let mut out = format_speaking_section(&guide.speaking_practice);
    out.push_str(&divider);
    out.push_str(&format_vocabulary_section(&guide.core_vocabulary));
    out.push_str(&divider);
    out.push_str(&format_reading_section(&guide.reading_logic_analysis));
    out.push_str(&divider);
    out.push_str(&format_syntax_section(&guide.syntax_analysis));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_guide() -> StudyGuide {
        StudyGuide {
            speaking_practice: SpeakingPractice {
                description: "Useful idioms from the article.".to_string(),
                items: vec![SpeakingItem {
                    phrase: "a double-edged sword".to_string(),
                    meaning: "something with both benefits and drawbacks".to_string(),
                    meaning_cn: "双刃剑".to_string(),
                    practice_sentences: vec!["Technology is a double-edged sword.".to_string()],
                }],
            },
            core_vocabulary: CoreVocabulary {
                description: "Band 7+ vocabulary.".to_string(),
                words: vec![VocabWord {
                    word: "ubiquitous".to_string(),
                    part_of_speech: "adjective".to_string(),
                    definition: "present everywhere".to_string(),
                    definition_cn: "无处不在的".to_string(),
                    synonyms: vec!["omnipresent".to_string(), "pervasive".to_string()],
                }],
            },
            reading_logic_analysis: ReadingLogicAnalysis {
                description: "How the argument is built.".to_string(),
                main_idea: "Automation reshapes labour markets.".to_string(),
                main_idea_cn: "自动化重塑劳动力市场。".to_string(),
                structure_breakdown: vec![StructurePoint {
                    en: "Opens with a historical parallel".to_string(),
                    cn: "以历史类比开篇".to_string(),
                }],
                critical_thinking_point: "Correlation is not causation.".to_string(),
                critical_thinking_point_cn: "相关不等于因果。".to_string(),
            },
            syntax_analysis: SyntaxAnalysis {
                description: "The most complex sentence in the text.".to_string(),
                target_sentence: "While many fear change, history suggests adaptation."
                    .to_string(),
                analysis: SyntaxAnalysisDetails {
                    sentence_type: "Complex sentence".to_string(),
                    clauses_breakdown: vec![ClauseBreakdown {
                        part: "While many fear change".to_string(),
                        function: "concessive clause".to_string(),
                        function_cn: "让步状语从句".to_string(),
                    }],
                    grammar_highlight: "Concessive 'while'".to_string(),
                    grammar_highlight_cn: "让步连词 while".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_guide_round_trips_through_json() {
        let guide = sample_guide();
        let json = serde_json::to_string(&guide).expect("serialize should succeed");
        let parsed: StudyGuide = serde_json::from_str(&json).expect("parse should succeed");
        assert_eq!(parsed, guide);
    }

    #[test]
    fn test_missing_inner_field_passes_through_as_empty() {
        let mut value = serde_json::to_value(sample_guide()).expect("serialize should succeed");
        value["speaking_practice"]["items"][0]
            .as_object_mut()
            .expect("item is an object")
            .remove("meaning_cn");

        let parsed: StudyGuide = serde_json::from_value(value).expect("partial guide parses");
        assert_eq!(parsed.speaking_practice.items[0].meaning_cn, "");
        assert_eq!(
            parsed.speaking_practice.items[0].phrase,
            "a double-edged sword"
        );
    }

    #[test]
    fn test_guide_requires_all_four_sections() {
        let mut value = serde_json::to_value(sample_guide()).expect("serialize should succeed");
        value
            .as_object_mut()
            .expect("guide serializes to an object")
            .remove("syntax_analysis");
        assert!(serde_json::from_value::<StudyGuide>(value).is_err());
    }

    #[test]
    fn test_format_speaking_section_includes_phrase_and_translation() {
        let text = format_speaking_section(&sample_guide().speaking_practice);
        assert!(text.contains("a double-edged sword"));
        assert!(text.contains("双刃剑"));
    }

    #[test]
    fn test_format_study_guide_contains_all_headers() {
        let text = format_study_guide(&sample_guide());
        for header in [
            "SPEAKING PRACTICE",
            "CORE VOCABULARY",
            "READING LOGIC ANALYSIS",
            "SYNTAX ANALYSIS",
        ] {
            assert!(text.contains(header), "missing header: {header}");
        }
    }
}
