//! Fixed prompt and response-shape constants shared by all provider handlers

use serde_json::{Value, json};

/// System instruction sent with every analysis request
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert IELTS Tutor and Linguist AI designed to assist students in achieving Band 7+ scores. You function as the backend logic for an IELTS study platform.

Your task is to analyze the provided English article and generate a structured learning guide based on the user's specific requirements.
Crucially, you must provide Chinese translations for all definitions, meanings, and analytical points to help Chinese-speaking students understand better.

Your response MUST be a pure JSON object adhering to the required schema. Do not include markdown formatting or explanations outside the JSON.";

/// Human-readable example of the target JSON shape, appended to the system
/// instruction for providers without formal schema support
pub const JSON_SHAPE_EXAMPLE: &str = r#"
The JSON object must have exactly this shape:
{
  "speaking_practice": {
    "description": "...",
    "items": [
      {"phrase": "...", "meaning": "...", "meaning_cn": "...", "practice_sentences": ["..."]}
    ]
  },
  "core_vocabulary": {
    "description": "...",
    "words": [
      {"word": "...", "part_of_speech": "...", "definition": "...", "definition_cn": "...", "synonyms": ["..."]}
    ]
  },
  "reading_logic_analysis": {
    "description": "...",
    "main_idea": "...",
    "main_idea_cn": "...",
    "structure_breakdown": [{"en": "...", "cn": "..."}],
    "critical_thinking_point": "...",
    "critical_thinking_point_cn": "..."
  },
  "syntax_analysis": {
    "description": "...",
    "target_sentence": "...",
    "analysis": {
      "sentence_type": "...",
      "clauses_breakdown": [{"part": "...", "function": "...", "function_cn": "..."}],
      "grammar_highlight": "...",
      "grammar_highlight_cn": "..."
    }
  }
}"#;

/// Builds the user message wrapping the raw article text
pub fn user_prompt(article: &str) -> String {
    format!(
        "Analyze the following article for IELTS preparation and provide Chinese translations for key insights:\n\n{article}"
    )
}

/// Formal response schema for the Gemini `generateContent` endpoint.
///
/// Uses the Gemini REST schema dialect (uppercase type names). Field
/// descriptions are kept for the bilingual fields so the model knows which
/// side of each pair carries the translation.
pub fn gemini_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "speaking_practice": {
                "type": "OBJECT",
                "properties": {
                    "description": {"type": "STRING"},
                    "items": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "phrase": {"type": "STRING"},
                                "meaning": {"type": "STRING"},
                                "meaning_cn": {
                                    "type": "STRING",
                                    "description": "Chinese translation of the meaning"
                                },
                                "practice_sentences": {
                                    "type": "ARRAY",
                                    "items": {"type": "STRING"}
                                }
                            }
                        }
                    }
                }
            },
            "core_vocabulary": {
                "type": "OBJECT",
                "properties": {
                    "description": {"type": "STRING"},
                    "words": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "word": {"type": "STRING"},
                                "part_of_speech": {"type": "STRING"},
                                "definition": {"type": "STRING"},
                                "definition_cn": {
                                    "type": "STRING",
                                    "description": "Chinese translation of the definition"
                                },
                                "synonyms": {
                                    "type": "ARRAY",
                                    "items": {"type": "STRING"}
                                }
                            }
                        }
                    }
                }
            },
            "reading_logic_analysis": {
                "type": "OBJECT",
                "properties": {
                    "description": {"type": "STRING"},
                    "main_idea": {"type": "STRING"},
                    "main_idea_cn": {
                        "type": "STRING",
                        "description": "Chinese translation of the main idea"
                    },
                    "structure_breakdown": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "en": {"type": "STRING", "description": "Structure point in English"},
                                "cn": {"type": "STRING", "description": "Structure point in Chinese"}
                            }
                        }
                    },
                    "critical_thinking_point": {"type": "STRING"},
                    "critical_thinking_point_cn": {
                        "type": "STRING",
                        "description": "Chinese translation of the critical thinking point"
                    }
                }
            },
            "syntax_analysis": {
                "type": "OBJECT",
                "properties": {
                    "description": {"type": "STRING"},
                    "target_sentence": {"type": "STRING"},
                    "analysis": {
                        "type": "OBJECT",
                        "properties": {
                            "sentence_type": {"type": "STRING"},
                            "clauses_breakdown": {
                                "type": "ARRAY",
                                "items": {
                                    "type": "OBJECT",
                                    "properties": {
                                        "part": {"type": "STRING"},
                                        "function": {"type": "STRING"},
                                        "function_cn": {
                                            "type": "STRING",
                                            "description": "Chinese translation of the function (e.g. 主语从句)"
                                        }
                                    }
                                }
                            },
                            "grammar_highlight": {"type": "STRING"},
                            "grammar_highlight_cn": {
                                "type": "STRING",
                                "description": "Chinese translation of the grammar highlight"
                            }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_all_four_sections() {
        let schema = gemini_response_schema();
        let properties = schema["properties"]
            .as_object()
            .expect("schema has properties");
        for section in [
            "speaking_practice",
            "core_vocabulary",
            "reading_logic_analysis",
            "syntax_analysis",
        ] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }

    #[test]
    fn test_user_prompt_includes_article() {
        let prompt = user_prompt("The quick brown fox.");
        assert!(prompt.contains("The quick brown fox."));
        assert!(prompt.starts_with("Analyze the following article"));
    }

    #[test]
    fn test_shape_example_is_itself_valid_json_template() {
        // The embedded example after the sentence prefix must be parseable,
        // otherwise prompt-embedded providers get a broken template.
        let json_start = JSON_SHAPE_EXAMPLE
            .find('{')
            .expect("example contains an object");
        let value: serde_json::Value =
            serde_json::from_str(&JSON_SHAPE_EXAMPLE[json_start..]).expect("example parses");
        assert!(value.get("syntax_analysis").is_some());
    }
}
