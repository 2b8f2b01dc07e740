//! Result store persistence tests

use lexiband::store::ResultStore;
use lexiband::types::StudyGuide;
use std::fs;
use tempfile::TempDir;

fn sample_guide() -> StudyGuide {
    serde_json::from_str(
        r#"{
        "speaking_practice": {
            "description": "Idioms.",
            "items": [{
                "phrase": "in the long run",
                "meaning": "over a long period",
                "meaning_cn": "从长远来看",
                "practice_sentences": ["In the long run, practice pays off."]
            }]
        },
        "core_vocabulary": {
            "description": "Vocabulary.",
            "words": [{
                "word": "resilient",
                "part_of_speech": "adjective",
                "definition": "able to recover quickly",
                "definition_cn": "有韧性的",
                "synonyms": ["tough"]
            }]
        },
        "reading_logic_analysis": {
            "description": "Logic.",
            "main_idea": "Habits compound.",
            "main_idea_cn": "习惯会积累。",
            "structure_breakdown": [{"en": "Claim first", "cn": "先提出论点"}],
            "critical_thinking_point": "Evidence is anecdotal.",
            "critical_thinking_point_cn": "证据多为轶事。"
        },
        "syntax_analysis": {
            "description": "Syntax.",
            "target_sentence": "What matters is consistency.",
            "analysis": {
                "sentence_type": "Complex sentence",
                "clauses_breakdown": [{
                    "part": "What matters",
                    "function": "subject clause",
                    "function_cn": "主语从句"
                }],
                "grammar_highlight": "Nominal clause as subject",
                "grammar_highlight_cn": "名词性从句作主语"
            }
        }
    }"#,
    )
    .expect("sample guide parses")
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let store = ResultStore::at(dir.path().join("last_analysis.json"));

    let guide = sample_guide();
    store.save(&guide).expect("Failed to save guide");

    let loaded = store.load().expect("Failed to load guide");
    assert_eq!(loaded, Some(guide));
}

#[test]
fn test_load_without_saved_result_is_none() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let store = ResultStore::at(dir.path().join("last_analysis.json"));
    assert_eq!(store.load().expect("load should succeed"), None);
}

#[test]
fn test_clear_removes_saved_result() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let store = ResultStore::at(dir.path().join("last_analysis.json"));

    store.save(&sample_guide()).expect("Failed to save guide");
    store.clear().expect("Failed to clear store");
    assert_eq!(store.load().expect("load should succeed"), None);

    // Clearing an already-empty store is not an error
    store.clear().expect("second clear should succeed");
}

#[test]
fn test_save_replaces_previous_result_wholesale() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let store = ResultStore::at(dir.path().join("last_analysis.json"));

    let first = sample_guide();
    store.save(&first).expect("Failed to save guide");

    let mut second = sample_guide();
    second.reading_logic_analysis.main_idea = "A different idea.".to_string();
    store.save(&second).expect("Failed to save guide");

    assert_eq!(store.load().expect("load should succeed"), Some(second));
}

#[test]
fn test_unreadable_blob_is_treated_as_absent() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = dir.path().join("last_analysis.json");
    fs::write(&path, "{ not json").expect("Failed to write file");

    let store = ResultStore::at(path);
    assert_eq!(store.load().expect("load should succeed"), None);
}
