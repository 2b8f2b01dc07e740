//! Structured response types for AI-generated study guides
//!
//! The model returns one `StudyGuide` with four sections:
//! - Speaking practice (idioms and phrases with bilingual meanings)
//! - Core vocabulary (band 7+ words with definitions and synonyms)
//! - Reading logic analysis (main idea and structure breakdown)
//! - Syntax analysis (one complex sentence dissected clause by clause)

mod guide;

pub use guide::{
    ClauseBreakdown, CoreVocabulary, ReadingLogicAnalysis, SpeakingItem, SpeakingPractice,
    StructurePoint, StudyGuide, SyntaxAnalysis, SyntaxAnalysisDetails, VocabWord,
    format_reading_section, format_speaking_section, format_study_guide, format_syntax_section,
    format_vocabulary_section,
};
