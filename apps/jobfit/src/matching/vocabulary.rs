//! Skill vocabulary: the closed set of recognizable skill terms, their alias
//! table, importance weights, and priority categories.
//!
//! Built once at startup and shared read-only (`Arc<SkillVocabulary>` in
//! `AppState`). Weight and category lookups are total functions with
//! documented defaults: several builtin terms deliberately have no weight or
//! category entry and resolve through the defaults.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Priority category of a canonical skill. Drives gap bucketing and the
/// ordering of keyword suggestions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Core,
    Important,
    #[default]
    Nice,
}

/// Detection strategy for a single term.
///
/// Terms carrying any of `+ # . -` cannot use word-boundary matching because
/// those are not word characters, so they fall back to plain substring
/// containment. All other terms are matched with `\b`-anchored patterns so
/// that "r" does not match inside "framework".
#[derive(Debug, Clone)]
pub enum TermPattern {
    Substring,
    WordBounded(Regex),
}

/// A recognized term together with its precompiled detection pattern.
#[derive(Debug, Clone)]
pub struct SkillTerm {
    pub term: String,
    pub pattern: TermPattern,
}

#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<SkillTerm>,
    aliases: HashMap<String, String>,
    weights: HashMap<String, u32>,
    categories: HashMap<String, SkillCategory>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from explicit tables. Terms are lowercased and get
    /// their detection pattern compiled here, once.
    pub fn from_tables(
        terms: &[&str],
        aliases: &[(&str, &str)],
        weights: &[(&str, u32)],
        categories: &[(&str, SkillCategory)],
    ) -> Self {
        let terms = terms
            .iter()
            .map(|t| {
                let term = t.to_lowercase();
                let pattern = compile_pattern(&term);
                SkillTerm { term, pattern }
            })
            .collect();

        Self {
            terms,
            aliases: aliases
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            weights: weights.iter().map(|(k, w)| (k.to_string(), *w)).collect(),
            categories: categories.iter().map(|(k, c)| (k.to_string(), *c)).collect(),
        }
    }

    /// The builtin skill tables, including their intentional gaps (terms like
    /// "dbms" or "dsa" that have no weight and/or category entry).
    pub fn builtin() -> Self {
        Self::from_tables(
            BUILTIN_TERMS,
            BUILTIN_ALIASES,
            BUILTIN_WEIGHTS,
            BUILTIN_CATEGORIES,
        )
    }

    pub fn terms(&self) -> &[SkillTerm] {
        &self.terms
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Resolves a matched term to its canonical skill. Identity when the term
    /// has no alias entry.
    pub fn canonical<'a>(&'a self, term: &'a str) -> &'a str {
        self.aliases.get(term).map(String::as_str).unwrap_or(term)
    }

    /// Importance weight of a canonical skill. Defaults to 1 for skills with
    /// no weight entry.
    pub fn weight_of(&self, skill: &str) -> u32 {
        self.weights.get(skill).copied().unwrap_or(1)
    }

    /// Priority category of a canonical skill. Defaults to `Nice` for skills
    /// with no category entry.
    pub fn category_of(&self, skill: &str) -> SkillCategory {
        self.categories.get(skill).copied().unwrap_or_default()
    }
}

fn compile_pattern(term: &str) -> TermPattern {
    let is_special = term.chars().any(|c| matches!(c, '+' | '#' | '.' | '-'));
    if is_special {
        TermPattern::Substring
    } else {
        let pattern = format!(r"\b{}\b", regex::escape(term));
        TermPattern::WordBounded(Regex::new(&pattern).expect("escaped term compiles"))
    }
}

const BUILTIN_TERMS: &[&str] = &[
    // languages and fundamentals
    "python",
    "java",
    "c",
    "c++",
    "sql",
    "r",
    "html",
    "json",
    "mysql",
    "css",
    "javascript",
    "kotlin",
    "flutter",
    // data / ML libraries
    "numpy",
    "pandas",
    "pytorch",
    "spacy",
    "transformers",
    "faiss",
    "scikit-learn",
    "sklearn",
    "matplotlib",
    // concepts
    "machine learning",
    "ml",
    "nlp",
    "rag",
    "embeddings",
    "data structures",
    "database",
    "dbms",
    "computer network",
    "operating system",
    "os",
    "data structures and algorithm",
    "oops",
    "dsa",
    "oop",
    // tooling
    "git",
    "github",
    "postman",
    "android development",
    "web development",
    "artificial intelligence",
    "ai",
    // office
    "ms word",
    "ms excel",
    "powerpoint",
];

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("ml", "machine learning"),
    ("machine learning", "machine learning"),
    ("ai", "artificial intelligence"),
    ("artificial intelligence", "artificial intelligence"),
    ("oop", "oops"),
    ("oops", "oops"),
    ("sql", "sql"),
    ("mysql", "sql"),
    ("os", "operating system"),
    ("data structure and algorithm", "data structures and algorithms"),
    ("data structures and algorithms", "data structures and algorithms"),
];

const BUILTIN_WEIGHTS: &[(&str, u32)] = &[
    ("python", 3),
    ("java", 3),
    ("c", 3),
    ("c++", 3),
    ("sql", 3),
    ("r", 3),
    ("html", 3),
    ("json", 3),
    ("css", 3),
    ("javascript", 3),
    ("kotlin", 3),
    ("flutter", 3),
    ("artificial intelligence", 3),
    ("machine learning", 3),
    ("data structures and algorithms", 3),
    ("numpy", 2),
    ("pandas", 2),
    ("pytorch", 2),
    ("spacy", 2),
    ("transformers", 2),
    ("faiss", 2),
    ("scikit-learn", 2),
    ("sklearn", 2),
    ("matplotlib", 2),
    ("nlp", 2),
    ("rag", 2),
    ("embeddings", 2),
    ("database", 2),
    ("git", 2),
    ("github", 2),
    ("oops", 2),
    ("operating system", 1),
    ("computer network", 1),
    ("postman", 1),
    ("android development", 1),
    ("web development", 1),
    ("ms word", 1),
    ("ms excel", 1),
    ("powerpoint", 1),
];

const BUILTIN_CATEGORIES: &[(&str, SkillCategory)] = &[
    ("python", SkillCategory::Core),
    ("java", SkillCategory::Core),
    ("sql", SkillCategory::Core),
    ("machine learning", SkillCategory::Core),
    ("data structures and algorithms", SkillCategory::Core),
    ("artificial intelligence", SkillCategory::Core),
    ("pandas", SkillCategory::Important),
    ("numpy", SkillCategory::Important),
    ("nlp", SkillCategory::Important),
    ("git", SkillCategory::Important),
    ("github", SkillCategory::Important),
    ("database", SkillCategory::Important),
    ("dbms", SkillCategory::Important),
    ("pytorch", SkillCategory::Important),
    ("transformers", SkillCategory::Important),
    ("faiss", SkillCategory::Important),
    ("postman", SkillCategory::Nice),
    ("android development", SkillCategory::Nice),
    ("web development", SkillCategory::Nice),
    ("ms word", SkillCategory::Nice),
    ("ms excel", SkillCategory::Nice),
    ("powerpoint", SkillCategory::Nice),
    ("computer network", SkillCategory::Nice),
    ("operating system", SkillCategory::Nice),
];
