use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::ExtractionResult;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
}

struct TopicDef {
    name: &'static str,
    emoji: &'static str,
    keywords: &'static [&'static str],
}

/// The eight fixed topics, in tie-breaking priority order. Multi-word
/// keywords are matched as substrings, single words against the article's
/// word set.
static TOPICS: &[TopicDef] = &[
    TopicDef {
        name: "World",
        emoji: "🌍",
        keywords: &[
            "international", "global", "foreign", "diplomatic", "embassy", "treaty",
            "united nations", "un", "nato", "eu", "european union", "summit", "war",
            "conflict", "refugee", "humanitarian",
        ],
    },
    TopicDef {
        name: "Politics",
        emoji: "🏛️",
        keywords: &[
            "congress", "senate", "house", "representative", "president",
            "administration", "white house", "democrat", "republican", "election",
            "vote", "ballot", "campaign", "legislation", "bill", "law", "policy",
            "governor", "mayor", "political",
        ],
    },
    TopicDef {
        name: "Markets",
        emoji: "💰",
        keywords: &[
            "stock", "market", "dow", "nasdaq", "s&p", "investor", "trading",
            "shares", "bond", "yield", "fed", "federal reserve", "interest rate",
            "inflation", "gdp", "economy", "economic", "recession", "growth",
            "earnings", "revenue", "profit", "quarterly",
        ],
    },
    TopicDef {
        name: "Technology",
        emoji: "🔬",
        keywords: &[
            "tech", "technology", "ai", "artificial intelligence", "machine learning",
            "software", "app", "startup", "silicon valley", "google", "apple",
            "microsoft", "amazon", "meta", "facebook", "twitter", "social media",
            "cybersecurity", "hack", "data", "privacy", "cloud", "chip",
            "semiconductor",
        ],
    },
    TopicDef {
        name: "Science",
        emoji: "🧪",
        keywords: &[
            "science", "scientific", "research", "study", "researchers", "scientists",
            "discovery", "experiment", "lab", "laboratory", "nasa", "space", "climate",
            "environment", "nature", "biology", "physics", "chemistry", "medicine",
            "health", "disease", "vaccine", "treatment", "drug",
        ],
    },
    TopicDef {
        name: "Sports",
        emoji: "⚽",
        keywords: &[
            "sport", "game", "match", "team", "player", "coach", "championship",
            "league", "nfl", "nba", "mlb", "nhl", "soccer", "football", "basketball",
            "baseball", "hockey", "tennis", "golf", "olympics", "score", "win",
            "loss", "season",
        ],
    },
    TopicDef {
        name: "Entertainment",
        emoji: "🎬",
        keywords: &[
            "movie", "film", "tv", "television", "show", "series", "actor", "actress",
            "director", "celebrity", "star", "music", "album", "song", "artist",
            "concert", "tour", "award", "oscar", "emmy", "grammy", "netflix",
            "streaming", "box office",
        ],
    },
    TopicDef {
        name: "Business",
        emoji: "📊",
        keywords: &[
            "business", "company", "corporate", "ceo", "executive", "merger",
            "acquisition", "deal", "ipo", "startup", "venture", "investment",
            "industry", "manufacturing", "retail", "consumer", "brand", "marketing",
        ],
    },
];

const FALLBACK_TOPIC: &str = "Other";
const FALLBACK_EMOJI: &str = "📌";

/// One digest section: a topic and the articles assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSection {
    pub name: String,
    pub emoji: String,
    pub articles: Vec<ExtractionResult>,
}

/// Keyword-overlap topic classifier for digest sections.
///
/// Each article is scored against every topic's keyword set; the highest
/// overlap count wins, with ties broken by topic definition order. An
/// article matching nothing lands in the "Other" bucket.
#[derive(Debug, Clone, Default)]
pub struct TopicClusterer {
    /// Sections with fewer articles than this are left out of the digest.
    pub min_cluster_size: usize,
}

impl TopicClusterer {
    pub fn new(min_cluster_size: usize) -> Self {
        TopicClusterer { min_cluster_size }
    }

    /// Group articles into topic sections, in topic definition order with
    /// "Other" last. Articles keep their relative order within a section.
    pub fn cluster(&self, articles: Vec<ExtractionResult>) -> Vec<TopicSection> {
        let mut sections: Vec<TopicSection> = TOPICS
            .iter()
            .map(|t| TopicSection {
                name: t.name.to_string(),
                emoji: t.emoji.to_string(),
                articles: Vec::new(),
            })
            .collect();
        sections.push(TopicSection {
            name: FALLBACK_TOPIC.to_string(),
            emoji: FALLBACK_EMOJI.to_string(),
            articles: Vec::new(),
        });

        for article in articles {
            let slot = classify(&article);
            sections[slot].articles.push(article);
        }

        sections.retain(|s| !s.articles.is_empty() && s.articles.len() >= self.min_cluster_size);

        tracing::debug!(sections = sections.len(), "topic clustering complete");
        sections
    }
}

/// Index into the section list (TOPICS order, fallback last).
fn classify(article: &ExtractionResult) -> usize {
    let content = format!(
        "{} {}",
        article.title.as_deref().unwrap_or(""),
        article.text
    )
    .to_lowercase();

    let words: HashSet<&str> = WORD.find_iter(&content).map(|m| m.as_str()).collect();

    let mut best: Option<(usize, usize)> = None;
    for (index, topic) in TOPICS.iter().enumerate() {
        let score = topic
            .keywords
            .iter()
            .filter(|k| {
                if k.contains(' ') {
                    content.contains(*k)
                } else {
                    words.contains(*k)
                }
            })
            .count();

        // Strictly greater, so the first topic wins ties.
        if score > 0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((index, score));
        }
    }

    best.map_or(TOPICS.len(), |(index, _)| index)
}
