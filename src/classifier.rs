use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::taxonomy::{Category, Complexity, Technology, ADVANCED_INDICATORS, SIMPLE_INDICATORS};

/// Result of classifying a task description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: Category,
    /// Ordered by [`Technology::ALL`].
    pub technologies: BTreeSet<Technology>,
    pub complexity: Complexity,
    pub original_task: String,
}

/// Classify a task description. Never fails; unmatched text falls back to
/// `general` / `intermediate` with no technologies.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    let classification = Classification {
        category: detect_category(&lower),
        technologies: detect_technologies(&lower),
        complexity: detect_complexity(&lower),
        original_task: text.to_string(),
    };

    debug!(
        "Classified task: category={}, technologies={:?}, complexity={}",
        classification.category, classification.technologies, classification.complexity
    );

    classification
}

/// Number of distinct keywords of `category` found in `lower`.
pub fn category_score(category: Category, lower: &str) -> usize {
    category
        .keywords()
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count()
}

fn detect_category(lower: &str) -> Category {
    let mut best = Category::General;
    let mut best_score = 0;

    // Strict `>` keeps the earlier-declared category on ties
    for category in Category::ALL {
        let score = category_score(category, lower);
        if score > best_score {
            best = category;
            best_score = score;
        }
    }

    best
}

fn detect_technologies(lower: &str) -> BTreeSet<Technology> {
    Technology::ALL
        .iter()
        .copied()
        .filter(|tech| tech.keywords().iter().any(|kw| lower.contains(kw)))
        .collect()
}

fn detect_complexity(lower: &str) -> Complexity {
    if SIMPLE_INDICATORS.iter().any(|kw| lower.contains(kw)) {
        Complexity::Simple
    } else if ADVANCED_INDICATORS.iter().any(|kw| lower.contains(kw)) {
        Complexity::Advanced
    } else {
        Complexity::Intermediate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_falls_back_to_general() {
        let c = classify("xyzzyplugh nonsense text");
        assert_eq!(c.category, Category::General);
        assert!(c.technologies.is_empty());
        assert_eq!(c.complexity, Complexity::Intermediate);
        assert_eq!(c.original_task, "xyzzyplugh nonsense text");
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        for input in ["", "   ", "\n\t"] {
            let c = classify(input);
            assert_eq!(c.category, Category::General);
            assert!(c.technologies.is_empty());
            assert_eq!(c.complexity, Complexity::Intermediate);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let c = classify("Build a REST API with NODE.JS");
        assert_eq!(c.category, Category::Backend);
        assert!(c.technologies.contains(&Technology::NodeJs));
    }

    #[test]
    fn test_tie_goes_to_earlier_category() {
        // "dashboard" (frontend) and "blog" (cms) each score 1
        assert_eq!(category_score(Category::Frontend, "a dashboard for my blog"), 1);
        assert_eq!(category_score(Category::Cms, "a dashboard for my blog"), 1);
        assert_eq!(classify("a dashboard for my blog").category, Category::Frontend);
        assert_eq!(classify("a blog with a dashboard").category, Category::Frontend);
    }

    #[test]
    fn test_higher_score_beats_declaration_order() {
        // one frontend keyword vs three cms keywords
        let c = classify("a dashboard for a wordpress blog with article pages");
        assert_eq!(c.category, Category::Cms);
    }

    #[test]
    fn test_score_counts_keywords_not_occurrences() {
        assert_eq!(category_score(Category::Game, "game game game"), 1);
        assert_eq!(category_score(Category::Game, "game with a player score"), 3);
    }

    #[test]
    fn test_simple_wins_over_advanced() {
        let c = classify("simple but enterprise scalable thing");
        assert_eq!(c.complexity, Complexity::Simple);
    }

    #[test]
    fn test_advanced_detected() {
        assert_eq!(
            classify("a scalable microservice").complexity,
            Complexity::Advanced
        );
        assert_eq!(
            classify("une application professionnelle").complexity,
            Complexity::Advanced
        );
    }

    #[test]
    fn test_french_simple_indicator() {
        assert_eq!(
            classify("un formulaire basique").complexity,
            Complexity::Simple
        );
    }

    #[test]
    fn test_technologies_inclusive() {
        let c = classify("a react app with tailwind and postgresql");
        assert!(c.technologies.contains(&Technology::React));
        assert!(c.technologies.contains(&Technology::Tailwind));
        assert!(c.technologies.contains(&Technology::PostgreSql));
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        // "js" inside "nextjs" also tags javascript
        let c = classify("landing page in nextjs");
        assert!(c.technologies.contains(&Technology::NextJs));
        assert!(c.technologies.contains(&Technology::JavaScript));
    }

    #[test]
    fn test_technology_order_is_declaration_order() {
        let c = classify("postgresql, tailwind and react");
        let order: Vec<Technology> = c.technologies.iter().copied().collect();
        assert_eq!(
            order,
            vec![Technology::React, Technology::Tailwind, Technology::PostgreSql]
        );
    }

    #[test]
    fn test_very_long_input() {
        let text = "checkout ".repeat(5000);
        let c = classify(&text);
        assert_eq!(c.category, Category::Ecommerce);
        assert_eq!(c.original_task.len(), text.len());
    }

    #[test]
    fn test_french_auth_task() {
        let c = classify("Créer un système d'authentification utilisateur avec React et Firebase");
        assert_eq!(c.category, Category::Auth);
        assert!(c.technologies.contains(&Technology::React));
        assert!(c.technologies.contains(&Technology::Firebase));
    }
}
