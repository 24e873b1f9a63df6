//! Keyword taxonomy used by the classifier.
//!
//! Category order is significant: when two categories reach the same score the
//! one declared first in [`Category::ALL`] wins.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    UiDesign,
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    Data,
    Auth,
    Ecommerce,
    Cms,
    Game,
    General,
}

impl Category {
    /// Declaration order, also the tie-break order.
    pub const ALL: [Category; 11] = [
        Category::UiDesign,
        Category::Frontend,
        Category::Backend,
        Category::Fullstack,
        Category::Mobile,
        Category::Data,
        Category::Auth,
        Category::Ecommerce,
        Category::Cms,
        Category::Game,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::UiDesign => "ui_design",
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Fullstack => "fullstack",
            Category::Mobile => "mobile",
            Category::Data => "data",
            Category::Auth => "auth",
            Category::Ecommerce => "ecommerce",
            Category::Cms => "cms",
            Category::Game => "game",
            Category::General => "general",
        }
    }

    /// Human-readable title used in prompt headings.
    pub fn title(&self) -> &'static str {
        match self {
            Category::UiDesign => "UI Design",
            Category::Frontend => "Frontend Development",
            Category::Backend => "Backend Development",
            Category::Fullstack => "Full-Stack Application",
            Category::Mobile => "Mobile Application",
            Category::Data => "Data Processing & Visualization",
            Category::Auth => "Authentication & Security",
            Category::Ecommerce => "E-commerce",
            Category::Cms => "Content Management",
            Category::Game => "Game Development",
            Category::General => "General Development",
        }
    }

    /// Trigger keywords, lower-case. `General` has none.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::UiDesign => &[
                "design",
                "ui design",
                "user interface",
                "interface utilisateur",
                "ux",
                "maquette",
                "mockup",
                "wireframe",
                "figma",
                "landing page",
                "animation",
                "responsive",
            ],
            Category::Frontend => &[
                "frontend",
                "front-end",
                "component",
                "composant",
                "website",
                "site web",
                "web page",
                "page web",
                "dashboard",
                "tableau de bord",
                "navbar",
                "formulaire",
            ],
            Category::Backend => &[
                "backend",
                "back-end",
                "api",
                "rest api",
                "graphql",
                "server",
                "serveur",
                "endpoint",
                "microservice",
                "database",
                "base de données",
                "crud",
            ],
            Category::Fullstack => &[
                "fullstack",
                "full-stack",
                "full stack",
                "frontend and backend",
                "front and back",
                "application complète",
                "complete application",
            ],
            Category::Mobile => &[
                "mobile",
                "android",
                "iphone",
                "react native",
                "flutter",
                "swiftui",
                "kotlin",
                "smartphone",
                "app store",
            ],
            Category::Data => &[
                "data analysis",
                "data pipeline",
                "données",
                "analytics",
                "chart",
                "visualization",
                "visualisation",
                "csv",
                "etl",
                "machine learning",
                "dataset",
                "statistics",
                "statistiques",
                "scraping",
            ],
            Category::Auth => &[
                "auth",
                "authentication",
                "authentification",
                "login",
                "sign up",
                "signup",
                "password",
                "mot de passe",
                "jwt",
                "oauth",
                "session",
                "connexion",
                "inscription",
            ],
            Category::Ecommerce => &[
                "ecommerce",
                "e-commerce",
                "shop",
                "boutique",
                "cart",
                "panier",
                "checkout",
                "payment",
                "paiement",
                "stripe",
                "product catalog",
                "catalogue",
            ],
            Category::Cms => &[
                "cms",
                "blog",
                "content management",
                "article",
                "wordpress",
                "markdown editor",
                "headless",
                "publication",
            ],
            Category::Game => &[
                "game",
                "jeu",
                "jeux",
                "player",
                "joueur",
                "score",
                "level",
                "canvas",
                "phaser",
                "sprite",
            ],
            Category::General => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ui_design" | "ui-design" | "design" => Ok(Category::UiDesign),
            "frontend" => Ok(Category::Frontend),
            "backend" => Ok(Category::Backend),
            "fullstack" => Ok(Category::Fullstack),
            "mobile" => Ok(Category::Mobile),
            "data" => Ok(Category::Data),
            "auth" => Ok(Category::Auth),
            "ecommerce" | "e-commerce" => Ok(Category::Ecommerce),
            "cms" => Ok(Category::Cms),
            "game" => Ok(Category::Game),
            "general" => Ok(Category::General),
            _ => bail!("Unknown category: {}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Technology {
    React,
    Vue,
    Angular,
    Svelte,
    NextJs,
    NodeJs,
    Express,
    Python,
    Django,
    Flask,
    TypeScript,
    JavaScript,
    Tailwind,
    MongoDb,
    PostgreSql,
    MySql,
    Firebase,
}

impl Technology {
    /// Detection and prompt-section order.
    pub const ALL: [Technology; 17] = [
        Technology::React,
        Technology::Vue,
        Technology::Angular,
        Technology::Svelte,
        Technology::NextJs,
        Technology::NodeJs,
        Technology::Express,
        Technology::Python,
        Technology::Django,
        Technology::Flask,
        Technology::TypeScript,
        Technology::JavaScript,
        Technology::Tailwind,
        Technology::MongoDb,
        Technology::PostgreSql,
        Technology::MySql,
        Technology::Firebase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Technology::React => "react",
            Technology::Vue => "vue",
            Technology::Angular => "angular",
            Technology::Svelte => "svelte",
            Technology::NextJs => "nextjs",
            Technology::NodeJs => "nodejs",
            Technology::Express => "express",
            Technology::Python => "python",
            Technology::Django => "django",
            Technology::Flask => "flask",
            Technology::TypeScript => "typescript",
            Technology::JavaScript => "javascript",
            Technology::Tailwind => "tailwind",
            Technology::MongoDb => "mongodb",
            Technology::PostgreSql => "postgresql",
            Technology::MySql => "mysql",
            Technology::Firebase => "firebase",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Technology::React => "React",
            Technology::Vue => "Vue.js",
            Technology::Angular => "Angular",
            Technology::Svelte => "Svelte",
            Technology::NextJs => "Next.js",
            Technology::NodeJs => "Node.js",
            Technology::Express => "Express",
            Technology::Python => "Python",
            Technology::Django => "Django",
            Technology::Flask => "Flask",
            Technology::TypeScript => "TypeScript",
            Technology::JavaScript => "JavaScript",
            Technology::Tailwind => "Tailwind CSS",
            Technology::MongoDb => "MongoDB",
            Technology::PostgreSql => "PostgreSQL",
            Technology::MySql => "MySQL",
            Technology::Firebase => "Firebase",
        }
    }

    /// Any of these occurring as a substring marks the technology as present.
    /// Short keywords like "js" also match inside longer words ("nextjs").
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Technology::React => &["react"],
            Technology::Vue => &["vue", "vuejs", "nuxt"],
            Technology::Angular => &["angular"],
            Technology::Svelte => &["svelte"],
            Technology::NextJs => &["nextjs", "next.js", "next js"],
            Technology::NodeJs => &["node", "nodejs", "node.js"],
            Technology::Express => &["express"],
            Technology::Python => &["python", "django", "flask", "fastapi"],
            Technology::Django => &["django"],
            Technology::Flask => &["flask"],
            Technology::TypeScript => &["typescript", "tsx"],
            Technology::JavaScript => &["javascript", "js"],
            Technology::Tailwind => &["tailwind"],
            Technology::MongoDb => &["mongodb", "mongo", "mongoose"],
            Technology::PostgreSql => &["postgresql", "postgres", "psql"],
            Technology::MySql => &["mysql", "mariadb"],
            Technology::Firebase => &["firebase", "firestore"],
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Technology {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Technology::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| anyhow::anyhow!("Unknown technology: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Intermediate,
    Advanced,
}

/// Checked first; a match here wins over any advanced indicator.
pub const SIMPLE_INDICATORS: &[&str] = &[
    "simple",
    "basic",
    "basique",
    "minimal",
    "beginner",
    "débutant",
];

pub const ADVANCED_INDICATORS: &[&str] = &[
    "advanced",
    "avancé",
    "complex",
    "professional",
    "professionnel",
    "enterprise",
    "entreprise",
    "scalable",
    "production-grade",
    "production ready",
    "robust",
    "robuste",
];

impl Complexity {
    pub const ALL: [Complexity; 3] = [
        Complexity::Simple,
        Complexity::Intermediate,
        Complexity::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "simple" | "basic" => Ok(Complexity::Simple),
            "intermediate" => Ok(Complexity::Intermediate),
            "advanced" => Ok(Complexity::Advanced),
            _ => bail!("Unknown complexity: {}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
        }
    }

    #[test]
    fn test_category_from_str_aliases() {
        assert_eq!(Category::from_str("UI_DESIGN").unwrap(), Category::UiDesign);
        assert_eq!(Category::from_str("e-commerce").unwrap(), Category::Ecommerce);
        assert!(Category::from_str("spaceship").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn test_category_declaration_order() {
        assert_eq!(Category::ALL[0], Category::UiDesign);
        assert_eq!(Category::ALL[1], Category::Frontend);
        assert_eq!(Category::ALL[10], Category::General);
        // Ord follows declaration order
        assert!(Category::Frontend < Category::Cms);
    }

    #[test]
    fn test_general_has_no_keywords() {
        assert!(Category::General.keywords().is_empty());
        for category in &Category::ALL[..10] {
            assert!(!category.keywords().is_empty(), "{} has no keywords", category);
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for category in Category::ALL {
            for kw in category.keywords() {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
        for tech in Technology::ALL {
            for kw in tech.keywords() {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
        for kw in SIMPLE_INDICATORS.iter().chain(ADVANCED_INDICATORS) {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }

    #[test]
    fn test_technology_as_str_roundtrip() {
        for tech in Technology::ALL {
            assert_eq!(Technology::from_str(tech.as_str()).unwrap(), tech);
        }
        assert!(Technology::from_str("cobol").is_err());
    }

    #[test]
    fn test_technology_ord_matches_all() {
        let mut sorted = Technology::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Technology::ALL.to_vec());
    }

    #[test]
    fn test_complexity_default_is_intermediate() {
        assert_eq!(Complexity::default(), Complexity::Intermediate);
        assert_eq!(Complexity::from_str("Advanced").unwrap(), Complexity::Advanced);
        assert!(Complexity::from_str("extreme").is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Category::UiDesign).unwrap(),
            "\"ui_design\""
        );
        assert_eq!(
            serde_json::to_string(&Technology::PostgreSql).unwrap(),
            "\"postgresql\""
        );
        assert_eq!(
            serde_json::to_string(&Complexity::Simple).unwrap(),
            "\"simple\""
        );
    }
}
