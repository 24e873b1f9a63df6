//! Template-based prompt assembly.
//!
//! Every prompt is built from the same ordered sections: the task itself, a
//! category block, one block per detected technology, a complexity block and
//! a fixed closing instruction. All blocks use the same heading + bullet layout.

use serde::{Deserialize, Serialize};

use crate::classifier::{classify, Classification};
use crate::taxonomy::{Category, Complexity, Technology};

pub const CLOSING_INSTRUCTION: &str = "## Deliverable\n\
- Produce complete, functional, ready-to-use code with no placeholders or TODOs.\n\
- Include every file needed to run the result, with a short note on how to start it.\n\
- Keep the code clean, commented where intent is not obvious, and consistent in style.";

/// A synthesized prompt together with the classification it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedPrompt {
    pub prompt: String,
    pub classification: Classification,
}

impl SynthesizedPrompt {
    pub fn from_classification(classification: Classification) -> Self {
        Self {
            prompt: synthesize(&classification),
            classification,
        }
    }

    pub fn from_task(task: &str) -> Self {
        Self::from_classification(classify(task))
    }
}

/// Build the instruction text for a classification. Deterministic.
pub fn synthesize(classification: &Classification) -> String {
    let mut sections: Vec<String> = Vec::with_capacity(5);

    sections.push(classification.original_task.clone());
    sections.push(category_block(classification.category));

    let tech_blocks: Vec<String> = classification
        .technologies
        .iter()
        .map(|tech| technology_block(*tech))
        .collect();
    if !tech_blocks.is_empty() {
        sections.push(format!("## Technologies\n\n{}", tech_blocks.join("\n\n")));
    }

    sections.push(complexity_block(classification.complexity));
    sections.push(CLOSING_INSTRUCTION.to_string());

    sections.join("\n\n")
}

fn bullets(heading: &str, items: &[&str]) -> String {
    let mut block = format!("{}\n", heading);
    for item in items {
        block.push_str("- ");
        block.push_str(item);
        block.push('\n');
    }
    block.truncate(block.trim_end().len());
    block
}

pub fn category_block(category: Category) -> String {
    let heading = format!("## Context: {}", category.title());
    match category {
        Category::UiDesign => bullets(
            &heading,
            &[
                "Establish a consistent visual hierarchy: spacing scale, typography and color palette.",
                "Make every layout responsive from mobile to wide desktop screens.",
                "Meet WCAG AA accessibility: contrast, focus states, keyboard navigation and ARIA labels.",
                "Use subtle, purposeful transitions and respect prefers-reduced-motion.",
            ],
        ),
        Category::Frontend => bullets(
            &heading,
            &[
                "Split the interface into small, reusable components with clear props.",
                "Keep state management predictable and local where possible.",
                "Handle loading, empty and error states explicitly in the UI.",
                "Validate user input on the client and give immediate feedback.",
            ],
        ),
        Category::Backend => bullets(
            &heading,
            &[
                "Design clear, consistent endpoints with proper HTTP methods and status codes.",
                "Validate and sanitize all incoming data before it reaches business logic.",
                "Separate routing, business logic and data access into distinct layers.",
                "Return structured error responses and log failures with enough context.",
            ],
        ),
        Category::Fullstack => bullets(
            &heading,
            &[
                "Define a shared contract (types or schema) between client and server.",
                "Organize the project into frontend, backend and shared folders.",
                "Handle errors end to end: server responses map to user-facing messages.",
                "Provide environment configuration and a single command to run both sides.",
            ],
        ),
        Category::Mobile => bullets(
            &heading,
            &[
                "Follow platform conventions for navigation, gestures and safe areas.",
                "Design for offline and flaky network conditions.",
                "Keep the UI thread free: move heavy work off the main thread.",
                "Support different screen sizes, orientations and system font scaling.",
            ],
        ),
        Category::Data => bullets(
            &heading,
            &[
                "Validate input data and handle missing or malformed records explicitly.",
                "Keep transformation steps small, composable and testable.",
                "Choose visualizations that match the data and label axes and units.",
                "Process large datasets in streams or batches to bound memory use.",
            ],
        ),
        Category::Auth => bullets(
            &heading,
            &[
                "Hash passwords with a modern algorithm (argon2 or bcrypt); never store plain text.",
                "Protect sessions and tokens: secure cookies, expiry and rotation.",
                "Rate-limit login attempts and return generic error messages.",
                "Cover registration, login, logout and password reset flows.",
            ],
        ),
        Category::Ecommerce => bullets(
            &heading,
            &[
                "Model products, cart, orders and customers with clear relationships.",
                "Compute prices and totals on the server; never trust client amounts.",
                "Integrate payments through the provider's secure, hosted flow.",
                "Handle stock, order status transitions and confirmation emails.",
            ],
        ),
        Category::Cms => bullets(
            &heading,
            &[
                "Model content types with drafts, publication status and timestamps.",
                "Provide an editing interface with preview before publishing.",
                "Sanitize rich text and markdown output to prevent XSS.",
                "Support slugs, pagination and basic SEO metadata.",
            ],
        ),
        Category::Game => bullets(
            &heading,
            &[
                "Structure the code around a clear game loop: input, update, render.",
                "Keep game state separate from rendering so rules are testable.",
                "Make the frame rate independent of game speed using delta time.",
                "Include scoring, win/lose conditions and a restart flow.",
            ],
        ),
        Category::General => bullets(
            &heading,
            &["Follow the conventions of the chosen language and keep the structure simple."],
        ),
    }
}

pub fn technology_block(tech: Technology) -> String {
    let heading = format!("### {}", tech.display_name());
    match tech {
        Technology::React => bullets(
            &heading,
            &[
                "Use functional components and hooks.",
                "Memoize only where profiling shows a need.",
            ],
        ),
        Technology::Vue => bullets(
            &heading,
            &[
                "Use the Composition API with `<script setup>`.",
                "Keep reactive state in composables.",
            ],
        ),
        Technology::Angular => bullets(
            &heading,
            &[
                "Use standalone components and typed reactive forms.",
                "Inject services for data access.",
            ],
        ),
        Technology::Svelte => bullets(
            &heading,
            &[
                "Use stores for shared state.",
                "Keep components small and reactive statements explicit.",
            ],
        ),
        Technology::NextJs => bullets(
            &heading,
            &[
                "Use the App Router with server components by default.",
                "Mark interactive components with `'use client'` only when needed.",
            ],
        ),
        Technology::NodeJs => bullets(
            &heading,
            &[
                "Use async/await throughout and handle promise rejections.",
                "Read configuration from environment variables.",
            ],
        ),
        Technology::Express => bullets(
            &heading,
            &[
                "Group routes with routers and validate input in middleware.",
                "Add a centralized error-handling middleware.",
            ],
        ),
        Technology::Python => bullets(
            &heading,
            &[
                "Follow PEP 8 and add type hints.",
                "Pin dependencies in a requirements or pyproject file.",
            ],
        ),
        Technology::Django => bullets(
            &heading,
            &[
                "Use models, forms and class-based views idiomatically.",
                "Keep settings split per environment.",
            ],
        ),
        Technology::Flask => bullets(
            &heading,
            &[
                "Use an application factory and blueprints.",
                "Register error handlers for JSON responses.",
            ],
        ),
        Technology::TypeScript => bullets(
            &heading,
            &[
                "Enable strict mode and avoid `any`.",
                "Define explicit types for public interfaces and API payloads.",
            ],
        ),
        Technology::JavaScript => bullets(
            &heading,
            &[
                "Use modern ES modules and `const`/`let`.",
                "Document function contracts with JSDoc.",
            ],
        ),
        Technology::Tailwind => bullets(
            &heading,
            &[
                "Use utility classes with a consistent design scale.",
                "Extract repeated patterns into components rather than custom CSS.",
            ],
        ),
        Technology::MongoDb => bullets(
            &heading,
            &[
                "Define schemas with validation and indexes for frequent queries.",
                "Handle connection errors and close connections cleanly.",
            ],
        ),
        Technology::PostgreSql => bullets(
            &heading,
            &[
                "Use migrations and parameterized queries.",
                "Add constraints and indexes that match access patterns.",
            ],
        ),
        Technology::MySql => bullets(
            &heading,
            &[
                "Use migrations and prepared statements.",
                "Choose InnoDB with utf8mb4 encoding.",
            ],
        ),
        Technology::Firebase => bullets(
            &heading,
            &[
                "Write security rules for every collection.",
                "Keep the Firebase config in environment variables.",
            ],
        ),
    }
}

pub fn complexity_block(complexity: Complexity) -> String {
    let heading = format!("## Complexity: {}", complexity.as_str());
    match complexity {
        Complexity::Simple => bullets(
            &heading,
            &[
                "Keep the solution minimal and easy to read for a beginner.",
                "Avoid extra dependencies and abstractions.",
            ],
        ),
        Complexity::Intermediate => bullets(
            &heading,
            &[
                "Balance clarity and robustness with a sensible project structure.",
                "Add input validation and basic tests for the main paths.",
            ],
        ),
        Complexity::Advanced => bullets(
            &heading,
            &[
                "Design for production: scalability, observability and security.",
                "Include automated tests, configuration per environment and deployment notes.",
            ],
        ),
    }
}
