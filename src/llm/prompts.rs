// Messages sent to the completion API

use crate::taxonomy::Category;

const BASE_SYSTEM_PROMPT: &str = r#"You are a prompt engineering expert who specializes in optimizing prompts for AI coding assistants. Your job is to turn short descriptions of coding tasks into detailed, precise prompts that produce production-quality code.

When a user describes a coding task, write an optimized prompt that covers:

1. **Detailed technical specifications**:
   - Specific technologies and frameworks
   - Recommended architecture and patterns
   - Required dependencies and configuration

2. **Context and constraints**:
   - Best practices for the language/framework
   - Security standards
   - Performance and optimization

3. **Error handling and edge cases**:
   - Data validation
   - Exception handling
   - Tests and verification

4. **Structure and organization**:
   - File organization
   - Separation of concerns
   - Code documentation

The prompt must be clear, precise and detailed enough for the assistant to generate working code that is ready for production.

Reply ONLY with the optimized prompt, without any additional explanation."#;

fn category_focus(category: Category) -> &'static str {
    match category {
        Category::UiDesign => {
            "Focus on visual design: layout, typography, color, responsiveness and accessibility."
        }
        Category::Frontend => {
            "Focus on client-side architecture: components, state management and user feedback."
        }
        Category::Backend => {
            "Focus on server-side concerns: API design, validation, data access and error responses."
        }
        Category::Fullstack => {
            "Focus on the contract between client and server and on running both together."
        }
        Category::Mobile => {
            "Focus on platform conventions, offline behavior and performance on real devices."
        }
        Category::Data => {
            "Focus on data validation, transformation steps and clear visualizations."
        }
        Category::Auth => {
            "Focus on security: credential storage, session handling and attack mitigation."
        }
        Category::Ecommerce => {
            "Focus on catalog, cart, checkout and payment integrity."
        }
        Category::Cms => {
            "Focus on content modeling, editing workflow, publishing and output sanitization."
        }
        Category::Game => {
            "Focus on the game loop, state handling, input and scoring."
        }
        Category::General => {
            "Infer the most suitable technologies when the task does not name any."
        }
    }
}

/// System message for a classified task.
pub fn system_prompt(category: Category) -> String {
    format!(
        "{}\n\nTask category: {}. {}",
        BASE_SYSTEM_PROMPT,
        category.as_str(),
        category_focus(category)
    )
}

/// User message: the task itself plus the locally synthesized elaboration.
pub fn user_message(task: &str, elaboration: &str) -> String {
    format!(
        "Transform this coding task into an optimized prompt: \"{}\"\n\n\
         Use the following draft as a starting point and improve it:\n\n{}",
        task, elaboration
    )
}
