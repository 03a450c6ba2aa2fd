//! Prompt rules, instruction templates and generation parameters.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper bound on completion length requested from the model.
pub const GENERATION_MAX_TOKENS: u32 = 800;

/// Sampling temperature requested from the model.
pub const GENERATION_TEMPERATURE: f32 = 0.7;

/// Example prompts offered by the form. Choosing one overwrites the draft.
pub const EXAMPLE_PROMPTS: [&str; 5] = [
    "Create a work tasks todo list",
    "Make a shopping list for the weekend",
    "Build a vacation planning checklist",
    "Design a home renovation task list",
    "Create a study plan for finals",
];

/// System message establishing the model as a strict JSON emitter.
pub const SYSTEM_INSTRUCTION: &str = concat!(
    "You are a todo list generator. Generate a todo list based on the user's input. ",
    "Return the response in JSON format with the exact structure: ",
    r#"{ "name": "List name", "todos": [{ "title": "Task name", "description": "Task description", "#,
    r#""priority": "high" OR "medium" OR "low" (choose one), "completed": boolean, "#,
    r#""dueDate": "YYYY-MM-DD" (optional) }] }. "#,
    "Always use valid JSON format with these exact field names."
);

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// True when the prompt has no non-whitespace content.
pub fn is_blank(prompt: &str) -> bool {
    prompt.trim().is_empty()
}

/// User message embedding the prompt and an explicit output-shape example.
pub fn user_instruction(prompt: &str) -> String {
    format!(
        concat!(
            "Create a todo list for: {prompt}. Return the data as JSON with this exact format: ",
            r#"{{ "name": "List name", "todos": [{{ "title": "Task name", "description": "Task description", "#,
            r#""priority": "high" or "medium" or "low" (choose one), "completed": false }}] }}. "#,
            r#"Do not use "high|medium|low" as a value, choose exactly one of: "high", "medium", or "low"."#
        ),
        prompt = prompt
    )
}
