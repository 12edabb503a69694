//! Free-form plan to ordered steps.
//!
//! [`PlanParser`] sends a plan document to a language model with a fixed
//! instruction and validates what comes back before anything reaches the
//! roadmap:
//!
//! ```text
//! plan text ──▶ CompletionProvider ──▶ strip ``` fences ──▶ JSON ──▶ Vec<ParsedStep>
//! ```
//!
//! The model is untrusted. Its reply must be a JSON array in which every
//! element is an object with both a `description` and a `done` field. One
//! malformed element rejects the whole reply. Elements whose description is
//! blank are dropped.
//!
//! # Examples
//!
//! ```rust,no_run
//! use smelt_core::{llm::HttpCompletionProvider, plan_parser::PlanParser};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = HttpCompletionProvider::new("https://openrouter.ai/api/v1/chat/completions")?;
//! let parser = PlanParser::new(provider, "anthropic/claude-haiku-4-5-20251001").with_retries(5);
//!
//! let steps = parser.parse("- [x] Create users table\n- [ ] Hash passwords").await?;
//! for step in &steps {
//!     println!("{} (done: {})", step.description, step.done);
//! }
//! # Ok(())
//! # }
//! ```

use log::debug;
use serde_json::Value;

use crate::{
    error::PlanParseError,
    llm::{CompletionProvider, CompletionRequest, Message},
    models::ParsedStep,
};

/// Retry budget handed to the completion provider unless overridden.
pub const DEFAULT_RETRIES: u32 = 3;

const SYSTEM_PROMPT: &str = "\
You are a project planning assistant. Your job is to read a plan and extract \
a flat, ordered list of concrete, actionable development steps.

Rules:
- Each step must be a single, self-contained task a developer can act on.
- Use plain English. No markdown, no numbering, no bullet characters.
- If a section is vague, break it into the smallest sensible concrete steps.
- Preserve completion status: if a step is clearly marked as done (e.g. [x], ✓, \
\"completed\", struck through), set done to true.
- Return ONLY a JSON array of objects with \"description\" and \"done\" fields, nothing else.

Example output:
[
  {\"description\": \"Create the users table in the database\", \"done\": true},
  {\"description\": \"Add password hashing to the auth module\", \"done\": false}
]
";

/// Turns plan documents into [`ParsedStep`]s through a completion provider.
pub struct PlanParser<P> {
    provider: P,
    model: String,
    api_key: Option<String>,
    retries: u32,
}

impl<P: CompletionProvider> PlanParser<P> {
    /// Create a parser that asks `model` through `provider`.
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            api_key: None,
            retries: DEFAULT_RETRIES,
        }
    }

    /// Pass an explicit API key to the provider.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Override the provider's retry budget.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Parse `content` into ordered steps.
    ///
    /// # Errors
    ///
    /// - `PlanParseError::LlmCall` if the provider fails after its retries
    /// - `PlanParseError::InvalidJson` if the reply is not JSON
    /// - `PlanParseError::UnexpectedStructure` if the JSON is not a list of
    ///   `{description, done}` objects
    pub async fn parse(&self, content: &str) -> Result<Vec<ParsedStep>, PlanParseError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(content)],
            retries: self.retries,
        };

        debug!(
            "Parsing plan of {} bytes with {} ({} retries)",
            content.len(),
            self.model,
            self.retries
        );
        let raw = self.provider.complete(&request).await?;
        parse_response(&raw)
    }
}

/// Validate a raw model reply and convert it into steps.
pub fn parse_response(raw: &str) -> Result<Vec<ParsedStep>, PlanParseError> {
    let json = strip_code_fence(raw);

    let value: Value = serde_json::from_str(json).map_err(|source| PlanParseError::InvalidJson {
        raw: raw.to_string(),
        source,
    })?;

    let unexpected = || PlanParseError::UnexpectedStructure {
        raw: raw.to_string(),
    };

    let items = value.as_array().ok_or_else(unexpected)?;

    let mut steps = Vec::with_capacity(items.len());
    for item in items {
        let object = item.as_object().ok_or_else(unexpected)?;
        let description = object
            .get("description")
            .and_then(Value::as_str)
            .ok_or_else(unexpected)?;
        let done = object.get("done").ok_or_else(unexpected)?;

        let description = description.trim();
        if !description.is_empty() {
            steps.push(ParsedStep::new(description, is_truthy(done)));
        }
    }

    Ok(steps)
}

/// Remove a surrounding Markdown code fence, with or without a language tag.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // Drop the language tag, if any, along with the opening fence line.
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    body.trim()
}

/// JSON truthiness: `false`, `null`, zero, and empty strings, arrays and
/// objects are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
