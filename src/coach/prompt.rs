//! Prompt templates and model-response parsing
//!
//! Service implementations render these prompts, hand them to whatever
//! language model they wrap, and parse the JSON answer back.

use serde::Deserialize;

use super::{ActionPlan, ActionPlanRequest, Suggestion, SuggestionRequest};
use crate::error::{CoachError, CoachResult};

const SUGGESTIONS_TEMPLATE: &str = include_str!("templates/suggestions.mustache");
const ACTION_PLANS_TEMPLATE: &str = include_str!("templates/action_plans.mustache");

fn render<T: serde::Serialize>(template: &str, data: &T) -> CoachResult<String> {
    let template =
        mustache::compile_str(template).map_err(|e| CoachError::Prompt(e.to_string()))?;
    template
        .render_to_string(data)
        .map_err(|e| CoachError::Prompt(e.to_string()))
}

/// Prompt asking for strategies and activities per area
pub fn suggestion_prompt(request: &SuggestionRequest) -> CoachResult<String> {
    render(SUGGESTIONS_TEMPLATE, request)
}

/// Prompt asking for action plans for the weakest areas
pub fn action_plan_prompt(request: &ActionPlanRequest) -> CoachResult<String> {
    render(ACTION_PLANS_TEMPLATE, request)
}

#[derive(Deserialize)]
struct SuggestionsEnvelope {
    suggestions: Vec<Suggestion>,
}

#[derive(Deserialize)]
struct ActionPlansEnvelope {
    #[serde(rename = "actionPlans")]
    action_plans: Vec<ActionPlan>,
}

/// Strip a Markdown code fence some models wrap JSON in
fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse `{"suggestions": [...]}` from a model answer
pub fn parse_suggestions(raw: &str) -> CoachResult<Vec<Suggestion>> {
    serde_json::from_str::<SuggestionsEnvelope>(strip_fence(raw))
        .map(|env| env.suggestions)
        .map_err(|e| CoachError::MalformedResponse(e.to_string()))
}

/// Parse `{"actionPlans": [...]}` from a model answer
pub fn parse_action_plans(raw: &str) -> CoachResult<Vec<ActionPlan>> {
    serde_json::from_str::<ActionPlansEnvelope>(strip_fence(raw))
        .map(|env| env.action_plans)
        .map_err(|e| CoachError::MalformedResponse(e.to_string()))
}
