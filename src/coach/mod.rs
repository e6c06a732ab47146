//! Boundary with the external coaching (language model) service
//!
//! The core hands the service an immutable snapshot of names and scores and
//! awaits the answer; it never touches live wheel state while waiting.
//! Failures come back as a tagged `CoachError` and are never retried here.

pub mod prompt;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::CoachResult;
use crate::i18n::Translator;
use crate::wheel::LifeArea;

pub use prompt::{action_plan_prompt, parse_action_plans, parse_suggestions, suggestion_prompt};

/// Areas scoring below this are the focus of action plans
pub const ACTION_PLAN_THRESHOLD: u8 = 5;

/// Name and score of one area, as sent to the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaScore {
    pub name: String,
    pub score: u8,
}

impl From<&LifeArea> for AreaScore {
    fn from(area: &LifeArea) -> Self {
        Self {
            name: area.name.clone(),
            score: area.score,
        }
    }
}

/// Input of the suggestion flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub areas: Vec<AreaScore>,
    pub language: String,
}

impl SuggestionRequest {
    pub fn new(areas: &[LifeArea], language: &str) -> Self {
        Self {
            areas: areas.iter().map(AreaScore::from).collect(),
            language: language.to_string(),
        }
    }
}

/// Improvement advice for one area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub area: String,
    pub strategies: String,
    pub activities: String,
}

impl Suggestion {
    /// Advice that applies to any wheel
    pub fn generic(t: &dyn Translator) -> Self {
        Self {
            area: t.lookup("suggestions.generic.area"),
            strategies: t.lookup("suggestions.generic.strategies"),
            activities: t.lookup("suggestions.generic.activities"),
        }
    }
}

/// Input of the action-plan flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlanRequest {
    pub life_areas: Vec<AreaScore>,
    pub language: String,
    /// Plans concentrate on areas scoring below this
    pub focus_below: u8,
}

impl ActionPlanRequest {
    pub fn new(life_areas: Vec<AreaScore>, language: &str) -> Self {
        Self {
            life_areas,
            language: language.to_string(),
            focus_below: ACTION_PLAN_THRESHOLD,
        }
    }

    /// Areas the plans should concentrate on, lowest score first
    pub fn focus_areas(&self) -> Vec<&AreaScore> {
        let mut low: Vec<&AreaScore> = self
            .life_areas
            .iter()
            .filter(|a| a.score < self.focus_below)
            .collect();
        low.sort_by_key(|a| a.score);
        low
    }
}

/// A personalised plan for one area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    #[serde(rename = "areaName")]
    pub area_name: String,
    pub plan: String,
}

/// Produces improvement suggestions; implemented outside the core
pub trait SuggestionService {
    fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> impl Future<Output = CoachResult<Vec<Suggestion>>>;
}

/// Produces action plans; implemented outside the core
pub trait ActionPlanService {
    fn action_plans(
        &self,
        request: &ActionPlanRequest,
    ) -> impl Future<Output = CoachResult<Vec<ActionPlan>>>;
}

/// Ask the service for suggestions on a snapshot.
///
/// Success always carries at least one suggestion: an empty wheel or an
/// empty answer yields the generic suggestion instead.
pub async fn fetch_suggestions<S: SuggestionService>(
    service: &S,
    request: SuggestionRequest,
    t: &dyn Translator,
) -> CoachResult<Vec<Suggestion>> {
    if request.areas.is_empty() {
        log::info!("No areas to analyse, returning generic suggestion");
        return Ok(vec![Suggestion::generic(t)]);
    }

    log::info!(
        "Requesting suggestions for {} areas ({})",
        request.areas.len(),
        request.language
    );
    match service.suggest(&request).await {
        Ok(suggestions) if suggestions.is_empty() => {
            log::info!("Service returned no suggestions, using generic one");
            Ok(vec![Suggestion::generic(t)])
        }
        Ok(suggestions) => Ok(suggestions),
        Err(e) => {
            log::warn!("Suggestion service failed: {}", e);
            Err(e)
        }
    }
}

/// Ask the service for action plans on a snapshot
pub async fn fetch_action_plans<S: ActionPlanService>(
    service: &S,
    request: ActionPlanRequest,
) -> CoachResult<Vec<ActionPlan>> {
    if request.life_areas.is_empty() {
        return Ok(Vec::new());
    }
    service.action_plans(&request).await.inspect_err(|e| {
        log::warn!("Action plan service failed: {}", e);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoachError;
    use crate::i18n::Catalog;
    use std::cell::Cell;

    /// Answers from a canned result and counts calls
    struct CannedService {
        answer: CoachResult<Vec<Suggestion>>,
        calls: Cell<usize>,
    }

    impl CannedService {
        fn new(answer: CoachResult<Vec<Suggestion>>) -> Self {
            Self { answer, calls: Cell::new(0) }
        }
    }

    impl SuggestionService for CannedService {
        async fn suggest(&self, request: &SuggestionRequest) -> CoachResult<Vec<Suggestion>> {
            assert!(!request.areas.is_empty());
            self.calls.set(self.calls.get() + 1);
            self.answer.clone()
        }
    }

    struct EchoPlans;

    impl ActionPlanService for EchoPlans {
        async fn action_plans(&self, request: &ActionPlanRequest) -> CoachResult<Vec<ActionPlan>> {
            Ok(request
                .focus_areas()
                .into_iter()
                .map(|a| ActionPlan {
                    area_name: a.name.clone(),
                    plan: format!("raise {}", a.score),
                })
                .collect())
        }
    }

    fn request(scores: &[(&str, u8)]) -> SuggestionRequest {
        SuggestionRequest {
            areas: scores
                .iter()
                .map(|(n, s)| AreaScore {
                    name: n.to_string(),
                    score: *s,
                })
                .collect(),
            language: "en".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let advice = Suggestion {
            area: "Health".to_string(),
            strategies: "Rest".to_string(),
            activities: "Nap".to_string(),
        };
        let service = CannedService::new(Ok(vec![advice.clone()]));
        let t = Catalog::builtin("en");
        let result = fetch_suggestions(&service, request(&[("Health", 3)]), &t).await;
        assert_eq!(result, Ok(vec![advice]));
        assert_eq!(service.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_tagged_with_service_message() {
        let service = CannedService::new(Err(CoachError::Service("model overloaded".to_string())));
        let t = Catalog::builtin("en");
        let result = fetch_suggestions(&service, request(&[("Career", 7)]), &t).await;
        let err = result.unwrap_err();
        assert_eq!(err, CoachError::Service("model overloaded".to_string()));
        assert_eq!(err.message(), "model overloaded");
    }

    #[tokio::test]
    async fn test_empty_answer_becomes_generic() {
        let service = CannedService::new(Ok(Vec::new()));
        let t = Catalog::builtin("en");
        let result = fetch_suggestions(&service, request(&[("Career", 7)]), &t).await.unwrap();
        assert_eq!(result, vec![Suggestion::generic(&t)]);
    }

    #[tokio::test]
    async fn test_empty_wheel_skips_service() {
        let service = CannedService::new(Err(CoachError::Service("unused".to_string())));
        let result = fetch_suggestions(&service, request(&[]), &Catalog::builtin("pt"))
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].area, "Sua roda inteira");
        assert_eq!(service.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_action_plans_focus_on_low_scores() {
        let areas = request(&[("Career", 7), ("Fun", 2), ("Money", 4)]).areas;
        let req = ActionPlanRequest::new(areas, "en");
        let plans = fetch_action_plans(&EchoPlans, req).await.unwrap();
        let names: Vec<_> = plans.iter().map(|p| p.area_name.as_str()).collect();
        assert_eq!(names, vec!["Fun", "Money"]);
    }
}
