use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::catalog::Category;

/// GET /api/questions item.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: i64,
    pub text: &'static str,
    pub options: QuestionOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionOptions {
    #[serde(rename = "A")]
    pub a: &'static str,
    #[serde(rename = "B")]
    pub b: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub question_id: i64,
    pub choice: String, // validated against "A" | "B" during scoring
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub answers: Vec<Answer>,
}

/// Per-category tallies. All six codes are always present, serialized in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryScores(BTreeMap<Category, u32>);

impl CategoryScores {
    pub fn zeroed() -> Self {
        Self(Category::CANONICAL.iter().map(|&c| (c, 0)).collect())
    }

    pub fn increment(&mut self, category: Category) {
        *self.0.entry(category).or_insert(0) += 1;
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// (category, score) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::CANONICAL.iter().map(|&c| (c, self.get(c)))
    }
}

/// A scored assessment. This is also the persisted document body.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResult {
    pub name: Option<String>,
    pub email: Option<String>,
    pub scores: CategoryScores,
    pub top_types: Vec<Category>,
    pub careers: Vec<String>,
    pub summary: String,
}

/// POST /api/assess response body. `id` is null when the result was not stored.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub id: Option<String>,
    pub scores: CategoryScores,
    pub top_types: Vec<Category>,
    pub careers: Vec<String>,
    pub summary: String,
}

impl AssessmentResponse {
    pub fn new(id: Option<String>, result: AssessmentResult) -> Self {
        Self {
            id,
            scores: result.scores,
            top_types: result.top_types,
            careers: result.careers,
            summary: result.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_scores_have_all_six_keys_in_order() {
        let json = serde_json::to_string(&CategoryScores::zeroed()).unwrap();
        assert_eq!(json, r#"{"R":0,"I":0,"A":0,"S":0,"E":0,"C":0}"#);
    }

    #[test]
    fn test_increment_and_total() {
        let mut scores = CategoryScores::zeroed();
        scores.increment(Category::S);
        scores.increment(Category::S);
        scores.increment(Category::C);
        assert_eq!(scores.get(Category::S), 2);
        assert_eq!(scores.get(Category::R), 0);
        assert_eq!(scores.total(), 3);
    }

    #[test]
    fn test_request_name_and_email_are_optional() {
        let req: AssessmentRequest =
            serde_json::from_str(r#"{"answers":[{"question_id":1,"choice":"A"}]}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.email.is_none());
        assert_eq!(req.answers.len(), 1);
    }
}
