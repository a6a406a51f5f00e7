//! Scoring engine — pure functions from answers to a scored result.
//!
//! Algorithm:
//! 1. Tally: every "A" answer adds 1 to its question's category; "B" adds nothing.
//! 2. Top types: categories tied at the max score (and > 0), canonical order, at most 2.
//!    No positive score → the single first category under (score desc, canonical).
//! 3. Careers: first 3 titles per top type, de-duplicated, first seen wins.
//! 4. Summary: blurbs of the top types joined by one space.

use crate::assessment::catalog::{find_question, Category, Choice};
use crate::errors::AppError;
use crate::models::assessment::{Answer, AssessmentRequest, AssessmentResult, CategoryScores};

const MAX_TOP_TYPES: usize = 2;
const CAREERS_PER_TYPE: usize = 3;

/// Validates and tallies answers in input order. The first bad answer aborts.
pub fn tally(answers: &[Answer]) -> Result<CategoryScores, AppError> {
    let mut scores = CategoryScores::zeroed();

    for answer in answers {
        let question = find_question(answer.question_id)
            .ok_or(AppError::InvalidQuestionId(answer.question_id))?;
        let choice = Choice::parse(&answer.choice)
            .ok_or_else(|| AppError::InvalidChoice(answer.choice.clone()))?;
        if choice == Choice::A {
            scores.increment(question.category);
        }
    }

    Ok(scores)
}

pub fn select_top_types(scores: &CategoryScores) -> Vec<Category> {
    // stable sort over canonical order keeps canonical order within ties
    let mut ranked: Vec<(Category, u32)> = scores.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    // always six entries, one per category
    let (first, max_score) = ranked[0];

    let top: Vec<Category> = ranked
        .iter()
        .filter(|&&(_, s)| s == max_score && s > 0)
        .map(|&(c, _)| c)
        .take(MAX_TOP_TYPES)
        .collect();

    if top.is_empty() {
        vec![first]
    } else {
        top
    }
}

pub fn suggest_careers(top_types: &[Category]) -> Vec<String> {
    let mut careers: Vec<String> = Vec::new();
    for category in top_types {
        for &title in category.careers().iter().take(CAREERS_PER_TYPE) {
            if !careers.iter().any(|c| c == title) {
                careers.push(title.to_string());
            }
        }
    }
    careers
}

pub fn summarize(top_types: &[Category]) -> String {
    top_types
        .iter()
        .map(|c| c.blurb())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scores a request without touching persistence.
pub fn score_request(req: &AssessmentRequest) -> Result<AssessmentResult, AppError> {
    let scores = tally(&req.answers)?;
    let top_types = select_top_types(&scores);
    let careers = suggest_careers(&top_types);
    let summary = summarize(&top_types);

    Ok(AssessmentResult {
        name: req.name.clone(),
        email: req.email.clone(),
        scores,
        top_types,
        careers,
        summary,
    })
}
