//! Answer remap — reconciles form answers with the vendor's internal ids.
//!
//! The public `/form` endpoint and the SPI `/questions` endpoint use different
//! identifier schemes, so the form can only label answers by question text and
//! choice text. Before forwarding, each answer is rewritten against the
//! authoritative question list: the matching question's id becomes the
//! answer's `question_key`, and for choice-type questions every selected
//! label becomes the vendor's choice id.
//!
//! Pure and deterministic; no I/O.

use std::collections::HashMap;

use crate::errors::AppError;
use crate::workable::types::{Answer, Question};

/// Rewrites `answers` into a new list carrying vendor-internal ids.
///
/// Order is preserved. Rules, per answer:
/// 1. Look up the question whose `body` equals the answer's `label`. When the
///    vendor repeats a body, the first occurrence wins. No match: the answer
///    passes through untouched (no `question_key`, original choices kept) and
///    the vendor decides what to do with it.
/// 2. On a match, `question_key` is set to the question's id.
/// 3. If the matched question is multiple-choice or dropdown, each selected
///    choice label is replaced by the matching choice id. A label with no
///    matching choice is a data-quality defect and fails the whole submission
///    rather than forwarding a null id.
pub fn remap_answers(
    answers: &[Answer],
    questions: &[Question],
) -> Result<Vec<Answer>, AppError> {
    let mut by_body: HashMap<&str, &Question> = HashMap::new();
    for question in questions {
        by_body.entry(question.body.as_str()).or_insert(question);
    }

    answers
        .iter()
        .map(|answer| {
            let Some(question) = by_body.get(answer.label.as_str()) else {
                return Ok(answer.clone());
            };

            let mut remapped = answer.clone();
            remapped.question_key = Some(question.id.clone());

            if let Some(choices) = &question.choices {
                if question.kind.uses_choice_ids() {
                    let choice_ids: HashMap<&str, &str> = choices
                        .iter()
                        .map(|c| (c.body.as_str(), c.id.as_str()))
                        .collect();

                    remapped.choices = answer
                        .choices
                        .as_ref()
                        .map(|selected| {
                            selected
                                .iter()
                                .map(|label| {
                                    choice_ids
                                        .get(label.as_str())
                                        .map(|id| id.to_string())
                                        .ok_or_else(|| AppError::UnmappedChoice {
                                            question: question.body.clone(),
                                            choice: label.clone(),
                                        })
                                })
                                .collect::<Result<Vec<_>, _>>()
                        })
                        .transpose()?;
                }
            }

            Ok(remapped)
        })
        .collect()
}
