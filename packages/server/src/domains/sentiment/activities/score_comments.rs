use std::borrow::Cow;

use crate::domains::sentiment::models::{ScoringUnavailable, SentimentResult};
use crate::kernel::BaseSentimentModel;

/// Score each comment, returning one rounded result per input in input order.
///
/// Inputs are sent in batches of `batch_size` and cut down to the model's
/// input limit first. An empty input never reaches the model.
pub async fn score_comments(
    comments: &[String],
    model: &dyn BaseSentimentModel,
    batch_size: usize,
) -> Result<Vec<SentimentResult>, ScoringUnavailable> {
    if comments.is_empty() {
        return Ok(Vec::new());
    }

    let limit = model.max_input_chars();
    let batch_size = batch_size.max(1);
    let mut results = Vec::with_capacity(comments.len());

    for batch in comments.chunks(batch_size) {
        let inputs: Vec<String> = batch
            .iter()
            .map(|text| match limit {
                Some(max) => truncate_chars(text, max).into_owned(),
                None => text.clone(),
            })
            .collect();

        let scored = model.classify(&inputs).await?;
        if scored.len() != inputs.len() {
            return Err(ScoringUnavailable::new(format!(
                "model {} returned {} results for {} inputs",
                model.model_id(),
                scored.len(),
                inputs.len()
            )));
        }

        results.extend(scored.into_iter().map(SentimentResult::rounded));
    }

    tracing::debug!(
        model = model.model_id(),
        count = results.len(),
        "Scored comments"
    );

    Ok(results)
}

/// First `max_chars` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => Cow::Owned(text[..byte_index].to_string()),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::MockSentimentModel;
    use proptest::prelude::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn empty_input_skips_the_model() {
        let model = MockSentimentModel::new();
        let results = score_comments(&[], &model, 8).await.unwrap();

        assert!(results.is_empty());
        assert!(model.batches().is_empty());
    }

    #[tokio::test]
    async fn labels_follow_input_order() {
        let model = MockSentimentModel::new();
        let results = score_comments(&texts(&["I love this", "I hate this"]), &model, 8)
            .await
            .unwrap();

        assert_eq!(results[0].label, "POSITIVE");
        assert_eq!(results[1].label, "NEGATIVE");
        assert!(results.iter().all(|r| r.score > 0.99 && r.score <= 1.0));
    }

    #[tokio::test]
    async fn scores_are_rounded_to_four_decimals() {
        let model = MockSentimentModel::new().with_score(0.987_654_321);
        let results = score_comments(&texts(&["fine"]), &model, 8).await.unwrap();

        assert_eq!(results[0].score, 0.9877);
    }

    #[tokio::test]
    async fn inputs_are_split_into_batches() {
        let model = MockSentimentModel::new();
        let inputs = texts(&["a", "b", "c", "d", "e"]);
        score_comments(&inputs, &model, 2).await.unwrap();

        let sizes: Vec<usize> = model.batches().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[tokio::test]
    async fn long_inputs_are_truncated_before_classification() {
        let model = MockSentimentModel::new().with_max_input_chars(5);
        let inputs = texts(&["ünïcödé text", "ok"]);
        let results = score_comments(&inputs, &model, 8).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(model.batches(), vec![texts(&["ünïcö", "ok"])]);
    }

    #[tokio::test]
    async fn unavailable_model_fails_the_whole_call() {
        let model = MockSentimentModel::unavailable("weights failed to load");
        let err = score_comments(&texts(&["x"]), &model, 8).await.unwrap_err();

        assert!(err.reason.contains("weights failed to load"));
    }

    #[tokio::test]
    async fn short_model_response_is_unavailable() {
        let model = MockSentimentModel::new().dropping_last_result();
        let err = score_comments(&texts(&["a", "b"]), &model, 8).await.unwrap_err();

        assert!(err.reason.contains("returned 1 results for 2 inputs"));
    }

    #[test]
    fn truncate_chars_borrows_short_text() {
        assert!(matches!(truncate_chars("short", 10), Cow::Borrowed("short")));
        assert_eq!(truncate_chars("exactly", 7), "exactly");
        assert_eq!(truncate_chars("", 3), "");
    }

    proptest! {
        #[test]
        fn output_matches_input_length_and_order(
            inputs in prop::collection::vec("(love|hate|meh)[0-9 ]{0,10}", 0..40),
            batch_size in 1usize..10,
        ) {
            let model = MockSentimentModel::new();
            let results = tokio_test::block_on(score_comments(&inputs, &model, batch_size)).unwrap();

            prop_assert_eq!(results.len(), inputs.len());
            for (text, result) in inputs.iter().zip(&results) {
                let expected = if text.starts_with("hate") { "NEGATIVE" } else { "POSITIVE" };
                prop_assert_eq!(result.label.as_str(), expected);
                prop_assert!((0.0..=1.0).contains(&result.score));
                prop_assert_eq!((result.score * 10_000.0).round() / 10_000.0, result.score);
            }

            let sent: Vec<String> = model.batches().into_iter().flatten().collect();
            prop_assert_eq!(sent, inputs);
        }
    }
}
