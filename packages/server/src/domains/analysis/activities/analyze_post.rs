use crate::domains::analysis::models::{AnalysisError, AnalysisReport, AnalyzedComment};
use crate::domains::comments::fetch_comments;
use crate::domains::sentiment::{score_comments, ScoringUnavailable, SentimentResult};
use crate::kernel::ServerDeps;

/// Fetch the comments of a post and score each one.
///
/// Strictly sequential: scoring starts only after the fetch succeeded. Errors
/// from either stage are returned as-is; there is no partial result.
pub async fn analyze_post(locator: &str, deps: &ServerDeps) -> Result<AnalysisReport, AnalysisError> {
    tracing::info!(locator, "Analyzing post comments");

    let comments = fetch_comments(locator, deps.comment_source.as_ref()).await?;
    let results = score_comments(
        &comments,
        deps.sentiment_model.as_ref(),
        deps.sentiment_batch_size,
    )
    .await?;

    let report = combine(comments, results)?;
    tracing::info!(locator, comments = report.len(), "Post analysis complete");

    Ok(report)
}

/// Pair comments with their results positionally, numbering from 1.
pub fn combine(
    comments: Vec<String>,
    results: Vec<SentimentResult>,
) -> Result<AnalysisReport, ScoringUnavailable> {
    if comments.len() != results.len() {
        return Err(ScoringUnavailable::new(format!(
            "{} sentiment results for {} comments",
            results.len(),
            comments.len()
        )));
    }

    let entries = comments
        .into_iter()
        .zip(results)
        .enumerate()
        .map(|(position, (comment, result))| AnalyzedComment {
            index: position + 1,
            comment,
            label: result.label,
            score: result.score,
        })
        .collect();

    Ok(AnalysisReport::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::comments::{RetrievalError, ThreadEntry};
    use crate::kernel::test_dependencies::{MockCommentSource, MockSentimentModel, TestDependencies};
    use serde_json::json;

    const URL: &str = "https://www.reddit.com/r/rust/comments/abc123/";

    #[test]
    fn combine_numbers_from_one() {
        let report = combine(
            vec!["I love this".into(), "I hate this".into()],
            vec![
                SentimentResult::new("POSITIVE", 0.9999),
                SentimentResult::new("NEGATIVE", 0.9995),
            ],
        )
        .unwrap();

        assert_eq!(report.get(1).unwrap().comment, "I love this");
        assert_eq!(report.get(2).unwrap().label, "NEGATIVE");
        assert!(report.get(0).is_none());
        assert!(report.get(3).is_none());
    }

    #[test]
    fn combine_rejects_mismatched_lengths() {
        let err = combine(vec!["a".into()], Vec::new()).unwrap_err();
        assert!(err.reason.contains("0 sentiment results for 1 comments"));
    }

    #[test]
    fn report_serializes_as_index_keyed_object() {
        let report = combine(
            vec!["I love this".into()],
            vec![SentimentResult::new("POSITIVE", 0.9998)],
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"1": {"comment": "I love this", "label": "POSITIVE", "score": 0.9998}})
        );
        assert_eq!(serde_json::to_value(AnalysisReport::default()).unwrap(), json!({}));
    }

    #[tokio::test]
    async fn analyzes_love_and_hate_comments() {
        let deps = TestDependencies::new()
            .comment_source(MockCommentSource::new().with_thread(
                URL,
                vec![
                    ThreadEntry::comment("Welcome to the thread"),
                    ThreadEntry::comment("I love this"),
                    ThreadEntry::Placeholder,
                    ThreadEntry::comment("I hate this"),
                ],
            ))
            .into_server_deps();

        let report = analyze_post(URL, &deps).await.unwrap();

        assert_eq!(report.len(), 2);
        let first = report.get(1).unwrap();
        assert_eq!((first.comment.as_str(), first.label.as_str()), ("I love this", "POSITIVE"));
        let second = report.get(2).unwrap();
        assert_eq!((second.comment.as_str(), second.label.as_str()), ("I hate this", "NEGATIVE"));
        assert!(report.entries().iter().all(|e| e.score > 0.99));
    }

    #[tokio::test]
    async fn post_without_comments_yields_empty_report() {
        let model = std::sync::Arc::new(MockSentimentModel::new());
        let deps = TestDependencies::new()
            .comment_source(MockCommentSource::new().with_thread(URL, Vec::new()))
            .sentiment_model_arc(model.clone())
            .into_server_deps();

        let report = analyze_post(URL, &deps).await.unwrap();

        assert!(report.is_empty());
        assert!(model.batches().is_empty());
    }

    #[tokio::test]
    async fn single_comment_is_discarded() {
        let deps = TestDependencies::new()
            .comment_source(
                MockCommentSource::new().with_thread(URL, vec![ThreadEntry::comment("only one")]),
            )
            .into_server_deps();

        assert!(analyze_post(URL, &deps).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn retrieval_failure_skips_scoring() {
        let model = std::sync::Arc::new(MockSentimentModel::new());
        let deps = TestDependencies::new()
            .comment_source(MockCommentSource::new().with_error(
                URL,
                RetrievalError::Unreachable("connection refused".into()),
            ))
            .sentiment_model_arc(model.clone())
            .into_server_deps();

        let err = analyze_post(URL, &deps).await.unwrap_err();

        assert!(matches!(err, AnalysisError::Retrieval(RetrievalError::Unreachable(_))));
        assert!(model.batches().is_empty());
    }

    #[tokio::test]
    async fn scoring_failure_returns_no_partial_result() {
        let deps = TestDependencies::new()
            .comment_source(MockCommentSource::new().with_thread(
                URL,
                vec![ThreadEntry::comment("skip"), ThreadEntry::comment("keep")],
            ))
            .sentiment_model(MockSentimentModel::unavailable("model crashed"))
            .into_server_deps();

        let err = analyze_post(URL, &deps).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Scoring(_)));
    }
}
