use crate::domains::comments::models::{RetrievalError, ThreadEntry};
use crate::kernel::BaseCommentSource;

/// Fetch the top-level comments of a post, ready for scoring.
///
/// Placeholder entries are dropped, then the first remaining comment is
/// discarded, then newlines in each body become single spaces.
pub async fn fetch_comments(
    locator: &str,
    source: &dyn BaseCommentSource,
) -> Result<Vec<String>, RetrievalError> {
    if locator.trim().is_empty() {
        return Err(RetrievalError::InvalidLocator {
            locator: locator.to_string(),
            reason: "locator is empty".to_string(),
        });
    }

    let entries = source.top_level_entries(locator).await?;
    let total = entries.len();
    let comments = select_top_level_comments(entries);

    tracing::debug!(
        locator,
        entries = total,
        retained = comments.len(),
        "Selected top-level comments"
    );

    Ok(comments)
}

/// Apply the comment selection rules to raw thread entries.
pub fn select_top_level_comments(entries: Vec<ThreadEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            ThreadEntry::Comment(body) => Some(body),
            ThreadEntry::Placeholder => None,
        })
        // The first real comment is never reported
        .skip(1)
        .map(|body| body.replace('\n', " "))
        .collect()
}
