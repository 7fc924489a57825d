use serde::{Deserialize, Serialize};

use crate::error::{RedditError, Result};

/// OAuth token response from `/api/v1/access_token`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
    #[serde(default)]
    pub scope: Option<String>,
}

/// A Reddit `Listing` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub kind: String,
    pub data: ListingData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<RawThing>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}

/// A listing child before its `kind` has been interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct RawThing {
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// A listing child, discriminated on its `kind` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Thing {
    /// `t1`: a real comment.
    Comment(Comment),
    /// `t3`: the submission itself.
    Link(Link),
    /// `more`: a "load more comments" stub.
    More(MoreComments),
    /// Any kind this client does not model.
    Other(String),
}

impl TryFrom<RawThing> for Thing {
    type Error = RedditError;

    fn try_from(raw: RawThing) -> Result<Self> {
        let parse = |kind: &str, err: serde_json::Error| {
            RedditError::Parse(format!("invalid `{}` payload: {}", kind, err))
        };

        match raw.kind.as_str() {
            "t1" => serde_json::from_value(raw.data)
                .map(Thing::Comment)
                .map_err(|e| parse("t1", e)),
            "t3" => serde_json::from_value(raw.data)
                .map(Thing::Link)
                .map_err(|e| parse("t3", e)),
            "more" => serde_json::from_value(raw.data)
                .map(Thing::More)
                .map_err(|e| parse("more", e)),
            _ => Ok(Thing::Other(raw.kind)),
        }
    }
}

/// Comment payload (`t1`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub author: Option<String>,
    /// Markdown body. Unescaped when fetched with `raw_json=1`.
    pub body: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub stickied: bool,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub depth: Option<u32>,
    #[serde(default)]
    pub permalink: Option<String>,
}

/// Submission payload (`t3`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Link {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub permalink: Option<String>,
}

/// Placeholder for comments that were not loaded (`more`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MoreComments {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub depth: Option<u32>,
}

/// A submission with its top-level comment forest.
#[derive(Debug, Clone)]
pub struct SubmissionComments {
    pub submission: Option<Link>,
    /// Top-level entries in the order Reddit returned them, `more` stubs included.
    pub comments: Vec<Thing>,
}

impl SubmissionComments {
    /// Parse the two-listing array returned by `/comments/{id}`.
    pub(crate) fn from_listings(post_id: &str, listings: Vec<Listing>) -> Result<Self> {
        let mut listings = listings.into_iter();

        let submission_listing = listings.next().ok_or_else(|| RedditError::NotFound {
            post_id: post_id.to_string(),
        })?;
        let submission = submission_listing
            .data
            .children
            .into_iter()
            .map(Thing::try_from)
            .find_map(|thing| match thing {
                Ok(Thing::Link(link)) => Some(Ok(link)),
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            })
            .transpose()?;

        let comments = match listings.next() {
            Some(listing) => listing
                .data
                .children
                .into_iter()
                .map(Thing::try_from)
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            submission,
            comments,
        })
    }
}

/// Query options for `/comments/{id}`.
#[derive(Debug, Clone)]
pub struct CommentsQuery {
    /// Maximum number of comments Reddit should return.
    pub limit: u32,
    /// Comment tree depth; `1` restricts the response to top-level comments.
    pub depth: u32,
    /// Sort order (`confidence`, `top`, `new`, ...).
    pub sort: String,
}

impl Default for CommentsQuery {
    fn default() -> Self {
        Self {
            limit: 500,
            depth: 1,
            sort: "confidence".to_string(),
        }
    }
}
