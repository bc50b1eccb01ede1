use crate::object::FieldError;
use crate::query::QueryBuildError;
use crate::transport::ErrorPayload;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static GRANTED_SCOPES: LazyLock<Regex> = LazyLock::new(
    || Regex::new(r"granted the: \[([^\]]*)\]").unwrap()
);
static REQUIRED_SCOPES: LazyLock<Regex> = LazyLock::new(
    || Regex::new(r"requires one of the following scopes: \[([^\]]*)\]").unwrap()
);

/// Every failure a client operation can report.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClientError {
    #[error("Failed to build the request document: {0}")]
    Build(#[from] QueryBuildError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    GraphQL(#[from] GraphQLError),

    #[error("The GraphQL endpoint answered with HTTP status {status}: {message}")]
    Http {
        message: String,
        status: u16,
    },

    #[error(
        "Unable to fetch fields of this `{type_name}` because it lacks all \
        of the identifying fields it can be located by: {}.",
        .keys.join(", "),
    )]
    MissingIdentifier {
        keys: &'static [&'static str],
        type_name: &'static str,
    },

    #[error("Failed to reach the GraphQL endpoint: {message}")]
    Transport {
        message: String,
    },

    #[error("The GraphQL endpoint rejected the credentials: {message}")]
    Unauthorized {
        message: String,
    },

    #[error(
        "Expected an object of type `{expected}` but the response carries \
        `{typename}`."
    )]
    UnexpectedTypename {
        expected: &'static str,
        typename: String,
    },
}
impl ClientError {
    /// The GraphQL error kind, when this is a GraphQL-level error.
    pub fn graphql_kind(&self) -> Option<&GraphQLErrorKind> {
        match self {
            Self::GraphQL(err) => Some(&err.kind),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.graphql_kind(), Some(GraphQLErrorKind::NotFound))
    }
}

/// A failure reported in a response's `errors` list, or a response whose
/// data did not have the expected shape.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{kind}: {message}")]
pub struct GraphQLError {
    /// The `data` member of the offending response, if any.
    pub data: Option<Value>,
    pub errors: Vec<ErrorPayload>,
    pub kind: GraphQLErrorKind,
    pub message: String,
}
impl GraphQLError {
    /// Classify the `errors` of a response by the discriminator of its first
    /// entry. The message joins the messages of every entry.
    pub fn from_payloads(errors: Vec<ErrorPayload>, data: Option<Value>) -> Self {
        let message =
            errors.iter()
                .map(|err| err.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
        let kind = match errors.first() {
            Some(first) => GraphQLErrorKind::classify(first),
            None => GraphQLErrorKind::Internal,
        };

        Self {
            data,
            errors,
            kind,
            message,
        }
    }

    /// A response whose data does not have the shape its query implies.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorKind::Internal, message)
    }

    pub fn new(kind: GraphQLErrorKind, message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![],
            kind,
            message: message.into(),
        }
    }

    /// A root lookup that resolved to `null`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorKind::NotFound, message)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GraphQLErrorKind {
    Forbidden,
    InsufficientScopes {
        granted: Vec<String>,
        required: Vec<String>,
    },
    Internal,
    /// A query exceeded one of GitHub's node, argument or pagination limits.
    LimitExceeded,
    NotFound,
    RateLimited,
    Unprocessable,
    /// An error whose discriminator is not recognized; holds the raw
    /// discriminator (`UNKNOWN` when the error carried none).
    Other(String),
}
impl GraphQLErrorKind {
    pub fn classify(payload: &ErrorPayload) -> Self {
        match payload.discriminator() {
            Some("FORBIDDEN") => Self::Forbidden,
            Some("INSUFFICIENT_SCOPES") => Self::InsufficientScopes {
                granted: parse_scopes(&GRANTED_SCOPES, &payload.message),
                required: parse_scopes(&REQUIRED_SCOPES, &payload.message),
            },
            Some("INTERNAL") => Self::Internal,
            Some("NOT_FOUND") => Self::NotFound,
            Some("RATE_LIMITED") => Self::RateLimited,
            Some("UNPROCESSABLE") => Self::Unprocessable,
            Some(
                "ARGUMENT_LIMIT"
                | "EXCESSIVE_PAGINATION"
                | "MAX_NODE_LIMIT_EXCEEDED"
            ) => Self::LimitExceeded,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Other("UNKNOWN".to_string()),
        }
    }
}
impl fmt::Display for GraphQLErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forbidden => write!(f, "forbidden"),
            Self::InsufficientScopes { required, .. } => write!(
                f,
                "insufficient scopes (requires one of: {})",
                required.join(", "),
            ),
            Self::Internal => write!(f, "internal error"),
            Self::LimitExceeded => write!(f, "limit exceeded"),
            Self::NotFound => write!(f, "not found"),
            Self::RateLimited => write!(f, "rate limited"),
            Self::Unprocessable => write!(f, "unprocessable"),
            Self::Other(discriminator) => write!(f, "{discriminator}"),
        }
    }
}

/// Extract a bracketed scope list such as `['repo', 'read:org']`.
fn parse_scopes(pattern: &Regex, message: &str) -> Vec<String> {
    let Some(captures) = pattern.captures(message) else {
        return vec![];
    };
    captures[1]
        .split(',')
        .map(|scope| scope.trim().trim_matches(|c: char| c == '\'' || c == '"'))
        .filter(|scope| !scope.is_empty())
        .map(str::to_string)
        .collect()
}
