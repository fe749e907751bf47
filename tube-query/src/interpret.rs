//! The interpret pipeline: classify a question, call the backend, render
//! the reply.
//!
//! Each query runs start-to-finish with no state carried between calls,
//! so one interpreter can serve any number of concurrent queries.

use crate::intent::{Intent, TemplateSet};
use crate::render::{self, RenderError};
use crate::underground::{UndergroundApi, UndergroundError};

/// What became of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A recognised query with a successfully rendered reply.
    Rendered(String),

    /// A recognised query the backend answered with an in-band error,
    /// such as an unknown station name.
    ServiceError(String),

    /// Neither question template matched.
    Unrecognized,
}

impl Outcome {
    /// Collapse into the legacy [`Answer`] pair.
    pub fn into_answer(self) -> Answer {
        match self {
            Outcome::Rendered(text) | Outcome::ServiceError(text) => Answer { text, ok: true },
            Outcome::Unrecognized => Answer {
                text: "error".to_string(),
                ok: false,
            },
        }
    }
}

/// Reply pair for callers that predate [`Outcome`].
///
/// `ok` is `false` only for an unrecognised query. A backend-reported
/// error still carries `ok == true` with the error text as the message,
/// so callers must inspect the text to tell the two apart; [`Outcome`]
/// exists so new callers can branch on the three cases directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub ok: bool,
}

/// Failures the pipeline cannot resolve into an [`Outcome`].
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The backend could not be reached or its reply could not be decoded.
    #[error("transit lookup failed: {0}")]
    Transport(#[source] UndergroundError),

    /// The reply decoded cleanly but violated the service contract.
    #[error("malformed reply: {0}")]
    Reply(#[from] RenderError),
}

/// Split a backend reply into rendered text, an in-band service error,
/// or a transport failure.
fn settle<T>(
    reply: Result<T, UndergroundError>,
    render: impl FnOnce(&T) -> Result<String, RenderError>,
) -> Result<Outcome, QueryError> {
    match reply {
        Ok(value) => Ok(Outcome::Rendered(render(&value)?)),
        Err(UndergroundError::Service { message }) => Ok(Outcome::ServiceError(message)),
        Err(e) => Err(QueryError::Transport(e)),
    }
}

/// Interprets natural-language questions against an underground service.
pub struct Interpreter<A> {
    api: A,
    templates: TemplateSet,
}

impl<A: UndergroundApi> Interpreter<A> {
    /// Create an interpreter over the given backend handle.
    pub fn new(api: A) -> Self {
        Self {
            api,
            templates: TemplateSet::new(),
        }
    }

    /// Interpret one query end to end.
    ///
    /// Issues at most one backend call: exactly one for a recognised
    /// query, none for an unrecognised one. No retries.
    pub async fn interpret(&self, query: &str) -> Result<Outcome, QueryError> {
        match self.templates.classify(query) {
            Intent::Route {
                origin,
                destination,
            } => settle(self.api.route(&origin, &destination).await, |segments| {
                render::journey(segments)
            }),
            Intent::Interchanges { station } => {
                settle(self.api.interchanges(&station).await, |lines| {
                    render::interchanges(lines)
                })
            }
            Intent::Unrecognized => Ok(Outcome::Unrecognized),
        }
    }

    /// Interpret one query and collapse the outcome to the legacy pair.
    pub async fn answer(&self, query: &str) -> Result<Answer, QueryError> {
        Ok(self.interpret(query).await?.into_answer())
    }
}
