//! Template-based question matching.
//!
//! The recognised question shapes live in one ordered list of compiled
//! templates rather than inline pattern literals, so adding a question
//! shape means adding an entry here; dispatch and rendering stay
//! untouched.

use regex::Regex;
use tracing::debug;

use super::Intent;

/// Which question shape a template recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// "How do I get from {origin} to {destination}?"
    Route,

    /// "What lines does {station} serve?"
    Interchanges,
}

/// A single compiled question template.
///
/// Patterns are anchored to the whole query and case-sensitive. Captures
/// are non-greedy, so a station name ends at the first occurrence of the
/// following fixed word; names may be empty or contain punctuation.
pub struct QueryTemplate {
    regex: Regex,
    kind: TemplateKind,
}

impl QueryTemplate {
    fn new(pattern: &str, kind: TemplateKind) -> Self {
        Self {
            regex: Regex::new(pattern).expect("invalid question template"),
            kind,
        }
    }

    /// Match the whole query, extracting the named entities on success.
    fn try_match(&self, query: &str) -> Option<Intent> {
        let caps = self.regex.captures(query)?;

        Some(match self.kind {
            TemplateKind::Route => Intent::Route {
                origin: caps["origin"].to_string(),
                destination: caps["destination"].to_string(),
            },
            TemplateKind::Interchanges => Intent::Interchanges {
                station: caps["station"].to_string(),
            },
        })
    }
}

/// The recognised question templates, compiled once and tried in order.
pub struct TemplateSet {
    templates: Vec<QueryTemplate>,
}

impl TemplateSet {
    /// Compile the built-in templates, highest priority first.
    pub fn new() -> Self {
        Self {
            templates: vec![
                QueryTemplate::new(
                    r"^How do I get from (?P<origin>.*?) to (?P<destination>.*?)\?$",
                    TemplateKind::Route,
                ),
                QueryTemplate::new(
                    r"^What lines does (?P<station>.*?) serve\?$",
                    TemplateKind::Interchanges,
                ),
            ],
        }
    }

    /// Classify a query against the templates in priority order.
    ///
    /// The first template to match wins; one match attempt is made per
    /// template. If none match, the intent is [`Intent::Unrecognized`].
    pub fn classify(&self, query: &str) -> Intent {
        for template in &self.templates {
            if let Some(intent) = template.try_match(query) {
                debug!(kind = ?template.kind, "query matched template");
                return intent;
            }
        }

        debug!("query matched no template");
        Intent::Unrecognized
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::new()
    }
}
