use serde::{Deserialize, Serialize};

/// A permission code with placeholders for the resource type it is
/// rendered against, e.g. `{namespace}.change_{type_name}`.
///
/// The template is parsed on construction so that an unsupported
/// placeholder is reported when the tables using it are built, not when
/// a request first hits the affected action.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct CodeTemplate {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Clone, Debug, PartialEq)]
enum Segment {
    Literal(String),
    Namespace,
    TypeName,
}

mod impls;
