use std::fmt;

/// Outcome of authorizing a single request.
///
/// A denial is reported either as `Forbidden` or as `NotFound`, the
/// latter for actors who are not permitted to know that the resource
/// exists at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    Allowed,
    Forbidden,
    NotFound,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

impl From<bool> for Decision {
    fn from(allowed: bool) -> Self {
        if allowed {
            Decision::Allowed
        } else {
            Decision::Forbidden
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Decision::Allowed => "allowed",
            Decision::Forbidden => "forbidden",
            Decision::NotFound => "not found",
        })
    }
}
