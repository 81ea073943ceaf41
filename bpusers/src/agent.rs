use serde::{Deserialize, Serialize};
use crate::user::User;

/// The party making a request, which is either an anonymous visitor or
/// an authenticated user.
#[derive(Clone, Debug, Default, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Agent {
    #[default]
    Anonymous,
    User(User),
}

mod display;
mod impls;
