use bpac::{
    dispatch::ActionRoutes,
    ActionFilter,
};
use http::Method;
use serde::{Deserialize, Serialize};

use crate::{
    agent::Agent,
    error::Error,
    user::User,
};

/// The login that selects the anonymous agent.
pub const ANONYMOUS: &str = "-";

/// A listing of users, as may be loaded from a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Directory(Vec<User>);

impl Directory {
    pub fn new(users: Vec<User>) -> Self {
        Self(users)
    }

    pub fn users(&self) -> &[User] {
        &self.0
    }

    pub fn get(&self, username: &str) -> Result<&User, Error> {
        self.0.iter()
            .find(|user| user.username == username)
            .ok_or_else(|| Error::UnknownUser(username.to_string()))
    }

    /// The agent for the login, with [`ANONYMOUS`] selecting the
    /// anonymous agent.
    pub fn agent(&self, login: &str) -> Result<Agent, Error> {
        if login == ANONYMOUS {
            return Ok(Agent::Anonymous);
        }
        Ok(self.get(login)?.clone().into())
    }

    /// The users the agent would be shown by listing the directory.
    pub fn list(&self, agent: &Agent, filter: &ActionFilter) -> Result<Vec<User>, Error> {
        let routes = ActionRoutes::collection();
        let users = filter.filter_collection(
            agent,
            &routes.dispatch(Method::GET),
            self.0.clone(),
        )?;
        log::debug!("{agent} may list {} of {} user(s)", users.len(), self.0.len());
        Ok(users)
    }
}

impl FromIterator<User> for Directory {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
