use bpcore::ac::traits::Actor;

use crate::user::User;
use super::Agent;

impl Agent {
    pub fn user(&self) -> Option<&User> {
        match self {
            Agent::Anonymous => None,
            Agent::User(user) => Some(user),
        }
    }

    pub fn is_staff(&self) -> bool {
        self.user().is_some_and(User::is_staff)
    }

    /// Whether the agent is the user.
    pub fn is_user(&self, user: &User) -> bool {
        self.user().is_some_and(|agent| agent.id == user.id)
    }
}

impl From<User> for Agent {
    fn from(user: User) -> Agent {
        Agent::User(user)
    }
}

impl From<Option<User>> for Agent {
    fn from(user: Option<User>) -> Agent {
        user.map(Agent::User).unwrap_or_default()
    }
}

impl From<&Agent> for Option<i64> {
    fn from(agent: &Agent) -> Self {
        agent.user().map(|user| user.id)
    }
}

// An anonymous agent is active; whether it holds any object permission
// is left to the backend configuration.
impl Actor for Agent {
    fn is_authenticated(&self) -> bool {
        matches!(self, Agent::User(_))
    }

    fn is_active(&self) -> bool {
        match self {
            Agent::Anonymous => true,
            Agent::User(user) => user.is_active,
        }
    }

    fn has_general_permission(&self, code: &str) -> bool {
        self.user().is_some_and(|user| user.has_general_permission(code))
    }
}
