use bpcore::ac::traits::Actor;
use mockall::mock;
use std::collections::BTreeSet;

mock! {
    pub Actor {}
    impl Actor for Actor {
        fn is_authenticated(&self) -> bool;
        fn is_active(&self) -> bool;
        fn has_general_permission(&self, code: &str) -> bool;
    }
}

/// A mock actor with fixed answers, holding the listed general
/// permission codes.
pub fn mock_actor(
    authenticated: bool,
    active: bool,
    general: &[&str],
) -> MockActor {
    let general = general.iter()
        .map(|code| code.to_string())
        .collect::<BTreeSet<_>>();
    let mut actor = MockActor::new();
    actor.expect_is_authenticated()
        .return_const(authenticated);
    actor.expect_is_active()
        .return_const(active);
    actor.expect_has_general_permission()
        .returning(move |code| general.contains(code));
    actor
}

/// A plain actor with an identity, for resource types whose predicates
/// need to know who is asking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Member {
    pub id: i64,
    pub authenticated: bool,
    pub active: bool,
    pub permissions: BTreeSet<String>,
}

impl Member {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            authenticated: true,
            active: true,
            .. Default::default()
        }
    }

    pub fn anonymous() -> Self {
        Self {
            active: true,
            .. Default::default()
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn grant(mut self, code: &str) -> Self {
        self.permissions.insert(code.to_string());
        self
    }
}

impl Actor for Member {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn has_general_permission(&self, code: &str) -> bool {
        self.active && self.permissions.contains(code)
    }
}
