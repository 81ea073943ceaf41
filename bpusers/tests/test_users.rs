use bpac::{
    dispatch::{
        ActionRoutes,
        Dispatch,
    },
    AccessPolicy,
};
use bpcore::ac::{
    catalog,
    traits::Resource,
    Decision,
};
use bpusers::{
    policy,
    Agent,
    Group,
    User,
};
use http::Method;

fn admins() -> Group {
    Group::new("admins")
        .grant("users.view_admin")
}

fn alice() -> User {
    User::new(1, "alice")
}

fn bob() -> User {
    User::new(2, "bob")
}

fn staff() -> User {
    User::new(3, "staff")
        .group(admins())
}

fn root() -> User {
    User::new(4, "root")
        .superuser(true)
}

fn user_policy() -> AccessPolicy {
    policy::access_policy()
        .build()
        .expect("valid user policy")
}

fn on(
    policy: &AccessPolicy,
    agent: &Agent,
    dispatch: &Dispatch<'_>,
    target: &User,
) -> anyhow::Result<Decision> {
    Ok(policy.authorize(Some(agent), dispatch, Some(target))?)
}

#[test]
fn change_own_account() -> anyhow::Result<()> {
    let backend = policy::backend();
    let alice = alice();
    let agent = Agent::from(alice.clone());
    assert!(backend.has_perm(Some(&agent), "users.change_user", Some(&alice))?);
    assert!(!backend.has_perm(Some(&agent), "users.change_user", Some(&bob()))?);

    let policy = user_policy();
    let routes = ActionRoutes::detail();
    for method in [Method::GET, Method::PUT, Method::PATCH, Method::DELETE] {
        assert_eq!(
            on(&policy, &agent, &routes.dispatch(method), &alice)?,
            Decision::Allowed,
        );
    }
    Ok(())
}

#[test]
fn change_other_account() -> anyhow::Result<()> {
    let policy = user_policy();
    let routes = ActionRoutes::detail();
    let update = routes.dispatch(Method::PUT);
    let bob = bob();

    // cannot read bob either, so bob is not found
    let alice = Agent::from(alice());
    assert_eq!(on(&policy, &alice, &update, &bob)?, Decision::NotFound);
    assert_eq!(on(&policy, &Agent::Anonymous, &update, &bob)?, Decision::NotFound);
    let inactive = Agent::from(staff().active(false));
    assert_eq!(on(&policy, &inactive, &update, &bob)?, Decision::NotFound);

    // staff may read bob, but not change bob
    let admin = Agent::from(staff());
    assert_eq!(on(&policy, &admin, &update, &bob)?, Decision::Forbidden);
    let retrieve = routes.dispatch(Method::GET);
    assert_eq!(on(&policy, &admin, &retrieve, &bob)?, Decision::Allowed);

    // while a superuser holds every general permission
    let root = Agent::from(root());
    assert_eq!(on(&policy, &root, &update, &bob)?, Decision::Allowed);
    Ok(())
}

#[test]
fn read_only_never_forbidden() -> anyhow::Result<()> {
    let policy = user_policy();
    let routes = ActionRoutes::detail();
    let alice = Agent::from(alice());
    for method in [Method::GET, Method::HEAD, Method::OPTIONS] {
        assert_eq!(
            on(&policy, &alice, &routes.dispatch(method), &bob())?,
            Decision::NotFound,
        );
    }
    Ok(())
}

#[test]
fn create() -> anyhow::Result<()> {
    let policy = user_policy();
    let routes = ActionRoutes::collection();
    let create = routes.dispatch(Method::POST);
    let decide = |agent: &Agent| policy.authorize::<_, User>(Some(agent), &create, None);
    assert_eq!(decide(&Agent::Anonymous)?, Decision::Forbidden);
    assert_eq!(decide(&Agent::from(alice()))?, Decision::Forbidden);
    assert_eq!(decide(&Agent::from(staff()))?, Decision::Forbidden);
    assert_eq!(decide(&Agent::from(root()))?, Decision::Allowed);
    assert_eq!(
        decide(&Agent::from(alice().grant("users.add_user")))?,
        Decision::Allowed,
    );
    Ok(())
}

#[test]
fn account_actions() -> anyhow::Result<()> {
    let policy = user_policy();
    let activate = Dispatch::new(Method::POST).action("activate");
    let password = Dispatch::new(Method::POST).action("password");
    let reset_password = Dispatch::new(Method::POST).action("reset_password");
    let groups = Dispatch::new(Method::POST).action("groups");
    let permissions = Dispatch::new(Method::POST).action("permissions");

    let alice = alice();
    let agent = Agent::from(alice.clone());
    assert_eq!(on(&policy, &agent, &activate, &alice)?, Decision::Allowed);
    assert_eq!(on(&policy, &agent, &password, &alice)?, Decision::Allowed);
    assert_eq!(on(&policy, &agent, &reset_password, &alice)?, Decision::Allowed);
    assert_eq!(on(&policy, &agent, &groups, &alice)?, Decision::Forbidden);
    assert_eq!(on(&policy, &agent, &permissions, &alice)?, Decision::Forbidden);

    let bob = bob();
    let admin = Agent::from(staff());
    assert_eq!(on(&policy, &admin, &activate, &bob)?, Decision::Allowed);
    assert_eq!(on(&policy, &admin, &password, &bob)?, Decision::Forbidden);
    assert_eq!(on(&policy, &admin, &reset_password, &bob)?, Decision::Allowed);
    assert_eq!(on(&policy, &admin, &groups, &bob)?, Decision::Forbidden);

    // granted through a group rather than by the instance
    let managers = Group::new("managers")
        .grant("users.change_user_groups");
    let manager = Agent::from(staff().group(managers));
    assert_eq!(on(&policy, &manager, &groups, &bob)?, Decision::Allowed);
    Ok(())
}

#[test]
fn undefined_predicate_default() -> anyhow::Result<()> {
    let alice = alice();
    let agent = Agent::from(alice.clone());
    let permissions = Dispatch::new(Method::POST).action("permissions");
    let policy = policy::access_policy()
        .backend(bpperm::Builder::new()
            .default_permission(true)
            .build()
        )
        .build()?;
    assert_eq!(on(&policy, &agent, &permissions, &alice)?, Decision::Allowed);
    // the default never overrides a defined predicate
    let groups = Dispatch::new(Method::POST).action("groups");
    assert_eq!(on(&policy, &agent, &groups, &alice)?, Decision::Forbidden);
    Ok(())
}

#[test]
fn unsupported_action() {
    let policy = user_policy();
    let dispatch = Dispatch::new(Method::POST).action("impersonate");
    assert!(matches!(
        policy.authorize(Some(&Agent::from(root())), &dispatch, Some(&bob())),
        Err(bpac::error::Error::UnsupportedAction { .. }),
    ));
}

#[test]
fn check_user() {
    let backend = policy::backend();
    assert!(!backend.check_user(None::<&Agent>));
    assert!(backend.check_user(Some(&Agent::from(alice()))));
    assert!(!backend.check_user(Some(&Agent::from(alice().active(false)))));
    assert!(!backend.check_user(Some(&Agent::Anonymous)));
    let backend = bpperm::Builder::new()
        .allow_anonymous_user(true)
        .build();
    assert!(backend.check_user(Some(&Agent::Anonymous)));
}

#[test]
fn all_permissions() -> anyhow::Result<()> {
    let backend = policy::backend();
    let tester = backend.tester();
    let alice = alice();
    let bob = bob();
    let staff = Agent::from(staff());

    let perms = backend.all_permissions(Some(&Agent::from(alice.clone())), Some(&alice));
    assert_eq!(
        perms.iter().map(String::as_str).collect::<Vec<_>>(),
        [
            "users.change_user",
            "users.delete_user",
            "users.reset_user_password",
            "users.set_user_active",
            "users.set_user_password",
            "users.view_user",
        ],
    );

    let perms = backend.all_permissions(Some(&staff), Some(&bob));
    assert_eq!(
        perms.iter().map(String::as_str).collect::<Vec<_>>(),
        [
            "users.reset_user_password",
            "users.set_user_active",
            "users.view_admin",
            "users.view_user",
        ],
    );
    assert!(backend.all_permissions(Some(&staff), None::<&User>).is_empty());

    // exactly the object permissions that are held individually
    let granted = tester.object_permissions(&staff, &bob, true);
    for code in catalog::available_codes(User::meta(), true) {
        assert_eq!(granted.contains(&code), tester.has_perm(&staff, &code, &bob)?);
    }
    Ok(())
}
