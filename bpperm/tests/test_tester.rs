use bpcore::ac::{
    catalog,
    traits::Resource,
};
use std::collections::BTreeSet;
use bpperm::{
    error::{
        CodeError,
        Error,
    },
    ObjectPermissionTester,
};
use test_bp::{
    actor::{
        Member,
        mock_actor,
    },
    document::Document,
    opaque::Opaque,
};

#[test]
fn undeclared_uses_default() -> anyhow::Result<()> {
    let actor = mock_actor(true, true, &[]);
    let obj = Opaque(1);
    for default in [false, true] {
        let tester = ObjectPermissionTester::new(default);
        for code in catalog::available_codes(Opaque::meta(), true) {
            assert_eq!(tester.has_perm(&actor, &code, &obj)?, default);
        }
    }
    Ok(())
}

#[test]
fn undefined_codename_uses_default() -> anyhow::Result<()> {
    let owner = Member::new(1);
    let doc = Document::new(1, 1);
    // archive_document is in the catalog but has no predicate
    assert!(!ObjectPermissionTester::new(false)
        .has_perm(&owner, "docs.archive_document", &doc)?);
    assert!(ObjectPermissionTester::new(true)
        .has_perm(&owner, "docs.archive_document", &doc)?);
    Ok(())
}

#[test]
fn predicates() -> anyhow::Result<()> {
    let tester = ObjectPermissionTester::default();
    let owner = Member::new(1);
    let other = Member::new(2);
    let doc = Document::new(1, 1);
    assert!(tester.has_perm(&owner, "docs.view_document", &doc)?);
    assert!(tester.has_perm(&owner, "docs.change_document", &doc)?);
    assert!(!tester.has_perm(&other, "docs.view_document", &doc)?);
    assert!(!tester.has_perm(&other, "docs.change_document", &doc)?);

    let doc = doc.published();
    assert!(tester.has_perm(&other, "docs.view_document", &doc)?);
    assert!(!tester.has_perm(&other, "docs.change_document", &doc)?);
    Ok(())
}

#[test]
fn has_perms_short_circuit() -> anyhow::Result<()> {
    let tester = ObjectPermissionTester::default();
    let owner = Member::new(1);
    let other = Member::new(2);
    let doc = Document::new(1, 1).locked();
    assert!(tester.has_perms(
        &owner,
        ["docs.view_document", "docs.change_document"],
        &doc,
    )?);
    assert!(tester.has_perms(&owner, Vec::<String>::new(), &doc)?);
    // stops at change_document, so the denial from delete_document is
    // never reached
    assert!(!tester.has_perms(
        &other,
        ["docs.change_document", "docs.delete_document"],
        &doc,
    )?);
    assert_eq!(
        tester.has_perms(
            &owner,
            ["docs.change_document", "docs.delete_document"],
            &doc,
        ),
        Err(Error::PermissionDenied(bpperm::error::PermissionDenied)),
    );
    Ok(())
}

#[test]
fn denial_propagates() {
    let tester = ObjectPermissionTester::new(true);
    let owner = Member::new(1);
    let doc = Document::new(1, 1).locked();
    let result = tester.has_perm(&owner, "docs.delete_document", &doc);
    assert!(result.as_ref().is_err_and(Error::is_denial));
}

#[test]
fn malformed_codes() {
    let tester = ObjectPermissionTester::new(true);
    let owner = Member::new(1);
    let doc = Document::new(1, 1);
    assert!(matches!(
        tester.has_perm(&owner, "users.change_user", &doc),
        Err(Error::MalformedPermissionCode {
            reason: CodeError::NamespaceMismatch(_), ..
        })
    ));
    // a typo is an error even though the default would have granted it
    assert!(matches!(
        tester.has_perm(&owner, "docs.chnage_document", &doc),
        Err(Error::MalformedPermissionCode {
            reason: CodeError::UnknownCodename(_), ..
        })
    ));
    assert!(matches!(
        tester.has_perms(&owner, ["docs.view_document", "view_document"], &doc),
        Err(Error::MalformedPermissionCode {
            reason: CodeError::MissingNamespace, ..
        })
    ));
}

#[test]
fn object_permissions_match_has_perm() -> anyhow::Result<()> {
    let members = [Member::new(1), Member::new(2), Member::anonymous()];
    let docs = [
        Document::new(1, 1),
        Document::new(2, 1).published(),
        Document::new(3, 1).locked(),
    ];
    for default in [false, true] {
        let tester = ObjectPermissionTester::new(default);
        for member in members.iter() {
            for doc in docs.iter() {
                let granted = tester.object_permissions(member, doc, true);
                let expected: BTreeSet<String> = catalog::available_codes(Document::meta(), true)
                    .into_iter()
                    .filter(|code| tester.has_perm(member, code, doc) == Ok(true))
                    .collect();
                assert_eq!(granted, expected);
            }
        }
    }
    Ok(())
}

#[test]
fn object_permissions_survive_denial() {
    let tester = ObjectPermissionTester::default();
    let owner = Member::new(1);
    let doc = Document::new(1, 1).locked();
    let granted = tester.object_permissions(&owner, &doc, false);
    assert_eq!(
        granted.iter().map(String::as_str).collect::<Vec<_>>(),
        ["change_document", "publish_document", "view_document"],
    );
    let granted = tester.object_permissions(&owner, &doc, true);
    assert!(granted.contains("docs.publish_document"));
    assert!(!granted.contains("docs.delete_document"));
}
