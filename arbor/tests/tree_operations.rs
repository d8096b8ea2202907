//! Integration tests for remove, purge, touch and dump against a real
//! `SQLite` repository.

mod common;

use arbor::operations::{
    dump_tree, purge_workspace, remove_node, touch_node, DumpOptions, FixedAnswer, PurgeOutcome,
    RemoveOptions, RemoveOutcome, SystemItemPolicy, TouchOutcome,
};
use arbor::{Error, Session};
use common::{all_nodes, build_tree, create_test_repository, SITE};

// =============================================================================
// Remove
// =============================================================================

#[test]
fn test_remove_subtree() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    build_tree(&mut session, SITE);

    let outcome = remove_node(
        &mut session,
        &mut FixedAnswer(true),
        &RemoveOptions::new("/cms/content"),
    )
    .unwrap();

    assert_eq!(outcome, RemoveOutcome::Removed(vec!["/cms/content".to_string()]));
    assert!(!session.node_exists("/cms/content/blog").unwrap());
    assert!(session.node_exists("/cms/drafts").unwrap());
    assert!(!session.has_pending_changes());
}

#[test]
fn test_remove_persists_after_session_ends() {
    let mut repo = create_test_repository();
    {
        let mut session = repo.session("default").unwrap();
        build_tree(&mut session, SITE);
        remove_node(
            &mut session,
            &mut FixedAnswer(false),
            &RemoveOptions::new("/assets").with_force(true),
        )
        .unwrap();
    }
    let session = repo.session("default").unwrap();
    assert!(!session.node_exists("/assets").unwrap());
}

#[test]
fn test_remove_declined_leaves_tree() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    build_tree(&mut session, SITE);
    let before = all_nodes(&session);

    let outcome = remove_node(
        &mut session,
        &mut FixedAnswer(false),
        &RemoveOptions::new("/cms"),
    )
    .unwrap();

    assert_eq!(outcome, RemoveOutcome::Aborted);
    assert_eq!(all_nodes(&session), before);
}

#[test]
fn test_remove_only_children() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    build_tree(&mut session, SITE);

    let options = RemoveOptions::new("/cms/content")
        .with_only_children(true)
        .with_force(true);
    let outcome = remove_node(&mut session, &mut FixedAnswer(false), &options).unwrap();

    assert_eq!(
        outcome,
        RemoveOutcome::Removed(vec![
            "/cms/content/blog".to_string(),
            "/cms/content/news".to_string(),
        ])
    );
    assert!(session.node_exists("/cms/content").unwrap());
    assert!(session.child_nodes("/cms/content").unwrap().is_empty());
}

#[test]
fn test_remove_property() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    build_tree(&mut session, SITE);

    let options = RemoveOptions::new("/cms/content/blog/title").with_force(true);
    remove_node(&mut session, &mut FixedAnswer(true), &options).unwrap();

    assert!(session.properties("/cms/content/blog").unwrap().is_empty());
    assert!(session.node_exists("/cms/content/blog").unwrap());
}

#[test]
fn test_remove_root_rejected() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    build_tree(&mut session, SITE);

    for path in ["/", "/cms/..", "/../"] {
        let result = remove_node(
            &mut session,
            &mut FixedAnswer(true),
            &RemoveOptions::new(path).with_force(true),
        );
        assert!(matches!(result, Err(Error::RootRemoval)), "{path}");
    }
    assert!(session.node_exists("/cms").unwrap());
}

#[test]
fn test_remove_missing_item() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();

    let result = remove_node(
        &mut session,
        &mut FixedAnswer(true),
        &RemoveOptions::new("/nothing/here"),
    );
    assert!(result.unwrap_err().is_not_found());
}

// =============================================================================
// Purge
// =============================================================================

#[test]
fn test_purge_keeps_system_items() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    build_tree(&mut session, SITE);

    let outcome = purge_workspace(
        &mut session,
        &mut FixedAnswer(true),
        false,
        &SystemItemPolicy::default(),
    )
    .unwrap();

    assert_eq!(
        outcome,
        PurgeOutcome::Purged {
            nodes: vec!["/assets".to_string(), "/cms".to_string()],
            properties: vec!["/site".to_string()],
        }
    );
    assert_eq!(
        all_nodes(&session),
        vec!["/jcr:system", "/jcr:system/nodeTypes", "/rep:security"]
    );
    assert_eq!(
        session.properties("/").unwrap(),
        vec![("jcr:primaryType".to_string(), "rep:root".to_string())]
    );
}

#[test]
fn test_purge_declined() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    build_tree(&mut session, SITE);

    let outcome = purge_workspace(
        &mut session,
        &mut FixedAnswer(false),
        false,
        &SystemItemPolicy::default(),
    )
    .unwrap();

    assert_eq!(outcome, PurgeOutcome::Aborted);
    assert!(session.node_exists("/cms").unwrap());
}

#[test]
fn test_purge_root_property_named_like_child_node() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    session.add_node("/cms").unwrap();
    session.add_node("/cms/page").unwrap();
    session.set_property("/", "cms", "shadowed").unwrap();

    let outcome = purge_workspace(
        &mut session,
        &mut FixedAnswer(true),
        true,
        &SystemItemPolicy::default(),
    )
    .unwrap();

    assert_eq!(
        outcome,
        PurgeOutcome::Purged {
            nodes: vec!["/cms".to_string()],
            properties: vec!["/cms".to_string()],
        }
    );
    assert!(all_nodes(&session).is_empty());
    assert!(session.properties("/").unwrap().is_empty());
}

#[test]
fn test_remove_with_first_index() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    build_tree(&mut session, SITE);

    let missing = remove_node(
        &mut session,
        &mut FixedAnswer(true),
        &RemoveOptions::new("/cms[2]").with_force(true),
    );
    assert!(missing.unwrap_err().is_not_found());

    remove_node(
        &mut session,
        &mut FixedAnswer(true),
        &RemoveOptions::new("/cms[1]/content").with_force(true),
    )
    .unwrap();
    assert!(!session.node_exists("/cms/content").unwrap());
    assert!(session.node_exists("/cms[1]").unwrap());
}

#[test]
fn test_purge_only_touches_its_workspace() {
    let mut repo = create_test_repository();
    {
        let mut live = repo.session("live").unwrap();
        build_tree(&mut live, SITE);
    }
    {
        let mut draft = repo.session("draft").unwrap();
        build_tree(&mut draft, SITE);
        purge_workspace(&mut draft, &mut FixedAnswer(true), true, &SystemItemPolicy::none())
            .unwrap();
        assert!(all_nodes(&draft).is_empty());
    }
    let live = repo.session("live").unwrap();
    assert!(live.node_exists("/cms/content/blog").unwrap());
}

// =============================================================================
// Touch and dump
// =============================================================================

#[test]
fn test_touch_then_dump() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();

    assert_eq!(touch_node(&mut session, "/cms", &[]).unwrap(), TouchOutcome::Created);
    let props = vec![("title".to_string(), "Hello".to_string())];
    assert_eq!(
        touch_node(&mut session, "/cms/./post", &props).unwrap(),
        TouchOutcome::Created
    );
    assert_eq!(
        touch_node(&mut session, "/cms/post", &props).unwrap(),
        TouchOutcome::Updated
    );

    let entries = dump_tree(&session, &DumpOptions::new("/").with_properties(true)).unwrap();
    let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "/cms", "/cms/post"]);
    assert_eq!(entries[2].depth, 2);
    assert_eq!(entries[2].properties.get("title").map(String::as_str), Some("Hello"));
}

#[test]
fn test_touch_missing_parent() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    let err = touch_node(&mut session, "/a/b", &[]).unwrap_err();
    assert!(matches!(err, Error::ItemNotFound { ref path } if path == "/a"));
}

#[test]
fn test_dump_depth_limited() {
    let mut repo = create_test_repository();
    let mut session = repo.session("default").unwrap();
    build_tree(&mut session, SITE);

    let entries = dump_tree(&session, &DumpOptions::new("/cms").with_max_depth(Some(1))).unwrap();
    let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["/cms", "/cms/content", "/cms/drafts"]);
}
