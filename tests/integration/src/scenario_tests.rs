//! End-to-end banner scenarios across the fs and core crates
//!
//! Each scenario starts from an argument document, the way an orchestrator
//! hands work to a task, and checks both the filesystem and the JSON result.

use loginmsg_core::{
    BannerTargets, Error, Failure, ModuleArgs, Outcome, Reconciler, StaticHostIdentity,
};
use loginmsg_fs::{ArgsStore, NormalizedPath};
use loginmsg_test_utils::{BannerSandbox, ISSUE, MOTD};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

/// Write `doc` as a JSON argument document in the sandbox and run it.
fn run_document(sandbox: &BannerSandbox, doc: Value, check_mode: bool) -> loginmsg_core::Result<Outcome> {
    let path = sandbox.path("args.json");
    std::fs::write(&path, doc.to_string()).unwrap();
    let args: ModuleArgs = ArgsStore::new().load(&NormalizedPath::new(&path))?;

    Reconciler::new(BannerTargets::new(sandbox.root()))
        .with_resolver(StaticHostIdentity::new("host.example.com"))
        .run(&args, check_mode)
}

fn result_json(result: loginmsg_core::Result<Outcome>) -> Value {
    let text = match result {
        Ok(outcome) => outcome.to_json().unwrap(),
        Err(e) => Failure::new(e.to_string()).to_json().unwrap(),
    };
    serde_json::from_str(&text).unwrap()
}

#[test]
fn scenario_set_pre_login_banner() {
    let sandbox = BannerSandbox::new();

    let result = run_document(
        &sandbox,
        json!({"text": "Welcome!", "when": "before", "state": "present", "fqdn": false}),
        false,
    );

    let result = result_json(result);
    assert_eq!(result["changed"], true);
    sandbox.assert_content(ISSUE, "Welcome!\n");
    sandbox.assert_missing(MOTD);
}

#[test]
fn scenario_remove_post_login_banner() {
    let sandbox = BannerSandbox::new();
    sandbox.write(MOTD, "Today's news\n");

    let result = result_json(run_document(
        &sandbox,
        json!({"text": "ignored", "when": "after", "state": "absent"}),
        false,
    ));

    assert_eq!(result["changed"], true);
    sandbox.assert_missing(MOTD);
}

#[test]
fn scenario_remove_missing_post_login_banner_fails() {
    let sandbox = BannerSandbox::new();

    let result = run_document(
        &sandbox,
        json!({"text": "ignored", "when": "after", "state": "absent"}),
        false,
    );

    assert!(matches!(result, Err(Error::TargetNotFound { .. })));
    let failure = result_json(result);
    assert_eq!(failure["failed"], true);
    assert_eq!(failure["changed"], false);
}

#[test]
fn scenario_banner_with_host_identity() {
    let sandbox = BannerSandbox::new();

    run_document(
        &sandbox,
        json!({"text": "Hackathon machine", "when": "before", "fqdn": true}),
        false,
    )
    .unwrap();

    sandbox.assert_content(ISSUE, "Hackathon machine\nServer: host.example.com\n");
}

#[rstest]
#[case::invalid_when(json!({"text": "x", "when": "later", "state": "absent"}))]
#[case::invalid_state(json!({"text": "x", "when": "after", "state": "purged"}))]
#[case::both_invalid(json!({"text": "x", "when": "later", "state": "purged"}))]
fn scenario_invalid_documents_touch_nothing(#[case] doc: Value) {
    let sandbox = BannerSandbox::new();
    sandbox.write(ISSUE, "pre\n");
    sandbox.write(MOTD, "post\n");
    let before = sandbox.snapshot();

    let err = run_document(&sandbox, doc, false).unwrap_err();

    assert!(err.is_validation(), "got {err:?}");
    // args.json lives beside etc/, so the snapshot only sees the banners
    assert_eq!(sandbox.snapshot(), before);
}

#[test]
fn scenario_invalid_selector_wins_over_invalid_presence() {
    let sandbox = BannerSandbox::new();

    let err = run_document(
        &sandbox,
        json!({"text": "x", "when": "later", "state": "purged"}),
        false,
    )
    .unwrap_err();

    assert!(matches!(err, Error::InvalidSelector { .. }));
}

#[rstest]
#[case::set_before(json!({"text": "a", "when": "before"}), true)]
#[case::set_after_fqdn(json!({"text": "b", "when": "after", "fqdn": true}), false)]
#[case::remove_after(json!({"text": "c", "when": "after", "state": "absent"}), true)]
fn scenario_check_mode_matches_real_run(#[case] doc: Value, #[case] seed_motd: bool) {
    let checked = BannerSandbox::new();
    let applied = BannerSandbox::new();
    if seed_motd {
        checked.write(MOTD, "seed\n");
        applied.write(MOTD, "seed\n");
    }
    let untouched = checked.snapshot();

    let predicted = run_document(&checked, doc.clone(), true).unwrap();
    let actual = run_document(&applied, doc, false).unwrap();

    assert_eq!(predicted.changed, actual.changed);
    assert_eq!(checked.snapshot(), untouched);
}

#[test]
fn scenario_repeated_present_is_stable() {
    let sandbox = BannerSandbox::new();
    let doc = json!({"text": "Stable", "when": "after", "fqdn": true});

    let first = run_document(&sandbox, doc.clone(), false).unwrap();
    let content = sandbox.read(MOTD);
    let second = run_document(&sandbox, doc, false).unwrap();

    assert!(first.changed && second.changed);
    assert_eq!(sandbox.read(MOTD), content);
}
