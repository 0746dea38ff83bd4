use changelog::{ChangelogConfig, Classifier, RenderStyle, generate, rules};
use git::{CommitSource, RealGitRepository};
use pretty_assertions::assert_eq;
use reltool_tests::GitFixture;
use std::fs;

#[test]
fn release_notes_from_repository_history() {
    let mut fixture = GitFixture::new();
    let released = fixture.commit("feat: something already released");
    fixture.tag("v10.0.29", released);
    fixture.commit_all(&[
        "feat: add on_message_create() handler",
        "Merge pull request #12 from x/y",
        "fix: wasnt checking null",
        "chore: bump deps version bump",
        "Fix: Wasnt checking null",
        "test push",
        "docs: faq entry for vs2022",
    ]);

    let repo = RealGitRepository::discover(fixture.path()).unwrap();
    let subjects = repo.subjects_since_last_tag().unwrap();

    let output = generate(
        &subjects,
        &ChangelogConfig::default(),
        RenderStyle::Plain,
        None,
    )
    .unwrap();

    assert_eq!(
        output,
        "Release Changelog\n===========\n\n\
         ## 📚 Documentation\n\
         - FAQ entry for Visual Studio 2022\n\
         \n\
         ## 🐞 Bug Fixes\n\
         - Wasn't checking null\n\
         \n\
         ## ✨ New Features\n\
         - add `on_message_create()` handler\n\
         \n\
         **Thank you for using D++!**\n"
    );
}

#[test]
fn first_occurrence_order_beats_table_order() {
    let report = Classifier::default().build_report(["docs: a", "break: b", "docs: c"]);
    assert_eq!(
        report.labels(),
        vec![rules::DOCUMENTATION, rules::BREAKING_CHANGES]
    );
}

#[test]
fn configured_table_replaces_builtin_table() {
    let config = ChangelogConfig::from_toml_str(
        r#"
[[rules]]
keyword = "fix"
label = "Fixed"

[[rules]]
keyword = "bug"
label = "Fixed"
"#,
    )
    .unwrap();

    let output = generate(
        ["bug/voice crash", "feat: ignored", "fix: reconnect loop"],
        &config,
        RenderStyle::Plain,
        None,
    )
    .unwrap();

    assert!(output.contains("## Fixed\n- voice crash\n- reconnect loop\n"));
    assert!(!output.contains("ignored"));
}

#[test]
fn port_files_for_latest_tag() {
    let dir = tempfile::tempdir().unwrap();
    let version = port::version_from_tag("v10.0.30").unwrap();
    let spec = port::PortSpec::dpp(version).with_sha512("feedface");

    let (portfile, manifest) = port::write_port(dir.path(), &spec).unwrap();

    assert!(fs::read_to_string(portfile).unwrap().contains("REF \"v10.0.30\""));
    assert!(fs::read_to_string(manifest).unwrap().contains("\"name\": \"dpp\""));
}
