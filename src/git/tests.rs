// gitsim: Interactive Git Command Simulator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use crate::error::{ErrorKind, SimError};
use crate::git::cmd::{
    self, AddArgs, BranchArgs, CheckoutArgs, CommitArgs, ConfigArgs, ConfigKey, Invocation,
    LogFlags, RemoteArgs, StashArgs,
};
use crate::git::entropy::{Entropy, RngEntropy, SequenceEntropy, is_short_hash};
use crate::git::query::repo_name;
use crate::git::state::UserConfig;
use crate::git::transcript::TerminalEntry;
use crate::git::{MOCK_FILE_COMMAND, Simulator, SimulatorSettings};

/// Simulator with predictable hashes (`0000001`, `0000002`, ...).
fn sim() -> Simulator {
    Simulator::with_entropy(
        SimulatorSettings::default(),
        Box::new(SequenceEntropy::new()),
    )
}

fn run(sim: &mut Simulator, line: &str) -> TerminalEntry {
    sim.execute(line);
    sim.transcript()
        .last()
        .cloned()
        .expect("execute should append an entry")
}

fn ok(sim: &mut Simulator, line: &str) -> String {
    let entry = run(sim, line);
    assert!(
        !entry.is_error,
        "'{line}' should succeed, got: {}",
        entry.output
    );
    entry.output
}

fn err(sim: &mut Simulator, line: &str) -> String {
    let entry = run(sim, line);
    assert!(entry.is_error, "'{line}' should fail, got: {}", entry.output);
    entry.output
}

fn oneline(sim: &Simulator, branch: &str) -> Vec<String> {
    sim.state()
        .log(branch)
        .iter()
        .map(|c| format!("{} {}", c.hash, c.message))
        .collect()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parse_rejects_non_git_commands() {
    assert_eq!(
        cmd::parse("ls -la"),
        Err(SimError::CommandNotFound {
            command: "ls".to_string()
        })
    );
    assert_eq!(
        cmd::parse("GIT status"),
        Err(SimError::CommandNotFound {
            command: "GIT".to_string()
        })
    );
    assert_eq!(cmd::parse("git"), Err(SimError::MissingSubcommand));
}

#[test]
fn test_parse_unknown_subcommand() {
    let result = cmd::parse("git bisect start");
    assert_eq!(
        result,
        Err(SimError::UnknownSubcommand {
            name: "bisect".to_string()
        })
    );
    assert_eq!(
        result.unwrap_err().kind(),
        ErrorKind::UnrecognizedSubcommand
    );
}

#[test]
fn test_parse_collapses_whitespace_runs() {
    assert_eq!(cmd::parse("  git    status  "), Ok(Invocation::Status));
    assert_eq!(cmd::parse("git --version"), Ok(Invocation::Version));
}

#[test]
fn test_parse_commit_message_strips_quotes() {
    assert_eq!(
        cmd::parse(r#"git commit -m "fix the typo""#),
        Ok(Invocation::Commit(CommitArgs {
            message: "fix the typo".to_string(),
            all: false,
        }))
    );
    assert_eq!(
        cmd::parse(r#"git commit -am "wip""#),
        Ok(Invocation::Commit(CommitArgs {
            message: "wip".to_string(),
            all: true,
        }))
    );
    assert_eq!(
        cmd::parse("git commit"),
        Err(SimError::MissingCommitMessage)
    );
    assert_eq!(
        cmd::parse(r#"git commit -m """#),
        Err(SimError::EmptyCommitMessage)
    );
}

#[test]
fn test_parse_config_shapes() {
    assert_eq!(
        cmd::parse("git config"),
        Ok(Invocation::Config(ConfigArgs::Show))
    );
    assert_eq!(
        cmd::parse("git config --list"),
        Ok(Invocation::Config(ConfigArgs::List))
    );
    assert_eq!(
        cmd::parse(r#"git config --global user.name "Ada Lovelace""#),
        Ok(Invocation::Config(ConfigArgs::Set(
            ConfigKey::UserName,
            "Ada Lovelace".to_string()
        )))
    );
    assert_eq!(
        cmd::parse("git config user.email"),
        Ok(Invocation::Config(ConfigArgs::Get(ConfigKey::UserEmail)))
    );
    assert_eq!(
        cmd::parse("git config --global core.editor vim"),
        Err(SimError::UnsupportedConfigKey {
            key: "core.editor".to_string()
        })
    );
    assert_eq!(
        cmd::parse("git config --global"),
        Err(SimError::MissingConfigKey)
    );
}

#[test]
fn test_parse_branch_and_checkout_shapes() {
    assert_eq!(
        cmd::parse("git branch"),
        Ok(Invocation::Branch(BranchArgs::List))
    );
    assert_eq!(
        cmd::parse("git branch -d old"),
        Ok(Invocation::Branch(BranchArgs::Delete("old".to_string())))
    );
    assert_eq!(
        cmd::parse("git branch -d"),
        Err(SimError::MissingBranchName)
    );
    assert_eq!(
        cmd::parse("git checkout -b feature"),
        Ok(Invocation::Checkout(CheckoutArgs::Create(
            "feature".to_string()
        )))
    );
    assert_eq!(
        cmd::parse("git checkout"),
        Err(SimError::MissingBranchName)
    );
    assert_eq!(
        cmd::parse("git checkout --force main"),
        Err(SimError::UnknownOption {
            option: "--force".to_string()
        })
    );
}

#[test]
fn test_parse_add_shapes() {
    assert_eq!(cmd::parse("git add ."), Ok(Invocation::Add(AddArgs::All)));
    assert_eq!(cmd::parse("git add -A"), Ok(Invocation::Add(AddArgs::All)));
    assert_eq!(
        cmd::parse("git add a.txt b.txt"),
        Ok(Invocation::Add(AddArgs::Paths(vec![
            "a.txt".to_string(),
            "b.txt".to_string()
        ])))
    );
    assert_eq!(cmd::parse("git add"), Err(SimError::NothingSpecified));
}

#[test]
fn test_parse_log_limits_and_flags() {
    let Ok(Invocation::Log(args)) = cmd::parse("git log --oneline -5") else {
        panic!("expected log invocation");
    };
    assert_eq!(args.flags, LogFlags::ONELINE);
    assert_eq!(args.limit, Some(5));
    assert_eq!(args.branch, None);

    let Ok(Invocation::Log(args)) = cmd::parse("git log --graph --all -n 2 feature") else {
        panic!("expected log invocation");
    };
    assert_eq!(args.flags, LogFlags::GRAPH | LogFlags::ALL);
    assert_eq!(args.limit, Some(2));
    assert_eq!(args.branch.as_deref(), Some("feature"));

    let Ok(Invocation::Log(args)) = cmd::parse("git log --max-count=7") else {
        panic!("expected log invocation");
    };
    assert_eq!(args.limit, Some(7));

    assert_eq!(
        cmd::parse("git log -n abc"),
        Err(SimError::InvalidLogLimit {
            value: "abc".to_string()
        })
    );
    assert_eq!(
        cmd::parse("git log --stat"),
        Err(SimError::UnknownOption {
            option: "--stat".to_string()
        })
    );
}

#[test]
fn test_parse_remote_ignores_flags() {
    assert_eq!(
        cmd::parse("git push -u origin feature"),
        Ok(Invocation::Push(RemoteArgs {
            remote: Some("origin".to_string()),
            branch: Some("feature".to_string()),
        }))
    );
    assert_eq!(
        cmd::parse("git pull"),
        Ok(Invocation::Pull(RemoteArgs::default()))
    );
}

#[test]
fn test_parse_clone_skips_valued_options() {
    assert_eq!(
        cmd::parse("git clone --depth 1 https://example.com/demo.git"),
        Ok(Invocation::Clone {
            url: "https://example.com/demo.git".to_string()
        })
    );
    assert_eq!(cmd::parse("git clone"), Err(SimError::MissingUrl));
}

#[test]
fn test_parse_stash_shapes() {
    assert_eq!(
        cmd::parse("git stash"),
        Ok(Invocation::Stash(StashArgs::Push { message: None }))
    );
    assert_eq!(
        cmd::parse(r#"git stash save "half done""#),
        Ok(Invocation::Stash(StashArgs::Push {
            message: Some("half done".to_string())
        }))
    );
    assert_eq!(
        cmd::parse("git stash push -m wip"),
        Ok(Invocation::Stash(StashArgs::Push {
            message: Some("wip".to_string())
        }))
    );
    assert_eq!(
        cmd::parse("git stash show"),
        Err(SimError::UnknownStashCommand {
            name: "show".to_string()
        })
    );
}

#[test]
fn test_parse_targets_required() {
    assert_eq!(cmd::parse("git merge"), Err(SimError::MissingBranchName));
    assert_eq!(cmd::parse("git rebase"), Err(SimError::MissingBranchName));
    assert_eq!(
        cmd::parse("git cherry-pick"),
        Err(SimError::MissingCommitHash)
    );
}

#[test]
fn test_repo_name_from_url() {
    assert_eq!(repo_name("https://github.com/user/repo.git"), "repo");
    assert_eq!(repo_name("https://github.com/user/tool/"), "tool");
    assert_eq!(repo_name("git@github.com:user/lib.git"), "lib");
    assert_eq!(repo_name("local"), "local");
}

// =============================================================================
// Entropy
// =============================================================================

#[test]
fn test_sequence_entropy_is_predictable() {
    let mut entropy = SequenceEntropy::new();
    assert_eq!(entropy.short_hash(), "0000001");
    assert_eq!(entropy.short_hash(), "0000002");
    assert_eq!(entropy.mock_file_number(), 1);
}

#[test]
fn test_seeded_entropy_is_reproducible() {
    let mut a = RngEntropy::seeded(42);
    let mut b = RngEntropy::seeded(42);
    for _ in 0..5 {
        let hash = a.short_hash();
        assert!(is_short_hash(&hash), "not a short hash: {hash}");
        assert_eq!(hash, b.short_hash());
    }
    assert!(a.mock_file_number() < 100);
}

// =============================================================================
// Session behavior
// =============================================================================

#[test]
fn test_initial_state() {
    let sim = sim();
    assert_eq!(sim.current_branch(), "main");
    assert_eq!(sim.branches(), ["main"]);
    assert_eq!(oneline(&sim, "main"), ["a1b2c3d Initial commit"]);
    assert!(sim.state().is_clean());
    assert!(sim.transcript().is_empty());
    assert_eq!(sim.user(), &UserConfig::default());
}

#[test]
fn test_non_git_input_never_mutates_state() {
    let mut sim = sim();
    sim.add_mock_file(Some("notes.txt"));
    let before = format!("{:?}", sim.state());

    for line in ["ls", "cd /tmp", "", "   ", "gitt status", "echo git"] {
        let len = sim.transcript().len();
        let entry = run(&mut sim, line);
        assert!(entry.is_error, "'{line}' should be flagged as an error");
        assert_eq!(sim.transcript().len(), len + 1);
    }

    assert_eq!(format!("{:?}", sim.state()), before);
}

#[test]
fn test_every_execute_appends_one_entry() {
    let mut sim = sim();
    let lines = [
        "git config --global user.name Ada",
        "git status",
        "git bogus",
        "git commit -m nothing",
        "git stash",
    ];
    for (i, line) in lines.iter().enumerate() {
        sim.execute(line);
        assert_eq!(sim.transcript().len(), i + 1, "after '{line}'");
    }
    // config set produces an entry with empty output
    assert_eq!(sim.transcript().entries()[0].output, "");
    assert_eq!(sim.transcript().error_count(), 1);
}

#[test]
fn test_version_and_init() {
    let mut sim = sim();
    assert_eq!(ok(&mut sim, "git --version"), "git version 2.43.0");
    assert_eq!(
        ok(&mut sim, "git init"),
        "Initialized empty Git repository in /workspace/.git/"
    );
}

#[test]
fn test_config_set_get_and_list() {
    let mut sim = sim();
    assert_eq!(ok(&mut sim, "git config"), "No configuration set");

    ok(&mut sim, r#"git config --global user.name "Ada Lovelace""#);
    ok(&mut sim, "git config --global user.email ada@example.com");
    assert_eq!(sim.user().name, "Ada Lovelace");
    assert_eq!(sim.user().email, "ada@example.com");

    assert_eq!(ok(&mut sim, "git config user.name"), "Ada Lovelace");
    insta::assert_snapshot!(
        ok(&mut sim, "git config"),
        @r"
    user.name=Ada Lovelace
    user.email=ada@example.com
    "
    );
    insta::assert_snapshot!(
        ok(&mut sim, "git config --list"),
        @r"
    user.name=Ada Lovelace
    user.email=ada@example.com
    remote.origin.url=https://github.com/user/repo.git
    "
    );
}

#[test]
fn test_config_list_placeholders() {
    let mut sim = sim();
    let output = ok(&mut sim, "git config --list");
    assert!(output.contains("user.name=(not set)"), "got: {output}");
    assert!(output.contains("user.email=(not set)"), "got: {output}");
}

#[test]
fn test_status_sections() {
    let mut sim = sim();
    assert_eq!(
        ok(&mut sim, "git status"),
        "On branch main\nnothing to commit, working tree clean"
    );

    sim.add_mock_file(Some("a.txt"));
    sim.add_mock_file(Some("b.txt"));
    ok(&mut sim, "git add a.txt");

    insta::assert_snapshot!(ok(&mut sim, "git status"), @r"
    On branch main

    Changes to be committed:
      modified:   a.txt

    Changes not staged for commit:
      modified:   b.txt
    ");
}

#[test]
fn test_add_single_file_moves_from_modified() {
    let mut sim = sim();
    sim.add_mock_file(Some("a.txt"));
    sim.add_mock_file(Some("b.txt"));

    assert_eq!(ok(&mut sim, "git add a.txt"), "");
    assert_eq!(sim.state().staged_files(), ["a.txt"]);
    assert_eq!(sim.state().modified_files(), ["b.txt"]);

    // Untracked paths are staged directly
    ok(&mut sim, "git add never-modified.rs");
    assert_eq!(sim.state().staged_files(), ["a.txt", "never-modified.rs"]);

    // Staging twice is a no-op
    ok(&mut sim, "git add a.txt");
    assert_eq!(sim.state().staged_files(), ["a.txt", "never-modified.rs"]);
}

#[test]
fn test_add_glob_pathspec() {
    let mut sim = sim();
    sim.add_mock_file(Some("a.txt"));
    sim.add_mock_file(Some("b.txt"));
    sim.add_mock_file(Some("main.rs"));

    ok(&mut sim, "git add *.txt");
    assert_eq!(sim.state().staged_files(), ["a.txt", "b.txt"]);
    assert_eq!(sim.state().modified_files(), ["main.rs"]);

    let output = err(&mut sim, "git add *.md");
    assert_eq!(output, "fatal: pathspec '*.md' did not match any files");
}

#[test]
fn test_add_failing_pathspec_stages_nothing() {
    let mut sim = sim();
    sim.add_mock_file(Some("a.txt"));

    err(&mut sim, "git add a.txt *.md");
    assert!(sim.state().staged_files().is_empty());
    assert_eq!(sim.state().modified_files(), ["a.txt"]);
}

#[test]
fn test_add_all_then_commit_empties_index() {
    let mut sim = sim();
    sim.add_mock_file(Some("a.txt"));
    sim.add_mock_file(Some("b.txt"));

    ok(&mut sim, "git add .");
    assert_eq!(sim.state().staged_files(), ["a.txt", "b.txt"]);
    assert!(sim.state().modified_files().is_empty());

    assert_eq!(
        ok(&mut sim, r#"git commit -m "add files""#),
        "[main 0000001] add files\n 2 file(s) changed"
    );
    assert!(sim.state().is_clean());

    let head = sim.state().current_log().last().expect("commit exists");
    assert_eq!(head.files, ["a.txt", "b.txt"]);
    assert_eq!(head.author, "Unknown");

    // Nothing staged: benign, no new commit
    let before = sim.state().current_log().len();
    assert_eq!(
        ok(&mut sim, r#"git commit -m "msg2""#),
        "nothing to commit, working tree clean"
    );
    assert_eq!(sim.state().current_log().len(), before);
}

#[test]
fn test_commit_all_stages_modified_first() {
    let mut sim = sim();
    ok(&mut sim, "git config --global user.name Ada");
    sim.add_mock_file(Some("a.txt"));

    assert_eq!(
        ok(&mut sim, "git commit -am quick fix"),
        "[main 0000001] quick fix\n 1 file(s) changed"
    );
    assert!(sim.state().is_clean());
    assert_eq!(
        sim.state().current_log().last().map(|c| c.author.as_str()),
        Some("Ada")
    );
}

#[test]
fn test_checkout_new_branch_snapshots_log() {
    let mut sim = sim();
    sim.add_mock_file(None);
    ok(&mut sim, "git add .");
    ok(&mut sim, "git commit -m first");

    assert_eq!(
        ok(&mut sim, "git checkout -b feature"),
        "Switched to a new branch 'feature'"
    );
    assert_eq!(sim.current_branch(), "feature");
    assert_eq!(oneline(&sim, "feature"), oneline(&sim, "main"));

    ok(&mut sim, "git checkout main");
    sim.add_mock_file(None);
    ok(&mut sim, "git add .");
    ok(&mut sim, "git commit -m second");

    assert_eq!(
        oneline(&sim, "feature"),
        ["a1b2c3d Initial commit", "0000001 first"]
    );
    assert_eq!(oneline(&sim, "main").len(), 3);
}

#[test]
fn test_checkout_errors() {
    let mut sim = sim();
    assert_eq!(
        err(&mut sim, "git checkout nope"),
        "error: pathspec 'nope' did not match any file(s) known to git"
    );
    assert_eq!(
        err(&mut sim, "git checkout -b main"),
        "fatal: A branch named 'main' already exists."
    );
    assert_eq!(sim.branches(), ["main"]);
    assert_eq!(ok(&mut sim, "git checkout main"), "Already on 'main'");
}

#[test]
fn test_checkout_current_branch_is_noop() {
    let mut sim = sim();
    ok(&mut sim, "git checkout -b feature");
    let before = format!("{:?}", sim.state());

    assert_eq!(ok(&mut sim, "git checkout feature"), "Already on 'feature'");
    assert_eq!(format!("{:?}", sim.state()), before);
    assert_eq!(
        ok(&mut sim, "git checkout main"),
        "Switched to branch 'main'"
    );
}

#[test]
fn test_branch_create_list_delete() {
    let mut sim = sim();
    assert_eq!(ok(&mut sim, "git branch topic"), "");
    assert_eq!(sim.current_branch(), "main");
    ok(&mut sim, "git checkout -b feature");

    assert_eq!(ok(&mut sim, "git branch"), "  main\n  topic\n* feature");
    assert_eq!(
        err(&mut sim, "git branch topic"),
        "fatal: A branch named 'topic' already exists."
    );

    assert_eq!(ok(&mut sim, "git branch -d topic"), "Deleted branch topic");
    assert_eq!(sim.branches(), ["main", "feature"]);
    assert_eq!(
        err(&mut sim, "git branch -d topic"),
        "error: branch 'topic' not found"
    );
}

#[test]
fn test_delete_current_branch_always_errors() {
    let mut sim = sim();
    for branch in ["main", "feature"] {
        if branch != "main" {
            ok(&mut sim, &format!("git checkout -b {branch}"));
        }
        let output = err(&mut sim, &format!("git branch -d {branch}"));
        assert_eq!(
            output,
            format!("error: Cannot delete branch '{branch}' checked out")
        );
        assert!(sim.branches().iter().any(|b| b == branch));
        assert_eq!(sim.current_branch(), branch);
    }
}

#[test]
fn test_log_layouts() {
    let mut sim = sim();
    for message in ["one", "two", "three", "four"] {
        sim.add_mock_file(None);
        ok(&mut sim, "git add .");
        ok(&mut sim, &format!("git commit -m {message}"));
    }

    insta::assert_snapshot!(ok(&mut sim, "git log --oneline"), @r"
    0000004 four
    0000003 three
    0000002 two
    0000001 one
    a1b2c3d Initial commit
    ");
    insta::assert_snapshot!(ok(&mut sim, "git log --oneline -2"), @r"
    0000004 four
    0000003 three
    ");
    insta::assert_snapshot!(ok(&mut sim, "git log --graph"), @r"
    * 0000004 four
    * 0000003 three
    * 0000002 two
    * 0000001 one
    * a1b2c3d Initial commit
    ");
    insta::assert_snapshot!(ok(&mut sim, "git log -n 2"), @r"
    commit 0000004
    Author: Unknown

        four

    commit 0000003
    Author: Unknown

        three
    ");

    let full = ok(&mut sim, "git log");
    assert_eq!(full.matches("commit ").count(), 3);
}

#[test]
fn test_log_other_branch() {
    let mut sim = sim();
    ok(&mut sim, "git checkout -b feature");
    ok(&mut sim, "git cherry-pick abc1234");
    ok(&mut sim, "git checkout main");

    assert_eq!(
        ok(&mut sim, "git log --oneline feature"),
        "0000001 Cherry-picked commit abc1234\na1b2c3d Initial commit"
    );
    assert_eq!(
        err(&mut sim, "git log ghost"),
        "error: branch 'ghost' not found"
    );
}

#[test]
fn test_log_all_includes_every_branch() {
    let mut sim = sim();
    ok(&mut sim, "git checkout -b feature");
    sim.add_mock_file(Some("a.txt"));
    ok(&mut sim, "git add a.txt");
    ok(&mut sim, "git commit -m a");
    ok(&mut sim, "git checkout main");

    assert_eq!(ok(&mut sim, "git log --oneline"), "a1b2c3d Initial commit");
    insta::assert_snapshot!(ok(&mut sim, "git log --oneline --all"), @r"
    0000001 a
    a1b2c3d Initial commit
    ");
    assert_eq!(
        ok(&mut sim, "git log --graph --all -1"),
        "* 0000001 a"
    );
}

#[test]
fn test_log_all_lists_shared_commits_once() {
    let mut sim = sim();
    ok(&mut sim, "git checkout -b feature");
    ok(&mut sim, "git cherry-pick 1111111");
    ok(&mut sim, "git checkout main");
    ok(&mut sim, "git merge feature");
    ok(&mut sim, "git cherry-pick 2222222");

    insta::assert_snapshot!(ok(&mut sim, "git log --oneline --all"), @r"
    0000002 Cherry-picked commit 2222222
    0000001 Cherry-picked commit 1111111
    a1b2c3d Initial commit
    ");
    assert_eq!(sim.state().all_commits().len(), 3);
}

#[test]
fn test_feature_merge_scenario() {
    let mut sim = sim();
    ok(&mut sim, "git checkout -b feature");
    sim.add_mock_file(None);
    ok(&mut sim, "git add .");
    ok(&mut sim, "git commit -m a");
    ok(&mut sim, "git checkout main");

    assert_eq!(
        ok(&mut sim, "git merge feature"),
        "Merge made by the 'recursive' strategy.\n 1 commit(s) merged"
    );
    let log = ok(&mut sim, "git log --oneline");
    assert!(log.contains("0000001 a"), "merged commit missing: {log}");
    assert_eq!(oneline(&sim, "main"), oneline(&sim, "feature"));

    // Second merge has nothing left to append
    assert_eq!(ok(&mut sim, "git merge feature"), "Already up to date.");
}

#[test]
fn test_merge_into_self_is_noop() {
    let mut sim = sim();
    ok(&mut sim, "git cherry-pick abc1234");
    let before = oneline(&sim, "main");

    assert_eq!(ok(&mut sim, "git merge main"), "Already up to date.");
    assert_eq!(oneline(&sim, "main"), before);
}

#[test]
fn test_merge_is_positional() {
    let mut sim = sim();
    ok(&mut sim, "git checkout -b feature");
    ok(&mut sim, "git cherry-pick f1");
    ok(&mut sim, "git cherry-pick f2");
    ok(&mut sim, "git checkout main");
    ok(&mut sim, "git cherry-pick m1");

    // main has 2 commits, feature has 3: only feature's third commit is appended
    assert_eq!(
        ok(&mut sim, "git merge feature"),
        "Merge made by the 'recursive' strategy.\n 1 commit(s) merged"
    );
    assert_eq!(
        oneline(&sim, "main"),
        [
            "a1b2c3d Initial commit",
            "0000003 Cherry-picked commit m1",
            "0000002 Cherry-picked commit f2",
        ]
    );
}

#[test]
fn test_merge_missing_branch() {
    let mut sim = sim();
    assert_eq!(
        err(&mut sim, "git merge ghost"),
        "error: branch 'ghost' not found"
    );
}

#[test]
fn test_stash_pop_restores_and_removes() {
    let mut sim = sim();
    sim.add_mock_file(Some("a.txt"));
    sim.add_mock_file(Some("b.txt"));
    ok(&mut sim, "git add b.txt");

    assert_eq!(
        ok(&mut sim, r#"git stash save "x""#),
        "Saved working directory and index state On main: x"
    );
    assert!(sim.state().is_clean());
    assert_eq!(sim.state().stash().len(), 1);

    assert_eq!(
        ok(&mut sim, "git stash pop"),
        "On branch main\nChanges not staged for commit:\n  a.txt\n  b.txt\nDropped stash@{0}"
    );
    assert_eq!(sim.state().modified_files(), ["a.txt", "b.txt"]);
    assert!(sim.state().stash().is_empty());
}

#[test]
fn test_stash_apply_keeps_entry() {
    let mut sim = sim();
    sim.add_mock_file(Some("a.txt"));
    ok(&mut sim, "git stash");
    assert_eq!(sim.state().stash()[0].message, "WIP");

    ok(&mut sim, "git stash apply");
    assert_eq!(sim.state().modified_files(), ["a.txt"]);
    assert_eq!(sim.state().stash().len(), 1);

    // Applying again does not duplicate files
    ok(&mut sim, "git stash apply");
    assert_eq!(sim.state().modified_files(), ["a.txt"]);
}

#[test]
fn test_stash_list_newest_first() {
    let mut sim = sim();
    assert_eq!(ok(&mut sim, "git stash list"), "No stash entries");

    sim.add_mock_file(None);
    ok(&mut sim, "git stash save first");
    ok(&mut sim, "git checkout -b feature");
    sim.add_mock_file(None);
    ok(&mut sim, "git stash push second");

    assert_eq!(
        ok(&mut sim, "git stash list"),
        "stash@{0}: On feature: second\nstash@{1}: On main: first"
    );
}

#[test]
fn test_stash_empty_cases() {
    let mut sim = sim();
    assert_eq!(ok(&mut sim, "git stash"), "No local changes to save");
    assert!(sim.state().stash().is_empty());

    for line in ["git stash pop", "git stash apply", "git stash drop"] {
        assert_eq!(err(&mut sim, line), "No stash entries found.");
    }
}

#[test]
fn test_stash_drop_and_clear() {
    let mut sim = sim();
    for _ in 0..3 {
        sim.add_mock_file(None);
        ok(&mut sim, "git stash");
    }
    assert_eq!(ok(&mut sim, "git stash drop"), "Dropped stash@{0}");
    assert_eq!(sim.state().stash().len(), 2);
    assert!(sim.state().modified_files().is_empty());

    ok(&mut sim, "git stash clear");
    assert!(sim.state().stash().is_empty());
}

#[test]
fn test_cherry_pick_appends_one_commit() {
    let mut sim = sim();
    let before = sim.state().current_log().len();

    assert_eq!(
        ok(&mut sim, "git cherry-pick abc1234"),
        "[main 0000001] Cherry-picked commit abc1234"
    );
    let log = sim.state().current_log();
    assert_eq!(log.len(), before + 1);
    assert!(log[before].message.contains("abc1234"));
    assert!(log[before].files.is_empty());
}

#[test]
fn test_rebase_is_cosmetic() {
    let mut sim = sim();
    ok(&mut sim, "git checkout -b feature");
    let before = oneline(&sim, "feature");

    assert_eq!(
        ok(&mut sim, "git rebase main"),
        "Successfully rebased and updated refs/heads/feature."
    );
    assert_eq!(oneline(&sim, "feature"), before);
    assert_eq!(
        ok(&mut sim, "git rebase feature"),
        "Current branch feature is up to date."
    );
    assert_eq!(
        err(&mut sim, "git rebase ghost"),
        "error: branch 'ghost' not found"
    );
}

#[test]
fn test_remote_commands_are_cosmetic() {
    let mut sim = sim();
    let before = format!("{:?}", sim.state());

    assert_eq!(
        ok(&mut sim, "git pull"),
        "Already up to date.\nFrom https://github.com/user/repo.git\n * branch            main -> FETCH_HEAD"
    );
    assert_eq!(
        ok(&mut sim, "git push upstream dev"),
        "To unknown\n   0000001..0000002  dev -> dev"
    );
    insta::assert_snapshot!(ok(&mut sim, "git clone https://github.com/user/demo.git"), @r"
    Cloning into 'demo'...
    remote: Counting objects: 100, done.
    remote: Compressing objects: 100% (80/80), done.
    Receiving objects: 100% (100/100), done.
    ");

    assert_eq!(format!("{:?}", sim.state()), before);
}

#[test]
fn test_mock_file_entry() {
    let mut sim = sim();
    sim.add_mock_file(None);

    let entry = sim.transcript().last().expect("entry recorded");
    assert_eq!(entry.command, MOCK_FILE_COMMAND);
    assert_eq!(entry.output, "Created file1.txt (use 'git status' to see it)");
    assert!(!entry.is_error);
    assert_eq!(sim.state().modified_files(), ["file1.txt"]);
}

#[test]
fn test_clear_transcript_keeps_state() {
    let mut sim = sim();
    ok(&mut sim, "git checkout -b feature");
    sim.clear_transcript();

    assert!(sim.transcript().is_empty());
    assert_eq!(sim.current_branch(), "feature");
}

#[test]
fn test_transcript_json_export() {
    let mut sim = sim();
    ok(&mut sim, "git status");
    err(&mut sim, "ls");

    let json = sim.transcript().to_json().expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let entries = value.as_array().expect("array of entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["command"], "git status");
    assert_eq!(entries[1]["is_error"], true);
    assert!(entries[0]["timestamp"].is_string());
}

#[test]
fn test_custom_settings() {
    let settings = SimulatorSettings::builder()
        .with_initial_branch("trunk".to_string())
        .with_seed_hash("0000000".to_string())
        .with_git_version("2.50.1".to_string())
        .with_workspace("/tmp/lab/".to_string())
        .with_user(UserConfig {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
        })
        .with_remotes(BTreeMap::from([(
            "upstream".to_string(),
            "https://example.com/up.git".to_string(),
        )]))
        .build();
    let mut sim = Simulator::with_entropy(settings, Box::new(SequenceEntropy::new()));

    assert_eq!(sim.current_branch(), "trunk");
    assert_eq!(oneline(&sim, "trunk"), ["0000000 Initial commit"]);
    assert_eq!(ok(&mut sim, "git --version"), "git version 2.50.1");
    assert_eq!(
        ok(&mut sim, "git init"),
        "Initialized empty Git repository in /tmp/lab/.git/"
    );
    assert_eq!(ok(&mut sim, "git config user.name"), "Grace");
    assert!(ok(&mut sim, "git pull upstream").contains("From https://example.com/up.git"));
}

#[test]
fn test_seeded_sessions_match() {
    let settings = SimulatorSettings::builder().with_rng_seed(7).build();
    let mut a = Simulator::new(settings.clone());
    let mut b = Simulator::new(settings);

    for sim in [&mut a, &mut b] {
        sim.add_mock_file(None);
        sim.execute("git add .");
        sim.execute("git commit -m seeded");
    }
    assert_eq!(a.state().current_log(), b.state().current_log());
    assert_eq!(a.state().modified_files(), b.state().modified_files());
}
