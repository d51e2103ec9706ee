//! End-to-end CLI test suite.
//!
//! Each test drives the `jot` binary against an isolated state directory.

mod common;

use common::harness::TestEnv;
use jot::domain::{Priority, State};
use predicates::prelude::*;

fn contents(env: &TestEnv) -> Vec<String> {
    env.notes()
        .iter()
        .map(|n| n.contents().to_string())
        .collect()
}

// ===========================================
// add command tests
// ===========================================
mod add_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_creates_state_directory() {
        let env = TestEnv::new();
        assert!(!env.state_dir().exists());

        env.cmd()
            .add("buy milk")
            .assert()
            .success()
            .stdout(predicate::str::contains("added note"));

        assert!(env.state_file().is_file());
        assert!(!env.state_dir().join("state.temp").exists());
    }

    #[test]
    fn test_add_defaults() {
        let env = TestEnv::new();
        env.cmd().add("buy milk").assert().success();

        let notes = env.notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].contents(), "buy milk");
        assert_eq!(notes[0].priority(), Priority::Medium);
        assert_eq!(notes[0].state(), State::None);
    }

    #[test]
    fn test_add_joins_words() {
        let env = TestEnv::new();
        env.cmd().args(["add", "call", "the", "bank"]).assert().success();
        assert_eq!(contents(&env), vec!["call the bank"]);
    }

    #[test]
    fn test_add_without_text_fails() {
        let env = TestEnv::new();
        env.cmd().args(["add"]).assert().failure();
        assert!(!env.state_file().exists());
    }

    #[test]
    fn test_add_keeps_sorted_order() {
        let env = TestEnv::new();
        for item in ["pear", "apple", "fig"] {
            env.cmd().add(item).assert().success();
        }
        assert_eq!(contents(&env), vec!["apple", "fig", "pear"]);
    }
}

// ===========================================
// ls command tests
// ===========================================
mod ls_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ls_empty() {
        let env = TestEnv::new();
        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_ls_shows_canonical_order_with_indices() {
        let env = TestEnv::new();
        env.seed(&[
            (Priority::Low, State::None, "a"),
            (Priority::High, State::Todo, "b"),
        ]);

        let output = env.cmd().ls().output_success();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" 0 "));
        assert!(lines[0].ends_with("\x1b[91mb\x1b[0m"));
        assert!(lines[1].contains(" 1 "));
        assert!(lines[1].ends_with("a\x1b[0m"));
    }

    #[test]
    fn test_ls_json() {
        let env = TestEnv::new();
        env.seed(&[
            (Priority::Medium, State::Complete, "b"),
            (Priority::Medium, State::None, "a"),
        ]);

        let output: serde_json::Value = env.cmd().ls().format_json().output_json();
        let data = output["data"].as_array().expect("data should be an array");
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["contents"], "a");
        assert_eq!(data[0]["index"], 0);
        assert_eq!(data[1]["state"], "complete");
    }

    #[test]
    fn test_ls_with_template() {
        let env = TestEnv::new();
        env.seed(&[(Priority::High, State::InProgress, "ship it")]);
        std::fs::create_dir_all(env.state_dir().join("templates")).unwrap();
        std::fs::write(
            env.state_dir().join("templates").join("short.tmpl"),
            "{% for n in notes %}{{ n.index }}:{{ status(n.state) }}:{{ n.contents }}\n{% endfor %}",
        )
        .unwrap();

        env.cmd()
            .args(["ls", "--template", "short"])
            .assert()
            .success()
            .stdout("0:In Progress:ship it\n");
    }

    #[test]
    fn test_ls_with_configured_template() {
        let env = TestEnv::new();
        env.seed(&[(Priority::Low, State::None, "later")]);
        let templates = env.write_file("tmpl/count.tmpl", "{{ notes | length }} note(s)");
        env.write_file(
            "config.toml",
            &format!(
                "template = \"count\"\ntemplates_dir = {:?}\n",
                templates.parent().unwrap().to_string_lossy()
            ),
        );

        env.cmd().ls().assert().success().stdout("1 note(s)");
    }

    #[test]
    fn test_ls_missing_template_fails() {
        let env = TestEnv::new();
        env.cmd()
            .args(["ls", "--template", "ghost"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("ghost"));
    }

    #[test]
    fn test_ls_corrupt_state_fails() {
        let env = TestEnv::new();
        env.write_file("state/state", "definitely not jot data");

        env.cmd()
            .ls()
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a jot state file"));
    }
}

// ===========================================
// rm command tests
// ===========================================
mod rm_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rm_removes_by_index() {
        let env = TestEnv::new();
        env.seed(&[
            (Priority::Medium, State::None, "a"),
            (Priority::Medium, State::None, "b"),
            (Priority::Medium, State::None, "c"),
        ]);

        env.cmd()
            .rm("1")
            .assert()
            .success()
            .stdout(predicate::str::contains("removed note"));
        assert_eq!(contents(&env), vec!["a", "c"]);
    }

    #[test]
    fn test_rm_out_of_range_leaves_state_unchanged() {
        let env = TestEnv::new();
        env.seed(&[
            (Priority::Medium, State::None, "a"),
            (Priority::Medium, State::None, "b"),
            (Priority::Medium, State::None, "c"),
        ]);
        let before = std::fs::read(env.state_file()).unwrap();

        env.cmd()
            .rm("5")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid note index 5"));

        assert_eq!(std::fs::read(env.state_file()).unwrap(), before);
    }

    #[test]
    fn test_rm_rejects_negative_index() {
        let env = TestEnv::new();
        env.seed(&[(Priority::Medium, State::None, "a")]);
        env.cmd().args(["rm", "--", "-1"]).assert().failure();
        assert_eq!(env.notes().len(), 1);
    }

    #[test]
    fn test_rm_rejects_non_numeric_index() {
        let env = TestEnv::new();
        env.seed(&[(Priority::Medium, State::None, "a")]);
        env.cmd().rm("first").assert().failure();
        assert_eq!(env.notes().len(), 1);
    }
}

// ===========================================
// promote / demote command tests
// ===========================================
mod state_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_promote_then_demote() {
        let env = TestEnv::new();
        env.seed(&[(Priority::Medium, State::None, "task")]);

        env.cmd()
            .promote("0")
            .assert()
            .success()
            .stdout(predicate::str::contains("promoted note"));
        assert_eq!(env.notes()[0].state(), State::Todo);

        env.cmd()
            .demote("0")
            .assert()
            .success()
            .stdout(predicate::str::contains("demoted note"));
        assert_eq!(env.notes()[0].state(), State::None);
    }

    #[test]
    fn test_promote_saturates() {
        let env = TestEnv::new();
        env.seed(&[(Priority::Medium, State::Complete, "done")]);
        env.cmd().promote("0").assert().success();
        assert_eq!(env.notes()[0].state(), State::Complete);
    }

    #[test]
    fn test_demote_out_of_range() {
        let env = TestEnv::new();
        env.cmd()
            .demote("0")
            .assert()
            .failure()
            .stderr(predicate::str::contains("there are no notes"));
    }
}

// ===========================================
// priority command tests
// ===========================================
mod priority_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_priority_by_level_reorders() {
        let env = TestEnv::new();
        env.seed(&[
            (Priority::Medium, State::None, "a"),
            (Priority::Medium, State::None, "b"),
        ]);

        env.cmd()
            .priority("1", "2")
            .assert()
            .success()
            .stdout(predicate::str::contains("priority updated"));

        let notes = env.notes();
        assert_eq!(notes[0].contents(), "b");
        assert_eq!(notes[0].priority(), Priority::High);
    }

    #[test]
    fn test_priority_by_name() {
        let env = TestEnv::new();
        env.seed(&[(Priority::Medium, State::None, "a")]);
        env.cmd().priority("0", "low").assert().success();
        assert_eq!(env.notes()[0].priority(), Priority::Low);
    }

    #[test]
    fn test_priority_rejects_invalid_value() {
        let env = TestEnv::new();
        env.seed(&[(Priority::Medium, State::None, "a")]);
        let before = std::fs::read(env.state_file()).unwrap();

        env.cmd()
            .priority("0", "7")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid priority"));

        assert_eq!(std::fs::read(env.state_file()).unwrap(), before);
    }
}

// ===========================================
// configuration and misc
// ===========================================
mod misc_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_state_dir_from_env() {
        let env = TestEnv::new();
        let mut cmd = assert_cmd::Command::cargo_bin("jot").unwrap();
        cmd.env("JOT_DIR", env.state_dir())
            .args(["--config", &env.config_path().to_string_lossy(), "add", "via env"])
            .assert()
            .success();

        assert_eq!(contents(&env), vec!["via env"]);
    }

    #[test]
    fn test_empty_env_dir_is_ignored() {
        let env = TestEnv::new();
        let cwd = env.write_file("cwd/.keep", "");
        let cwd = cwd.parent().unwrap();
        env.write_file(
            "config.toml",
            &format!("dir = {:?}\n", env.state_dir().to_string_lossy()),
        );

        let mut cmd = assert_cmd::Command::cargo_bin("jot").unwrap();
        cmd.current_dir(cwd)
            .env("JOT_DIR", "")
            .args(["--config", &env.config_path().to_string_lossy(), "add", "hello"])
            .assert()
            .success()
            .stdout(predicate::str::contains("added note"));

        assert_eq!(contents(&env), vec!["hello"]);
        assert!(!cwd.join("state").exists());
    }

    #[test]
    fn test_invalid_config_fails() {
        let env = TestEnv::new();
        env.write_file("config.toml", "dir = [");
        env.cmd()
            .ls()
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config file"));
    }

    #[test]
    fn test_completions() {
        let env = TestEnv::new();
        env.cmd()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("jot"));
    }

    #[test]
    fn test_stale_temp_file_is_ignored() {
        let env = TestEnv::new();
        env.seed(&[(Priority::High, State::Todo, "survivor")]);
        env.write_file("state/state.temp", "half-written");

        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("survivor"));

        env.cmd().add("next").assert().success();
        assert_eq!(contents(&env), vec!["survivor", "next"]);
        assert!(!env.state_dir().join("state.temp").exists());
    }
}
