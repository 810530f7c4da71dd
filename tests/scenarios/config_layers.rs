//! Scenario: Configuring recipebook
//!
//! Journey: A user keeps a personal config, a project overrides it, and a
//! CI job forces JSON through the environment.
//!
//! Success Criteria:
//! - Project config wins over user config
//! - Environment wins over files, flags win over everything

use crate::common::*;

const OTHER_SEED: &str = r#"categories = ["Breakfast"]"#;

/// SCENARIO: Config precedence from user file to CLI flag
#[test]
fn scenario_config_precedence() {
    let env = TestEnv::new();

    // Step 1: Only a user config exists
    env.write_home_file("user-seed.toml", OTHER_SEED);
    let user_seed = env.home_path("user-seed.toml");
    env.write_home_file(
        ".config/recipebook/config.toml",
        &format!("[catalog]\nseed = {:?}\n", user_seed.display().to_string()),
    );
    let result = env.run(&["categories"]);
    crate::assert_success!(result);
    assert!(result.stdout.contains("Breakfast"), "{}", result.stdout);

    // Step 2: A project config takes over
    env.write_project_file("seed.toml", KITCHEN_SEED);
    env.write_project_file("recipebook.toml", "[catalog]\nseed = \"seed.toml\"\n");
    let result = env.run(&["categories"]);
    crate::assert_success!(result);
    assert!(result.stdout.contains("Desserts"));
    assert!(!result.stdout.contains("Breakfast"));

    // Step 3: The environment switches output to JSON
    let result = env.run_with_env(&["categories"], &[("RECIPEBOOK_FORMAT", "json")]);
    crate::assert_success!(result);
    assert_eq!(result.json().as_array().map(Vec::len), Some(2));

    // Step 4: --seed beats every file
    let result = env.run_with_env(
        &["--seed", user_seed.to_str().unwrap(), "categories"],
        &[("RECIPEBOOK_SEED", "does-not-exist.toml")],
    );
    crate::assert_success!(result);
    assert!(result.stdout.contains("Breakfast"));
}

/// SCENARIO: A typo in the config is reported but not fatal
#[test]
fn scenario_config_typo_is_a_warning() {
    let env = TestEnv::new();
    env.write_project_file("seed.toml", KITCHEN_SEED);
    env.write_project_file(
        "recipebook.toml",
        "[catalog]\nseed = \"seed.toml\"\n\n[output]\nfromat = \"json\"\n",
    );

    let result = env.run(&["check"]);
    crate::assert_success!(result);
    assert!(result.stdout.contains("Seed:"));
    assert!(result.stdout.contains("warning: unknown config key 'fromat'"));
    assert!(result.stdout.contains("did you mean 'format'?"));
}
