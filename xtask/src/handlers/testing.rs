use crate::services::utils::normalize_project_name;
use anyhow::{Context, bail};
use std::process::Command;

/// What a test command runs against.
enum Target {
    Workspace,
    Crate(String),
}

impl Target {
    fn from_arg(project: Option<&str>) -> Self {
        match project {
            None | Some("all") => Self::Workspace,
            Some(name) => Self::Crate(normalize_project_name(name)),
        }
    }

    fn push_args(&self, args: &mut Vec<String>) {
        match self {
            Self::Workspace => args.push("--workspace".into()),
            Self::Crate(name) => args.extend(["-p".into(), name.clone()]),
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::Crate(_) => "crate",
        }
    }
}

/// Runs unit and integration tests, through `cargo nextest` when it is installed.
///
/// # Errors
/// Returns an error if cargo cannot be spawned or any test fails.
pub fn run_tests(project: Option<&str>) -> anyhow::Result<()> {
    let target = Target::from_arg(project);
    let has_nextest = Command::new("cargo-nextest").arg("--version").output().is_ok();

    let mut args: Vec<String> =
        if has_nextest { vec!["nextest".into(), "run".into()] } else { vec!["test".into()] };
    target.push_args(&mut args);
    args.push("--all-features".into());

    if has_nextest {
        args.extend(
            ["--failure-output", "immediate-final", "--success-output", "never"]
                .into_iter()
                .map(String::from),
        );
    } else {
        args.extend(["--lib", "--tests", "--", "-q"].into_iter().map(String::from));
    }

    println!(
        "🧪 Running {} tests via '{}'...",
        target.label(),
        if has_nextest { "cargo nextest" } else { "cargo test" }
    );
    let status = Command::new("cargo").args(args).status().context("Failed to execute cargo")?;

    if !status.success() {
        bail!("Tests failed!");
    }
    Ok(())
}

/// Runs doc tests. Nextest cannot run them, so this always goes through `cargo test --doc`.
///
/// # Errors
/// Returns an error if cargo cannot be spawned or any doc test fails.
pub fn run_doctests(project: Option<&str>) -> anyhow::Result<()> {
    let target = Target::from_arg(project);

    let mut args: Vec<String> = vec!["test".into(), "--doc".into()];
    target.push_args(&mut args);
    args.push("--all-features".into());

    println!("📚 Running {} doc tests...", target.label());
    let status = Command::new("cargo").args(args).status().context("Failed to execute cargo")?;

    if !status.success() {
        bail!("Doc tests failed!");
    }
    Ok(())
}
