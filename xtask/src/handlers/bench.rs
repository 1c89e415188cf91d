use crate::services::utils::normalize_project_name;
use anyhow::{Context, bail};

/// Runs the criterion benches of one crate via `cargo bench`.
///
/// `filter` and `baseline` are forwarded to criterion after `--`.
///
/// # Errors
/// Returns an error if cargo cannot be spawned or the bench run fails.
pub fn run_bench(project: &str, filter: Option<&str>, baseline: Option<&str>) -> anyhow::Result<()> {
    let project = normalize_project_name(project);
    println!("🏁 Running benches for '{project}'...");

    let args = bench_args(&project, filter, baseline);
    let status = std::process::Command::new("cargo")
        .args(&args)
        .status()
        .context("Failed to execute cargo bench")?;

    if !status.success() {
        bail!("Bench exited with non-zero status: {}", status.code().unwrap_or(-1));
    }

    Ok(())
}

fn bench_args(project: &str, filter: Option<&str>, baseline: Option<&str>) -> Vec<String> {
    let mut args: Vec<String> =
        ["bench", "-p", project, "--all-features"].into_iter().map(String::from).collect();

    if filter.is_some() || baseline.is_some() {
        args.push("--".into());
    }
    if let Some(filter) = filter {
        args.push(filter.into());
    }
    if let Some(baseline) = baseline {
        args.extend(["--save-baseline".into(), baseline.into()]);
    }

    args
}
