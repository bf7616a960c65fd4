//! Implementation of the `stubsmith generate` command.
//!
//! Responsibility: resolve the profile, build a `GenerationRequest`, call the
//! core `StubProcessor`, and display results. No naming rules live here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use stubsmith_adapters::LocalFilesystem;
use stubsmith_core::{
    application::StubProcessor,
    domain::{GeneratedFile, GenerationConfig, GenerationRequest},
    error::StubsmithError,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Machine-readable summary for `--output-format json`.
#[derive(Debug, Serialize)]
struct GenerateSummary<'a> {
    profile: &'a str,
    target_dir: &'a Path,
    dry_run: bool,
    count: usize,
    files: Vec<FileEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct FileEntry<'a> {
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
}

/// Execute the `stubsmith generate` command.
///
/// 1. Resolve the `--stub-id` profile into a `GenerationConfig`
/// 2. Build the request from NAME, `--target` and `--force`
/// 3. Plan (`--dry-run`) or generate through `LocalFilesystem`
/// 4. Report the outcome
#[instrument(skip_all, fields(name = %args.name, profile = %args.stub_id))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.stub_id.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "--stub-id must not be empty".into(),
            source: None,
        });
    }

    let generation = config.profile(&args.stub_id)?;
    let request = build_request(&args)?;

    debug!(
        stubs = %generation.stub_source_dir().display(),
        target = %request.resolve_target_dir(generation.target_base_dir()).display(),
        suffixes = %generation.preserve_suffixes(),
        "Profile resolved"
    );

    let processor = StubProcessor::new(Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let plan = processor
            .plan(&generation, &request)
            .with_cli_context(|| "planning generation")?;
        return report_plan(&args, &generation, &request, &plan, &output);
    }

    let report = processor
        .generate_report(&generation, &request)
        .with_cli_context(|| "generating from stubs")?;

    info!(files = report.count(), "Generation finished");

    if output.is_json() {
        let summary = GenerateSummary {
            profile: &args.stub_id,
            target_dir: &report.target_dir,
            dry_run: false,
            count: report.count(),
            files: report
                .written
                .iter()
                .map(|path| FileEntry { path, exists: None })
                .collect(),
        };
        output.json(&summary)?;
        return Ok(());
    }

    for path in &report.written {
        output.item(&path.display().to_string(), true)?;
    }
    output.success(&format!(
        "Code generated successfully! ({} files)",
        report.count()
    ))?;

    Ok(())
}

fn build_request(args: &GenerateArgs) -> CliResult<GenerationRequest> {
    GenerationRequest::builder()
        .base_name(args.name.clone())
        .maybe_target_dir(args.target.clone())
        .overwrite(args.force)
        .build()
        .map_err(|e| CliError::Core(StubsmithError::from(e)))
}

fn report_plan(
    args: &GenerateArgs,
    generation: &GenerationConfig,
    request: &GenerationRequest,
    plan: &[GeneratedFile],
    output: &OutputManager,
) -> CliResult<()> {
    let target_dir: PathBuf = request
        .resolve_target_dir(generation.target_base_dir())
        .to_path_buf();

    if output.is_json() {
        let summary = GenerateSummary {
            profile: &args.stub_id,
            target_dir: &target_dir,
            dry_run: true,
            count: plan.len(),
            files: plan
                .iter()
                .map(|file| FileEntry {
                    path: &file.target_path,
                    exists: Some(file.exists),
                })
                .collect(),
        };
        output.json(&summary)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would generate {} files in {}",
        plan.len(),
        target_dir.display()
    ))?;

    let mut conflicts = 0;
    for file in plan {
        if file.exists {
            conflicts += 1;
            output.item(&format!("{} (exists)", file.target_path.display()), false)?;
        } else {
            output.item(&file.target_path.display().to_string(), true)?;
        }
    }

    if conflicts > 0 && !request.overwrite() {
        output.warning(&format!(
            "{conflicts} file(s) already exist; generation would stop at the first one (use --force)"
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str) -> GenerateArgs {
        GenerateArgs {
            name: name.into(),
            stub_id: "default".into(),
            target: None,
            force: false,
            dry_run: false,
        }
    }

    #[test]
    fn request_carries_flags() {
        let mut args = args("User");
        args.target = Some(PathBuf::from("app/Models"));
        args.force = true;

        let request = build_request(&args).unwrap();
        assert_eq!(request.base_name(), "User");
        assert_eq!(request.explicit_target_dir(), Some(Path::new("app/Models")));
        assert!(request.overwrite());
    }

    #[test]
    fn blank_name_is_a_user_error() {
        let err = build_request(&args("   ")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn name_with_separator_is_rejected() {
        let err = build_request(&args("app/User")).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }

    #[test]
    fn summary_serialises_without_exists_for_real_runs() {
        let path = PathBuf::from("app/User.php");
        let summary = GenerateSummary {
            profile: "default",
            target_dir: Path::new("app"),
            dry_run: false,
            count: 1,
            files: vec![FileEntry {
                path: &path,
                exists: None,
            }],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["files"][0]["path"], "app/User.php");
        assert!(json["files"][0].get("exists").is_none());
    }
}
