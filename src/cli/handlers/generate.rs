//! Fixture generation pipeline.
//!
//! Linear six-stage run: resolve the description file, derive the hostname,
//! register the test with the destination's build tool, render the browser
//! test, install it into the destination tree, then mirror the optional
//! page assets. Any failure before the asset stage aborts the run; a single
//! asset entry failing is logged and its siblings still get copied.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::cli::output::{OutputFormat, Report};
use crate::domain::Hostname;
use crate::infra::runner::{CommandRunner, ProcessRunner, resolve_program};
use crate::infra::template;
use crate::infra::{copy_file, copy_tree, find_description_file, write_atomic};

/// Destination subtree receiving the generated browser test.
pub const TEST_SUBDIR: &str =
    "browser/extensions/formautofill/test/browser/heuristics/third_party";

/// Destination subtree receiving downloaded page fixtures.
pub const FIXTURE_SUBDIR: &str = "browser/extensions/formautofill/test/fixtures/third_party";

/// Source subdirectory holding the expected-result description file.
const DESCRIPTION_SUBDIR: &str = "test";

/// Optional source subdirectory holding downloaded page assets.
const PAGE_SUBDIR: &str = "page";

/// Runs the full generation pipeline and returns the run report.
///
/// `progress` enables stage messages on stdout, `verbose` additionally
/// prints one line per copied page entry. Asset copy failures go to stderr
/// regardless.
///
/// # Errors
///
/// Returns an error on the description-file count check, the registration
/// command, template rendering, the local write, and the test-file install.
pub fn run_generate(
    source_dir: &Path,
    dest_dir: &Path,
    mach: &str,
    runner: &dyn CommandRunner,
    progress: bool,
    verbose: bool,
) -> Result<Report> {
    let description = find_description_file(&source_dir.join(DESCRIPTION_SUBDIR))?;
    let hostname = Hostname::from_description_path(&description)?;
    let test_file_name = hostname.test_file_name();

    // Register with the build tool before installing any files.
    let test_rel_path = format!("{TEST_SUBDIR}/{test_file_name}");
    let program = resolve_program(dest_dir, mach);
    runner
        .run(&program, &["addtest", &test_rel_path], dest_dir)
        .with_context(|| format!("failed to register test {test_rel_path}"))?;
    if progress {
        println!("Registered test: {mach} addtest {test_rel_path}");
    }

    let expected = fs::read_to_string(&description)
        .with_context(|| format!("failed to read {}", description.display()))?;
    let rendered = template::render(&hostname, &expected)?;

    let test_file = source_dir.join(&test_file_name);
    write_atomic(&test_file, &rendered)
        .with_context(|| format!("failed to write {}", test_file.display()))?;
    if progress {
        println!("Output written to {}", test_file.display());
    }

    let test_destination = dest_dir.join(TEST_SUBDIR).join(&test_file_name);
    copy_file(&test_file, &test_destination)
        .with_context(|| format!("failed to install test at {}", test_destination.display()))?;
    if progress {
        println!("Output copied to {}", test_destination.display());
    }

    let mut report = Report {
        hostname: hostname.as_str().to_string(),
        test_file,
        test_destination,
        fixture_dir: None,
        assets_copied: 0,
        assets_failed: 0,
    };

    let page_dir = source_dir.join(PAGE_SUBDIR);
    if page_dir.exists() {
        let fixture_dir = dest_dir.join(FIXTURE_SUBDIR).join(hostname.as_str());
        fs::create_dir_all(&fixture_dir)
            .with_context(|| format!("failed to create {}", fixture_dir.display()))?;
        copy_page_assets(&page_dir, &fixture_dir, verbose, &mut report)?;
        report.fixture_dir = Some(fixture_dir);
    } else if progress {
        println!(
            "Page directory {} does not exist, skipping fixture assets",
            page_dir.display()
        );
    }

    Ok(report)
}

/// Copies each top-level page entry into the fixture directory.
///
/// Directories are copied recursively, files directly, both overwriting
/// existing contents. A failing entry is logged on stderr and skipped so
/// the remaining entries still get copied.
fn copy_page_assets(
    page_dir: &Path,
    fixture_dir: &Path,
    verbose: bool,
    report: &mut Report,
) -> Result<()> {
    let entries = fs::read_dir(page_dir)
        .with_context(|| format!("failed to read {}", page_dir.display()))?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("error reading entry in {}: {err}", page_dir.display());
                report.assets_failed += 1;
                continue;
            }
        };

        let src = entry.path();
        let target = fixture_dir.join(entry.file_name());
        let result = if src.is_dir() {
            copy_tree(&src, &target)
        } else {
            copy_file(&src, &target)
        };

        match result {
            Ok(()) => {
                report.assets_copied += 1;
                if verbose {
                    println!("Copied {} to {}", src.display(), target.display());
                }
            }
            Err(err) => {
                report.assets_failed += 1;
                eprintln!("error copying {}: {err}", src.display());
            }
        }
    }

    Ok(())
}

/// Handles the generate command end to end with the real process runner.
pub fn handle_generate(
    dest_dir: &Path,
    source_dir: &Path,
    mach: &str,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    if !dest_dir.is_dir() {
        bail!(
            "destination directory does not exist: {}",
            dest_dir.display()
        );
    }

    let progress = matches!(format, OutputFormat::Human);
    let report = run_generate(source_dir, dest_dir, mach, &ProcessRunner, progress, verbose)?;

    match format {
        OutputFormat::Human => {
            if let Some(fixture_dir) = &report.fixture_dir {
                println!(
                    "Copied {} page entries to {} ({} failed)",
                    report.assets_copied,
                    fixture_dir.display(),
                    report.assets_failed
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
