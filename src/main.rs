use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use siteproc_patcher::recipe::{Recipe, RecipeReport};
use siteproc_patcher::recipes;
use siteproc_patcher::safety::RootGuard;
use siteproc_patcher::StepOutcome;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "siteproc-patcher")]
#[command(about = "One-shot guarded text patchers for the siteproc web UI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap the project detail page in AppLayout and add a loading spinner
    FixDetail {
        #[command(flatten)]
        opts: RunOpts,
    },

    /// Replace the landing page dashboard mockup with the live-style markup
    UpdateDashboard {
        #[command(flatten)]
        opts: RunOpts,
    },

    /// Run every patcher
    All {
        #[command(flatten)]
        opts: RunOpts,
    },
}

#[derive(Args)]
struct RunOpts {
    /// Path to the project root (defaults to SITEPROC_ROOT, then cwd)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Dry run - report what would change without writing files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show unified diff of the rewrite
    #[arg(short, long)]
    diff: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::FixDetail { opts } => run(vec![recipes::fix_detail()], opts),
        Commands::UpdateDashboard { opts } => run(vec![recipes::update_dashboard()], opts),
        Commands::All { opts } => run(recipes::all(), opts),
    }
}

/// Resolve the project root.
///
/// Priority order:
/// 1. Explicit --root flag
/// 2. SITEPROC_ROOT environment variable
/// 3. Current directory
fn resolve_root(cli_root: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = cli_root {
        return Ok(path.canonicalize()?);
    }

    if let Ok(env_path) = env::var("SITEPROC_ROOT") {
        let path = PathBuf::from(&env_path);
        if path.exists() {
            return Ok(path.canonicalize()?);
        }
        eprintln!(
            "{}",
            format!(
                "Warning: SITEPROC_ROOT is set but path doesn't exist: {}",
                env_path
            )
            .yellow()
        );
    }

    Ok(env::current_dir()?)
}

/// Helper: Show unified diff between original and patched content
fn display_diff(file: &Path, original: &str, patched: &str) {
    println!(
        "\n{}",
        format!("--- {} (original)", file.display()).dimmed()
    );
    println!("{}", format!("+++ {} (patched)", file.display()).dimmed());

    let diff = TextDiff::from_lines(original, patched);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
}

fn report_steps(report: &RecipeReport) -> (usize, usize, usize) {
    let (mut applied, mut already, mut missed) = (0, 0, 0);

    for step in &report.steps {
        match &step.outcome {
            StepOutcome::Applied { .. } => {
                println!("{} {}", "✓".green(), step.label);
                applied += 1;
            }
            StepOutcome::AlreadyApplied => {
                println!("{} {}: already applied", "⊙".yellow(), step.label);
                already += 1;
            }
            StepOutcome::NotFound { hint } => {
                println!("{} {}: pattern not found", "⚠".yellow(), step.label);
                if let Some(near) = hint {
                    println!("  nearest candidate at {}", format!("{}", near).dimmed());
                }
                missed += 1;
            }
        }
    }

    (applied, already, missed)
}

fn run(to_run: Vec<Recipe>, opts: RunOpts) -> Result<()> {
    let root = resolve_root(opts.root)?;
    let guard = RootGuard::new(&root)?;

    println!("Root: {}", guard.root().display());
    if opts.dry_run {
        println!("{}", "[DRY RUN - no files will be written]".cyan());
    }
    println!();

    let mut total_applied = 0;
    let mut total_already = 0;
    let mut total_missed = 0;
    let mut total_failed = 0;

    for recipe in to_run {
        println!("Patching {} ({})...", recipe.name.bold(), recipe.file);

        match recipe.apply(&guard, opts.dry_run) {
            Ok(report) => {
                let (applied, already, missed) = report_steps(&report);
                total_applied += applied;
                total_already += already;
                total_missed += missed;

                if report.written && !report.changed {
                    println!("  {}", "no changes, rewrote file as-is".dimmed());
                }

                if opts.diff && report.changed {
                    display_diff(&report.file, &report.original, &report.patched);
                }
            }
            Err(e) => {
                // Recipes are independent; keep going so the other file
                // still gets patched
                eprintln!("{} {}: {}", "✗".red(), recipe.name, e);
                total_failed += 1;
            }
        }

        println!();
    }

    println!("{}", "Summary:".bold());
    println!("  {} applied", format!("{}", total_applied).green());
    println!(
        "  {} already applied",
        format!("{}", total_already).yellow()
    );
    println!("  {} not found", format!("{}", total_missed).yellow());
    println!("  {} failed", format!("{}", total_failed).red());

    if total_failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
