//! CLI entry point for mailstamp.

use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};

use mailstamp::config::{self, Config};
use mailstamp::directory::ProjectDirectory;
use mailstamp::host::eml::EmlHost;
use mailstamp::selection::SelectionState;
use mailstamp::suggest;
use mailstamp::template;
use mailstamp::tui::app::App;

#[derive(Parser)]
#[command(name = "mailstamp", version)]
#[command(about = "Stamp project email templates, categories and recipients onto draft messages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Project directory JSON file (overrides the config file setting)
    #[arg(short, long, global = true, value_name = "FILE", env = "MAILSTAMP_DIRECTORY")]
    directory: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a draft in the compose-mode TUI
    Compose {
        /// Draft .eml file to stamp
        draft: PathBuf,
    },
    /// Open a received message in the read-mode TUI
    Read {
        /// Message .eml file to classify
        message: PathBuf,
    },
    /// Print the suggested project for a message's subject
    Suggest {
        message: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print the subject and header a selection would generate
    Preview {
        /// Project code, e.g. PROJECT-001
        #[arg(short, long)]
        project: String,
        /// Email type code, e.g. UPDATE
        #[arg(short = 't', long = "type")]
        email_type: String,
        /// Free-text subject suffix
        #[arg(long, default_value = "")]
        custom: String,
        #[arg(long)]
        json: bool,
    },
    /// List the loaded projects and email types
    Directory {
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::load_config(cli.config.as_deref());

    // Configure logging: stderr + optional log file
    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    let directory_path = cli
        .directory
        .clone()
        .or_else(|| config.general.directory_path.clone());

    match cli.command {
        Commands::Compose { draft } => cmd_compose(&draft, directory_path.as_deref(), config),
        Commands::Read { message } => cmd_read(&message, directory_path.as_deref(), config),
        Commands::Suggest { message, json } => {
            cmd_suggest(&message, directory_path.as_deref(), &config, json)
        }
        Commands::Preview {
            project,
            email_type,
            custom,
            json,
        } => cmd_preview(
            &project,
            &email_type,
            &custom,
            directory_path.as_deref(),
            &config,
            json,
        ),
        Commands::Directory { json } => cmd_directory(directory_path.as_deref(), json),
        Commands::Completions { shell } => cmd_completions(shell),
        Commands::Manpage => cmd_manpage(),
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // Try to set up file logging
    let log_dir = config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "mailstamp.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Load the project directory, or fall back to an empty one so the TUI
/// can surface the failure instead of crashing.
fn load_directory_degraded(path: Option<&Path>) -> (ProjectDirectory, Option<String>) {
    match path {
        Some(p) => match ProjectDirectory::load(p) {
            Ok(dir) => (dir, None),
            Err(e) => {
                tracing::error!(error = %e, "Project directory unavailable");
                (ProjectDirectory::default(), Some(e.to_string()))
            }
        },
        None => (
            ProjectDirectory::default(),
            Some("No project directory configured (use --directory)".to_string()),
        ),
    }
}

/// Load the project directory or fail (non-TUI commands).
fn load_directory_strict(path: Option<&Path>) -> anyhow::Result<ProjectDirectory> {
    let path = path.ok_or_else(|| {
        anyhow::anyhow!("No project directory configured (use --directory or the config file)")
    })?;
    Ok(ProjectDirectory::load(path)?)
}

fn cmd_compose(draft: &Path, directory_path: Option<&Path>, config: Config) -> anyhow::Result<()> {
    let registry_path = config::registry_file_path(&config);
    let host = EmlHost::open(draft, &registry_path)?;

    let (directory, load_error) = load_directory_degraded(directory_path);
    let mut app = App::new_compose(config, directory, Box::new(host));
    if let Some(msg) = load_error {
        app.set_status(
            &format!("Error loading configuration: {msg}"),
            mailstamp::tui::app::StatusKind::Error,
        );
    }
    mailstamp::tui::run_tui(app)
}

fn cmd_read(message: &Path, directory_path: Option<&Path>, config: Config) -> anyhow::Result<()> {
    let registry_path = config::registry_file_path(&config);
    let host = EmlHost::open(message, &registry_path)?;

    let (directory, load_error) = load_directory_degraded(directory_path);
    let mut app = App::new_read(config, directory, Box::new(host));
    if let Some(msg) = load_error {
        app.set_status(
            &format!("Error loading configuration: {msg}"),
            mailstamp::tui::app::StatusKind::Error,
        );
    }
    mailstamp::tui::run_tui(app)
}

/// Print the suggestion for a message, if any.
fn cmd_suggest(
    message: &Path,
    directory_path: Option<&Path>,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    use mailstamp::host::MailHost;

    let directory = load_directory_strict(directory_path)?;
    let registry_path = config::registry_file_path(config);
    let host = EmlHost::open(message, &registry_path)?;
    let subject = host.subject().map_err(|e| anyhow::anyhow!("{e}"))?;

    let suggestion = suggest::suggest_project(&subject, &directory);

    if json {
        let output = match &suggestion {
            Some(s) => serde_json::json!({
                "subject": subject,
                "project": {
                    "code": s.project.code,
                    "displayName": s.project.display_name,
                    "category": s.project.category,
                },
                "reason": s.reason,
            }),
            None => serde_json::json!({
                "subject": subject,
                "project": null,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match suggestion {
        Some(s) => {
            println!();
            println!("  {:<12} {}", "Subject", subject);
            println!("  {:<12} {} ({})", "Suggested", s.project.display_name, s.project.code);
            println!("  {:<12} {}", "Reason", s.reason);
            println!();
        }
        None => {
            println!();
            println!("  No project suggestion for: {subject}");
            println!();
        }
    }
    Ok(())
}

/// Print the subject and header block a selection would generate.
fn cmd_preview(
    project_code: &str,
    email_type_code: &str,
    custom: &str,
    directory_path: Option<&Path>,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    let directory = load_directory_strict(directory_path)?;

    let selection = SelectionState {
        project_code: project_code.to_string(),
        email_type_code: email_type_code.to_string(),
        custom_subject: custom.to_string(),
        ..Default::default()
    };

    let today = Local::now().date_naive();
    let subject = template::generate_subject(&selection, &directory)?;
    let header = template::generate_header(&selection, &directory, today, &config.header)?;
    let categories = selection.categories_to_apply(&directory);

    if json {
        let output = serde_json::json!({
            "subject": subject,
            "header": header,
            "categories": categories,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!();
        println!("  Subject: {subject}");
        println!();
        for line in header.lines() {
            println!("  {line}");
        }
        println!();
        println!("  Categories: {}", categories.join(", "));
        println!();
    }
    Ok(())
}

/// List projects and email types in the loaded directory.
fn cmd_directory(directory_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let directory = load_directory_strict(directory_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&directory)?);
        return Ok(());
    }

    println!();
    println!("  {} project(s):", directory.projects.len());
    println!();
    println!("  {:<14} {:<28} {:<24} {}", "Code", "Name", "Category", "Manager");
    println!("  {}", "-".repeat(80));
    for project in &directory.projects {
        let manager = project
            .project_manager
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "—".to_string());
        println!(
            "  {:<14} {:<28} {:<24} {}",
            project.code, project.display_name, project.category, manager
        );
    }

    println!();
    println!("  {} email type(s):", directory.email_types.len());
    println!();
    println!("  {:<14} {:<28} {:<24} {}", "Code", "Name", "Category", "Priority");
    println!("  {}", "-".repeat(80));
    for email_type in &directory.email_types {
        println!(
            "  {:<14} {:<28} {:<24} {}",
            email_type.code, email_type.name, email_type.category, email_type.priority
        );
    }
    println!();

    Ok(())
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "mailstamp", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}
