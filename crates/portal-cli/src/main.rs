//! Upload portal CLI — terminal form for the upload workflow.
//!
//! Configure storage and notification through the environment (see
//! `portal_core::config`), then either submit in one shot or drive the form
//! interactively.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use portal_cli::files::load_candidate;
use portal_cli::init_tracing;
use portal_cli::prefs::Prefs;
use portal_cli::submit::{SubmissionForm, SubmissionOutcome, SubmissionService};
use portal_cli::view::{ConsoleView, View};
use portal_core::{AddOutcome, Config, Notice, SelectionStore};
use portal_notify::{EmailJsNotifier, Notifier};

#[derive(Parser)]
#[command(name = "portal", about = "Upload portal CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate files, upload them, and send the notification
    Submit {
        /// Applicant name (required)
        #[arg(long)]
        name: String,
        /// Applicant email (required when notifications are configured)
        #[arg(long, default_value = "")]
        email: String,
        /// Optional free-text message for the notification
        #[arg(long, default_value = "")]
        message: String,
        /// Files to upload
        files: Vec<PathBuf>,
    },
    /// Drive the form interactively (add/remove/list/submit)
    Interactive,
    /// Show or change the persisted dark-mode preference
    Theme {
        #[command(subcommand)]
        sub: ThemeCommands,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Flip between dark and light mode
    Toggle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            name,
            email,
            message,
            files,
        } => {
            let service = build_service().await?;
            let mut view = ConsoleView::new();
            let mut store = SelectionStore::new();

            add_files(&mut store, &mut view, &files);
            view.render_list(&store.rows());

            let form = SubmissionForm {
                applicant_name: name,
                applicant_email: email,
                message,
            };
            match service.submit(&form, &mut store, &mut view).await {
                SubmissionOutcome::Completed { files, notified } => {
                    tracing::info!(files, notified, "Submission completed");
                    Ok(())
                }
                SubmissionOutcome::Rejected => anyhow::bail!("Submission rejected"),
                SubmissionOutcome::UploadFailed => anyhow::bail!("Upload failed"),
            }
        }
        Commands::Interactive => run_interactive().await,
        Commands::Theme { sub } => {
            let mut prefs = Prefs::load();
            match sub {
                ThemeCommands::Show => {}
                ThemeCommands::Toggle => {
                    prefs.dark_mode = !prefs.dark_mode;
                    prefs.save().context("Failed to save preferences")?;
                }
            }
            println!(
                "Theme: {}",
                if prefs.dark_mode { "dark" } else { "light" }
            );
            Ok(())
        }
    }
}

/// Build the orchestrator from environment configuration.
async fn build_service() -> anyhow::Result<SubmissionService> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let storage = portal_storage::create_storage(&config)
        .await
        .context("Failed to create storage backend")?;

    let notifier: Option<Arc<dyn Notifier>> = match &config.emailjs {
        Some(emailjs) => Some(Arc::new(
            EmailJsNotifier::new(emailjs).context("Failed to create notifier")?,
        )),
        None => {
            tracing::debug!("EmailJS credentials not configured, skipping email notifications");
            None
        }
    };

    Ok(SubmissionService::new(storage, notifier, &config))
}

/// Validate and add a batch of picked files. Per-file failures never block
/// siblings; an empty batch is one error notice.
fn add_files(store: &mut SelectionStore, view: &mut dyn View, paths: &[PathBuf]) {
    if paths.is_empty() {
        view.show_notice(&Notice::error("Please select at least one file."));
        return;
    }

    for path in paths {
        let candidate = match load_candidate(path) {
            Ok(candidate) => candidate,
            Err(e) => {
                view.show_notice(&Notice::error(format!(
                    "File \"{}\": {}",
                    path.display(),
                    e
                )));
                continue;
            }
        };

        match store.add(candidate) {
            AddOutcome::Added { name, .. } => {
                view.show_notice(&Notice::success(format!(
                    "Added \"{}\" to upload list.",
                    name
                )));
            }
            AddOutcome::Rejected { name, reason } => {
                view.show_notice(&Notice::error(format!("File \"{}\": {}", name, reason)));
            }
            AddOutcome::Duplicate { name } => {
                view.show_notice(&Notice::error(format!(
                    "File \"{}\" is already selected.",
                    name
                )));
            }
        }
    }
}

/// Interactive form loop.
async fn run_interactive() -> anyhow::Result<()> {
    let service = build_service().await?;
    let mut view = ConsoleView::new();
    let mut store = SelectionStore::new();
    let mut form = SubmissionForm::default();
    let mut prefs = Prefs::load();

    println!("Upload portal ({} mode). Type 'help' for commands.", theme_name(&prefs));

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "name" => form.applicant_name = rest.to_string(),
            "email" => form.applicant_email = rest.to_string(),
            "message" => form.message = rest.to_string(),
            "add" => {
                let paths: Vec<PathBuf> = rest.split_whitespace().map(PathBuf::from).collect();
                add_files(&mut store, &mut view, &paths);
                view.render_list(&store.rows());
            }
            "remove" => match rest.parse::<u64>() {
                Ok(id) => {
                    if let Some(removed) = store.remove(id) {
                        view.show_notice(&Notice::info(format!(
                            "Removed \"{}\" from upload list.",
                            removed.name
                        )));
                    }
                    view.render_list(&store.rows());
                }
                Err(_) => view.show_notice(&Notice::error("Usage: remove <id>")),
            },
            "list" => view.render_list(&store.rows()),
            "submit" => {
                if let SubmissionOutcome::Completed { .. } =
                    service.submit(&form, &mut store, &mut view).await
                {
                    form = SubmissionForm::default();
                }
            }
            "reset" => {
                store.clear();
                form = SubmissionForm::default();
                view.render_list(&store.rows());
                view.show_notice(&Notice::info("Form reset."));
            }
            "theme" => {
                prefs.dark_mode = !prefs.dark_mode;
                if let Err(e) = prefs.save() {
                    tracing::warn!(error = %e, "Failed to persist theme preference");
                }
                view.show_notice(&Notice::info(format!("Theme: {}", theme_name(&prefs))));
            }
            "quit" | "exit" => break,
            other => {
                view.show_notice(&Notice::error(format!("Unknown command: {}", other)));
            }
        }
    }

    Ok(())
}

fn theme_name(prefs: &Prefs) -> &'static str {
    if prefs.dark_mode {
        "dark"
    } else {
        "light"
    }
}

fn print_help() {
    println!("Commands:");
    println!("  name <text>      set the applicant name (required)");
    println!("  email <text>     set the applicant email");
    println!("  message <text>   set the optional message");
    println!("  add <paths...>   validate and add files to the list");
    println!("  remove <id>      remove a file by its list id");
    println!("  list             show the current file list");
    println!("  submit           upload the list and send the notification");
    println!("  reset            clear the form and the file list");
    println!("  theme            toggle dark mode");
    println!("  quit             exit");
}
