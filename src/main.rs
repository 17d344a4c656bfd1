//! bootmenu - Entry Point

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use bootmenu::config::{KeyBindings, PromptConfig, ResolvedConfig};
use bootmenu::model::{AlwaysValid, AppError, Entry, LabeledEntry, NonEmpty, Outcome};
use bootmenu::prompt::Prompter;
use bootmenu::source::{EventSource, ScriptedSource, TerminalSource};
use bootmenu::view::{ColorConfig, NullRenderer, PromptStyles, Renderer, TerminalRenderer};
use clap::{Parser, Subcommand};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

/// Exit status when the user backs out of the prompt.
const BACK_STATUS: u8 = 1;

/// Exit status when the user presses the interrupt key.
const EXIT_STATUS: u8 = 130;

/// bootmenu - text-mode installer prompts
#[derive(Parser, Debug)]
#[command(name = "bootmenu")]
#[command(version)]
#[command(about = "Run one installer-style prompt and print the result")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Entries shown per menu page
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Lines shown per text viewer page
    #[arg(long, global = true)]
    pub text_height: Option<usize>,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Replay space-separated key notation (e.g. "1 <Enter>") instead of
    /// reading the terminal
    #[arg(long, global = true)]
    pub keys: Option<String>,
}

/// The prompt to run.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read one line of text
    Input {
        /// Text shown above the input line
        title: String,

        /// Reject empty submissions
        #[arg(long)]
        non_empty: bool,
    },

    /// Page through a text file
    View {
        /// File to display
        file: PathBuf,
    },

    /// Pick one entry from a list
    Menu {
        /// Menu title
        title: String,

        /// Entry labels, in order
        #[arg(required = true)]
        labels: Vec<String>,

        /// Message shown between the title and the entries
        #[arg(long, default_value = "")]
        message: String,

        /// Index of the entry marked as default
        #[arg(long)]
        default: Option<usize>,
    },

    /// Ask a yes/no question
    Confirm {
        /// The question
        question: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let config = resolve_config(&args)?;

    bootmenu::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let prompt_config = PromptConfig::from_resolved(&config)?;

    // Read the file before touching the terminal so a bad path fails cleanly
    let text = match &args.command {
        Command::View { file } => Some(std::fs::read_to_string(file)?),
        _ => None,
    };

    let outcome = match &args.keys {
        Some(keys) => {
            let notation: Vec<&str> = keys.split_whitespace().collect();
            let source = ScriptedSource::from_notation(&notation)?;
            let mut prompter = Prompter::new(source, NullRenderer, prompt_config);
            run(&args.command, text.as_deref(), &mut prompter)?
        }
        None => {
            let bindings = KeyBindings::with_overrides(&config.keybindings)?;
            let styles =
                PromptStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
            run_in_terminal(&args.command, text.as_deref(), bindings, styles, prompt_config)?
        }
    };

    Ok(report(outcome))
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = bootmenu::config::load_config_with_precedence(args.config.clone())?;
    let merged = bootmenu::config::merge_config(config_file);
    let with_env = bootmenu::config::apply_env_overrides(merged);
    Ok(bootmenu::config::apply_cli_overrides(
        with_env,
        args.page_size,
        args.text_height,
    ))
}

fn exit_status<T>(outcome: &Outcome<T>) -> u8 {
    match outcome {
        Outcome::Value(_) => 0,
        Outcome::Back => BACK_STATUS,
        Outcome::Exit => EXIT_STATUS,
    }
}

/// Print a chosen value and map the outcome to an exit status.
fn report(outcome: Outcome<String>) -> ExitCode {
    let status = exit_status(&outcome);
    if let Outcome::Value(value) = outcome {
        println!("{value}");
    }
    ExitCode::from(status)
}

/// Run `command` once and render its result as text.
fn run<S: EventSource, R: Renderer>(
    command: &Command,
    text: Option<&str>,
    prompter: &mut Prompter<S, R>,
) -> Result<Outcome<String>, AppError> {
    let outcome = match command {
        Command::Input { title, non_empty } => {
            let accepted = if *non_empty {
                prompter.read_line(title, &NonEmpty)?
            } else {
                prompter.read_line(title, &AlwaysValid)?
            };
            accepted.map(|a| a.value)
        }
        Command::View { .. } => {
            let lines: Vec<&str> = text.unwrap_or_default().lines().collect();
            prompter.display_text(&lines)?
        }
        Command::Menu {
            title,
            labels,
            message,
            default,
        } => {
            let entries: Vec<LabeledEntry> = labels
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    LabeledEntry::new(label.as_str()).with_default(*default == Some(index))
                })
                .collect();
            prompter
                .select_entry(title, message, &entries)?
                .map(|entry| entry.label())
        }
        Command::Confirm { question } => prompter
            .confirm(question)?
            .map(|yes| if yes { "yes" } else { "no" }.to_string()),
    };
    Ok(outcome)
}

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(mut terminal: CrosstermTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

/// Run `command` on the live terminal, restoring it even when the prompt fails.
fn run_in_terminal(
    command: &Command,
    text: Option<&str>,
    bindings: KeyBindings,
    styles: PromptStyles,
    config: PromptConfig,
) -> Result<Outcome<String>, AppError> {
    let terminal = setup_terminal()?;
    info!(bindings = bindings.len(), "Terminal ready");

    let mut prompter = Prompter::new(
        TerminalSource::new(bindings),
        TerminalRenderer::with_styles(terminal, styles),
        config,
    );
    let result = run(command, text, &mut prompter);

    let (_, renderer) = prompter.into_parts();
    restore_terminal(renderer.into_terminal())?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn prompter(keys: &str) -> Prompter<ScriptedSource, NullRenderer> {
        let notation: Vec<&str> = keys.split_whitespace().collect();
        let source = ScriptedSource::from_notation(&notation).unwrap();
        Prompter::new(source, NullRenderer, PromptConfig::default())
    }

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["bootmenu", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["bootmenu", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_is_required() {
        let result = Args::try_parse_from(["bootmenu"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_confirm_defaults() {
        let args = Args::parse_from(["bootmenu", "confirm", "Proceed?"]);
        assert_eq!(
            args.command,
            Command::Confirm {
                question: "Proceed?".to_string()
            }
        );
        assert_eq!(args.config, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.text_height, None);
        assert!(!args.no_color);
        assert_eq!(args.keys, None);
    }

    #[test]
    fn test_menu_arguments() {
        let args = Args::parse_from([
            "bootmenu", "menu", "Disk", "sda", "sdb", "--default", "1", "--message", "Pick one",
        ]);
        assert_eq!(
            args.command,
            Command::Menu {
                title: "Disk".to_string(),
                labels: vec!["sda".to_string(), "sdb".to_string()],
                message: "Pick one".to_string(),
                default: Some(1),
            }
        );
    }

    #[test]
    fn test_menu_requires_labels() {
        let result = Args::try_parse_from(["bootmenu", "menu", "Disk"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from([
            "bootmenu",
            "view",
            "notes.txt",
            "--page-size",
            "4",
            "--text-height",
            "12",
            "--config",
            "/custom/config.toml",
            "--no-color",
        ]);
        assert_eq!(
            args.command,
            Command::View {
                file: PathBuf::from("notes.txt")
            }
        );
        assert_eq!(args.page_size, Some(4));
        assert_eq!(args.text_height, Some(12));
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(args.no_color);
    }

    #[test]
    fn test_page_size_rejects_negative() {
        let result = Args::try_parse_from(["bootmenu", "--page-size", "-1", "confirm", "q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides_flow_through_precedence_chain() {
        use bootmenu::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            menu_page_size: Some(6),
            text_page_height: Some(30),
            ..ConfigFile::default()
        };
        let merged = merge_config(Some(config_file));
        assert_eq!(merged.menu_page_size, 6);

        let with_cli = apply_cli_overrides(merged, Some(3), None);
        assert_eq!(with_cli.menu_page_size, 3, "CLI should override the file");
        assert_eq!(with_cli.text_page_height, 30);
    }

    #[test]
    fn test_run_input() {
        let command = Command::Input {
            title: "Hostname".to_string(),
            non_empty: true,
        };
        let outcome = run(&command, None, &mut prompter("<Enter> b o x <Enter>")).unwrap();
        assert_eq!(outcome, Outcome::Value("box".to_string()));
    }

    #[test]
    fn test_run_view() {
        let command = Command::View {
            file: PathBuf::from("unused"),
        };
        let outcome = run(&command, Some("one\ntwo\n"), &mut prompter("<Escape>")).unwrap();
        assert_eq!(
            outcome,
            Outcome::Value("one\ntwo\n\n(End of message)".to_string())
        );
    }

    #[test]
    fn test_run_menu_prints_label() {
        let command = Command::Menu {
            title: "Disk".to_string(),
            labels: vec!["sda".to_string(), "sdb".to_string()],
            message: String::new(),
            default: Some(0),
        };
        let outcome = run(&command, None, &mut prompter("1 <Enter>")).unwrap();
        assert_eq!(outcome, Outcome::Value("sdb".to_string()));
    }

    #[test]
    fn test_run_confirm_signals() {
        let command = Command::Confirm {
            question: "Format?".to_string(),
        };
        assert_eq!(
            run(&command, None, &mut prompter("0 <Enter>")).unwrap(),
            Outcome::Value("yes".to_string())
        );
        assert_eq!(
            run(&command, None, &mut prompter("<Escape>")).unwrap(),
            Outcome::Back
        );
        assert_eq!(
            run(&command, None, &mut prompter("<C-d>")).unwrap(),
            Outcome::Exit
        );
    }

    #[test]
    fn test_exhausted_keys_is_an_error() {
        let command = Command::Confirm {
            question: "Format?".to_string(),
        };
        let err = run(&command, None, &mut prompter("0")).unwrap_err();
        assert!(matches!(err, AppError::Prompt(_)));
    }

    #[test]
    fn test_exit_status_per_outcome() {
        assert_eq!(exit_status(&Outcome::Value("x")), 0);
        assert_eq!(exit_status::<&str>(&Outcome::Back), 1);
        assert_eq!(exit_status::<&str>(&Outcome::Exit), 130);
    }
}
