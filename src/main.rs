use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw(RawOutputMode),
}

#[derive(Debug, Clone, Copy)]
enum RawOutputMode {
    InteractivePassthrough,
    Text,
}

mod commands;
mod output;
mod tty;

use commands::{edit, init, list, open, search};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "pm")]
#[command(version = VERSION)]
#[command(about = "Project manual: manage and browse runbooks from .pm/")]
#[command(
    long_about = "pm manages project-specific runbooks and manuals stored in a .pm/ directory.\nRun without a subcommand to summarize the manual, or to create one."
)]
struct Cli {
    /// Print results as a JSON envelope
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a .pm/ directory from a preset or JSON template file
    Init(init::InitArgs),
    /// List available sections
    #[command(visible_alias = "ls")]
    List(list::ListArgs),
    /// Display a section
    Open(open::OpenArgs),
    /// Open a section in $EDITOR
    Edit(edit::EditArgs),
    /// Search for a keyword across all sections
    Search(search::SearchArgs),
}

fn response_mode(cli: &Cli) -> ResponseMode {
    match &cli.command {
        Some(Commands::Edit(_)) => ResponseMode::Raw(RawOutputMode::InteractivePassthrough),
        _ if cli.json => ResponseMode::Json,
        _ => ResponseMode::Raw(RawOutputMode::Text),
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mode = response_mode(&cli);
    let json = cli.json;

    let global = GlobalArgs {
        presets: pm::PresetRegistry::builtin(),
    };

    let exit_code = match mode {
        ResponseMode::Json => run_json_mode(cli.command, &global),
        ResponseMode::Raw(RawOutputMode::Text) => run_text_mode(cli.command, &global),
        ResponseMode::Raw(RawOutputMode::InteractivePassthrough) => {
            if !tty::require_tty_for_interactive() {
                let err = pm::Error::validation_invalid_argument(
                    "tty",
                    "This command requires an interactive TTY",
                    None,
                    None,
                );
                print_error(&err, json);
                return std::process::ExitCode::from(exit_code_to_u8(2));
            }
            tty::status("Waiting for the editor to exit...");

            if json {
                run_json_mode(cli.command, &global)
            } else {
                run_text_mode(cli.command, &global)
            }
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn run_json_mode(command: Option<Commands>, global: &GlobalArgs) -> i32 {
    let (json_result, exit_code) = commands::run_json(command, global);
    output::print_json_result(json_result);
    exit_code
}

fn run_text_mode(command: Option<Commands>, global: &GlobalArgs) -> i32 {
    let (text_result, exit_code) = commands::run_text(command, global);
    match text_result {
        Ok(content) => output::print_text(&content),
        Err(err) => output::print_text_error(&err),
    }
    exit_code
}

fn print_error(err: &pm::Error, json: bool) {
    if json {
        output::print_json_result(Err(err.clone()));
    } else {
        output::print_text_error(err);
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
