use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use todolist::{Category, Config, Session};
use tracing::Level;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "TodoList - keep a categorized to-do list for the length of a session")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/todolist/todolist.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Do not ring the bell when a task is added
    #[arg(long)]
    no_bell: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Shell,

    /// List the categories a task can be filed under
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing on stderr so it stays out of the rendered list
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_color {
        config.color = false;
    }
    if cli.no_bell {
        config.bell = false;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                println!("Type 'help' for commands.");
            }

            let mut session = Session::new(config)?.with_prompt(interactive);
            session.run(stdin.lock(), &mut io::stdout().lock())?;
        }
        Commands::Categories => {
            for category in Category::ALL {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
