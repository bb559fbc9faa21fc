use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use examtidy::cli::batch::BatchMode;
use examtidy::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "examtidy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Clean, normalize and extract ExamTopics markdown question dumps", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean noise lines, renumber and sort question sections
    Clean {
        /// Input markdown file
        input: PathBuf,

        /// Output file (default: <stem>-cleaned.md next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also remove 'Topic #: <n>' restatement lines
        #[arg(long)]
        remove_topic: bool,

        /// TOML profile with extra noise rules
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Print the report in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Extract a questions-and-options study sheet
    Exam {
        /// Input markdown file
        input: PathBuf,

        /// Output file (default: <stem>-exam.md next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract questions with their correct answers
    Answers {
        /// Input markdown file
        input: PathBuf,

        /// Output file (default: <stem>-answers.md next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Strip timestamp/view-link footer blocks from a whole file
    Scrub {
        /// Input markdown file
        input: PathBuf,

        /// Output file (default: rewrite the input in place)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Process every markdown file under a directory
    Batch {
        /// Directory to scan for *.md files
        dir: PathBuf,

        /// Directory for output files (default: next to each input)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Which transform to run on each file
        #[arg(short, long, value_enum, default_value = "clean")]
        mode: BatchMode,

        /// Also remove 'Topic #: <n>' restatement lines (clean mode)
        #[arg(long)]
        remove_topic: bool,

        /// TOML profile with extra noise rules (clean mode)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Clean {
            input,
            output,
            remove_topic,
            profile,
            json,
        } => {
            examtidy::cli::clean::run(
                &input,
                output.as_deref(),
                remove_topic,
                profile.as_deref(),
                json,
            )?;
        }

        Commands::Exam { input, output } => {
            examtidy::cli::exam::run(&input, output.as_deref())?;
        }

        Commands::Answers { input, output } => {
            examtidy::cli::answers::run(&input, output.as_deref())?;
        }

        Commands::Scrub { input, output } => {
            examtidy::cli::scrub::run(&input, output.as_deref())?;
        }

        Commands::Batch {
            dir,
            output_dir,
            mode,
            remove_topic,
            profile,
        } => {
            examtidy::cli::batch::run(
                &dir,
                output_dir.as_deref(),
                mode,
                remove_topic,
                profile.as_deref(),
            )?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "examtidy", &mut io::stdout());
        }
    }

    Ok(())
}
