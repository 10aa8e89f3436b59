use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "etude-calendar-cli", version, about = "Etude calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the visible day range for a date and view mode
    Days(commands::days::DaysArgs),
    /// Generate deterministic sample card data
    Sample(commands::sample::SampleArgs),
    /// Allocate lanes for cards from a JSON file and print assignments
    Allocate(commands::allocate::AllocateArgs),
    /// Render the allocated calendar grid as text
    View(commands::view::ViewArgs),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Days(args) => commands::days::run(args),
        Commands::Sample(args) => commands::sample::run(args),
        Commands::Allocate(args) => commands::allocate::run(args),
        Commands::View(args) => commands::view::run(args),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "etude-calendar-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
