use anyhow::Result;
use clap::{Parser, Subcommand};

use splitbook::cli::Shell;
use splitbook::config::{Settings, SplitbookPaths};
use splitbook::crypto::password::default_params;
use splitbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "splitbook",
    version,
    about = "Split shared expenses with friends",
    long_about = "Splitbook keeps track of shared expenses within a group of \
                  friends: who paid, who took part, and who owes whom. \
                  Run without arguments to start an interactive session."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Shell,

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SplitbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let storage = Storage::open(&paths, &settings)?;
            let stdin = std::io::stdin();
            Shell::new(&storage, &paths, &settings).run(stdin.lock())?;
        }
        Commands::Config => {
            println!("Splitbook Configuration");
            println!("=======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Date format:      {}", settings.date_format);
            println!("  Audit log:        {}", if settings.audit_enabled { "on" } else { "off" });
            println!("  Demo data:        {}", if settings.seed_demo_data { "on" } else { "off" });

            let params = default_params();
            println!(
                "  Password hashing: Argon2id (m={} KiB, t={}, p={})",
                params.m_cost(),
                params.t_cost(),
                params.p_cost()
            );
        }
        Commands::Audit { limit } => {
            let logger = splitbook::audit::AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
