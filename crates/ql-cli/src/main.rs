//! CLI frontend for the Questling household-chore tracker.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ql",
    about = "Questling — turn chores into quests",
    version,
    propagate_version = true
)]
struct Cli {
    /// Path to the save file
    #[arg(short, long, default_value = "questling.json", global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a fresh save file for a named hero
    Init {
        /// Name of the hero
        name: String,
    },

    /// Show the hero panel: level, XP bar, streak, and a greeting
    Status,

    /// List quests on the board
    Quests {
        /// Also show completed quests
        #[arg(short, long)]
        all: bool,
    },

    /// Post a new quest (parent)
    Add {
        /// Quest title
        title: String,

        /// Quest description
        #[arg(short, long)]
        desc: Option<String>,

        /// XP reward (default: 25)
        #[arg(short, long)]
        xp: Option<u32>,

        /// Category: care, study, clean, magic (default: magic)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Report a quest finished (child)
    Complete {
        /// Quest title or id prefix
        quest: String,
    },

    /// Approve a reported quest and credit its XP (parent)
    Approve {
        /// Quest title or id prefix
        quest: String,
    },

    /// Remove a quest from the board (parent)
    Delete {
        /// Quest title or id prefix
        quest: String,
    },

    /// Send a blessing: a small XP boost with a flashy marker (parent)
    Bless {
        /// Who sends it: mom or dad
        guardian: String,
    },

    /// Show the reward catalog
    Rewards,

    /// Spend XP on a reward
    Redeem {
        /// Reward name or catalog id
        reward: String,
    },

    /// Start an interactive session
    Play,
}

fn main() {
    let cli = Cli::parse();
    let file = cli.file;

    let result = match cli.command {
        Commands::Init { name } => commands::init::run(&file, &name),
        Commands::Status => commands::status::run(&file),
        Commands::Quests { all } => commands::quests::run(&file, all),
        Commands::Add {
            title,
            desc,
            xp,
            category,
        } => commands::add::run(&file, &title, desc.as_deref(), xp, category.as_deref()),
        Commands::Complete { quest } => commands::complete::run(&file, &quest),
        Commands::Approve { quest } => commands::approve::run(&file, &quest),
        Commands::Delete { quest } => commands::delete::run(&file, &quest),
        Commands::Bless { guardian } => commands::bless::run(&file, &guardian),
        Commands::Rewards => commands::rewards::run(&file),
        Commands::Redeem { reward } => commands::redeem::run(&file, &reward),
        Commands::Play => commands::play::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
