use clap::{Parser, Subcommand};
use idreg::store::fs::DEFAULT_DATA_DIR;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "idreg", bin_name = "idreg", version)]
#[command(
    about = "Registry of people and entities keyed by PESEL, NIP and REGON",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the registry and its config
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (the default when no command is given)
    Menu,

    /// List registered users
    #[command(alias = "ls")]
    List,

    /// Add a user
    #[command(alias = "n")]
    Add {
        /// User id (not checked for uniqueness)
        #[arg(long = "id")]
        user_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        pesel: Option<String>,

        #[arg(long)]
        nip: Option<String>,

        #[arg(long)]
        regon: Option<String>,
    },

    /// Remove every user with the given id
    #[command(alias = "rm")]
    Remove { user_id: String },

    /// Edit the first user with the given id; omitted or empty fields are kept
    #[command(alias = "e")]
    Edit {
        user_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        pesel: Option<String>,

        #[arg(long)]
        nip: Option<String>,

        #[arg(long)]
        regon: Option<String>,
    },

    /// Validate identifiers; with none given, audit the stored registry
    Check {
        #[arg(long)]
        pesel: Option<String>,

        #[arg(long)]
        nip: Option<String>,

        #[arg(long)]
        regon: Option<String>,
    },

    /// Generate or check passwords
    Password {
        #[command(subcommand)]
        action: PasswordCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum PasswordCommands {
    /// Generate a random password
    Generate {
        /// Length (minimum 8; defaults to the configured length)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Check a password against the strength policy
    Check { password: String },
}
