use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "groc", version)]
#[command(about = "Keep a grocery list in a plain text file", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// List file to use (defaults to $GROC_FILE, then config, then ./grocery-list.txt)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item
    Add {
        /// Item name; multiple words are joined with spaces, and everything
        /// after the first word is part of the name
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        name: Vec<String>,
    },

    /// List all items
    #[command(alias = "ls")]
    List,

    /// Mark an item as checked
    Check {
        /// Id of the item
        id: u32,
    },

    /// Remove an item
    #[command(alias = "rm")]
    Remove {
        /// Id of the item
        id: u32,
    },

    /// Remove all items
    Clear,
}
