use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emcheck")]
#[command(about = "Copy emails from an imported list one at a time and track which were copied", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the list with the contents of a .csv or .xlsx file
    Import {
        path: PathBuf,
    },
    /// Replace the list with column A of a Google Sheets document
    ImportSheet {
        url: String,
    },
    /// Print the list with checked markers
    Show,
    /// Copy the n-th email (1-based) and mark it checked
    Copy {
        index: usize,
    },
    /// Empty the list and the checked set
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["emcheck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_clear_yes_flag() {
        let cli = Cli::try_parse_from(["emcheck", "clear", "--yes"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Clear { yes: true })));
    }

    #[test]
    fn test_import_sheet_takes_url() {
        let cli = Cli::try_parse_from([
            "emcheck",
            "import-sheet",
            "https://docs.google.com/spreadsheets/d/abc/edit",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::ImportSheet { url }) => assert!(url.ends_with("/abc/edit")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
