use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gridlight_enums::TableKind;
use gridlight_tables::ConstantTables;

#[derive(Parser, Debug)]
#[command(name = "gridlight", about = "Inspect and check the grid editor constant tables")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the compiled tables
    Dump {
        /// Only this table (e.g. BlockType, drag_behavior)
        #[arg(long)]
        table: Option<TableKind>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Resolve a member by symbolic name or integer value
    Lookup { table: TableKind, key: String },
    /// Compare a TOML copy of the tables with the compiled ones
    Verify { path: PathBuf },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Toml,
}

/// Exit status when a verified copy has drifted.
pub const EXIT_DRIFT: u8 = 1;

/// Runs one subcommand, returning the process exit status.
pub fn run(command: &Command, out: &mut dyn Write) -> Result<u8, Box<dyn Error>> {
    match command {
        Command::Dump { table, format } => {
            dump(*table, *format, out)?;
            Ok(0)
        }
        Command::Lookup { table, key } => {
            let (name, value) = table.lookup(key)?;
            writeln!(out, "{}::{} = {}", table, name, value)?;
            Ok(0)
        }
        Command::Verify { path } => {
            let report = ConstantTables::from_path(path)?.verify();
            if report.is_clean() {
                writeln!(out, "{}: ok", path.display())?;
                return Ok(0);
            }
            for d in &report {
                writeln!(out, "{}", d)?;
            }
            writeln!(out, "{}: {} drift(s)", path.display(), report.len())?;
            Ok(EXIT_DRIFT)
        }
    }
}

/// Exit status for a command that failed outright.
pub const EXIT_ERROR: u8 = 2;

/// Writes a failed command's error once and returns its exit status.
pub fn report_error(err: &dyn Error, err_out: &mut dyn Write) -> u8 {
    // stderr may be closed; the exit status still carries the failure
    let _ = writeln!(err_out, "error: {}", err);
    EXIT_ERROR
}

fn dump(table: Option<TableKind>, format: Format, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let kinds: Vec<TableKind> = match table {
        Some(k) => vec![k],
        None => TableKind::ALL.to_vec(),
    };
    match format {
        Format::Text => {
            for kind in kinds {
                for (name, value) in kind.members() {
                    writeln!(out, "{}::{} = {}", kind, name, value)?;
                }
            }
        }
        Format::Toml => {
            let compiled = ConstantTables::compiled();
            let tables = match table {
                Some(k) => compiled.only(k),
                None => compiled,
            };
            write!(out, "{}", tables.to_toml_string()?)?;
        }
    }
    Ok(())
}
