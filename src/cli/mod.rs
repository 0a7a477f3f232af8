mod output;
mod theme;

use crate::error::SeeError;
use crate::launcher::{Launcher, SystemLauncher, editor_request, terminal_request};
use crate::model::{EDITOR_PROGRAM, TERMINAL_PROGRAM};
use crate::store::{AliasStore, home_dir, resolve_store_path};
use anyhow::Result;
use clap::Parser;
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;
use theme::{CliTheme, load_cli_theme};

const HINT: &str = "type see -h for help";

const HELP: &str = "\
Usage: see [OPTION] [ARGS]...
Open a bookmarked path, or any path, with the system file explorer.

Options:
  -h, --help                   display this help and exit
  -v, --version                print version information and exit
      --where                  print the location of the alias file
  -l, --list                   list all aliases
  -a, --add <name> <path>      add an alias, replacing any existing one
  -r, --remove <name>          remove an alias
  -re, --rename <old> <new>    rename an alias, replacing <new> if present
  -p, --program                list program overrides
  -p, --program <name> <path>  use <path> as the executable for wt or code
  -wt [alias-or-path]          open a terminal there (default: home)
  -code [alias-or-path]        open the editor there (default: home)
  <alias-or-path>              open an alias, or a literal path

Global options (before the verb):
      --store <PATH>           alias file to use [env: SEE_STORE]
      --cli-config <PATH>      colour theme for listings [env: SEE_CLI_CONFIG]

Set SEE_LOG=debug to trace what see does.";

#[derive(Parser)]
#[command(
    name = "see",
    about = "Bookmark paths and open them",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(long = "store", env = "SEE_STORE", value_name = "PATH")]
    store_path: Option<PathBuf>,
    #[arg(long, env = "SEE_CLI_CONFIG", value_name = "PATH")]
    cli_config: Option<PathBuf>,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Verb {
    Hint,
    Help,
    Version,
    Where,
    List,
    Add { name: String, path: String },
    Remove { name: String },
    Rename { old: String, new: String },
    ListPrograms,
    SetProgram { name: String, path: String },
    Terminal { target: Option<String> },
    Editor { target: Option<String> },
    Open { target: String },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let verb = match parse_verb(&cli.args) {
        Ok(verb) => verb,
        Err(err) => return report(err),
    };
    debug!("dispatching {:?}", verb);

    let store = AliasStore::new(resolve_store_path(cli.store_path)?);
    debug!("using store {}", store.path().display());

    let theme = match verb {
        Verb::List | Verb::ListPrograms => load_cli_theme(cli.cli_config)?,
        _ => CliTheme::plain(),
    };
    let dispatcher = Dispatcher {
        store: &store,
        launcher: &SystemLauncher,
        theme: &theme,
        home: home_dir()?,
        os: std::env::consts::OS,
    };

    let mut stdout = io::stdout().lock();
    match dispatcher.execute(verb, &mut stdout) {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast::<SeeError>() {
            Ok(soft) => report(soft),
            Err(err) => Err(err),
        },
    }
}

/// Soft failures are printed and the process still exits successfully.
fn report(err: SeeError) -> Result<()> {
    debug!("soft failure: {:?}", err);
    eprintln!("{}", err);
    Ok(())
}

fn parse_verb(args: &[String]) -> Result<Verb, SeeError> {
    let Some((flag, rest)) = args.split_first() else {
        return Ok(Verb::Hint);
    };

    let verb = match (flag.as_str(), rest) {
        ("-h" | "--help", []) => Verb::Help,
        ("-v" | "--version", []) => Verb::Version,
        ("--where", []) => Verb::Where,
        ("-l" | "--list", []) => Verb::List,
        ("-a" | "--add", [name, path]) => Verb::Add {
            name: name.clone(),
            path: path.clone(),
        },
        ("-r" | "--remove", [name]) => Verb::Remove { name: name.clone() },
        ("-re" | "--rename", [old, new]) => Verb::Rename {
            old: old.clone(),
            new: new.clone(),
        },
        ("-p" | "--program", []) => Verb::ListPrograms,
        ("-p" | "--program", [name, path]) => Verb::SetProgram {
            name: name.clone(),
            path: path.clone(),
        },
        ("-wt", []) => Verb::Terminal { target: None },
        ("-wt", [target]) => Verb::Terminal {
            target: Some(target.clone()),
        },
        ("-code", []) => Verb::Editor { target: None },
        ("-code", [target]) => Verb::Editor {
            target: Some(target.clone()),
        },
        (target, []) if !target.starts_with('-') => Verb::Open {
            target: target.to_string(),
        },
        (other, _) => {
            return Err(match usage(other) {
                Some(usage) => SeeError::Arity(usage),
                None if other.starts_with('-') => SeeError::UnknownOption(other.to_string()),
                None => SeeError::Arity("see <alias-or-path>"),
            });
        }
    };
    Ok(verb)
}

fn usage(flag: &str) -> Option<&'static str> {
    let usage = match flag {
        "-h" | "--help" => "see --help",
        "-v" | "--version" => "see --version",
        "--where" => "see --where",
        "-l" | "--list" => "see --list",
        "-a" | "--add" => "see --add <name> <path>",
        "-r" | "--remove" => "see --remove <name>",
        "-re" | "--rename" => "see --rename <old> <new>",
        "-p" | "--program" => "see --program [<name> <path>]",
        "-wt" => "see -wt [alias-or-path]",
        "-code" => "see -code [alias-or-path]",
        _ => return None,
    };
    Some(usage)
}

struct Dispatcher<'a, L: Launcher> {
    store: &'a AliasStore,
    launcher: &'a L,
    theme: &'a CliTheme,
    home: PathBuf,
    os: &'a str,
}

impl<L: Launcher> Dispatcher<'_, L> {
    fn execute(&self, verb: Verb, out: &mut dyn Write) -> Result<()> {
        match verb {
            Verb::Hint => writeln!(out, "{}", HINT)?,
            Verb::Help => writeln!(out, "{}", HELP)?,
            Verb::Version => writeln!(
                out,
                "see {} ({})",
                env!("CARGO_PKG_VERSION"),
                env!("GIT_COMMIT_HASH")
            )?,
            Verb::Where => writeln!(out, "{}", self.store.path().display())?,
            Verb::List => {
                let aliases = self.store.list_paths()?;
                output::print_entries(out, &aliases, self.theme)?;
            }
            Verb::Add { name, path } => {
                self.store.add_path(&name, &path)?;
                writeln!(out, "Added alias: {} -> {}", name, path)?;
            }
            Verb::Remove { name } => {
                self.store.remove_path(&name)?;
                writeln!(out, "Removed alias: {}", name)?;
            }
            Verb::Rename { old, new } => {
                self.store.rename_path(&old, &new)?;
                writeln!(out, "Renamed alias: {} -> {}", old, new)?;
            }
            Verb::ListPrograms => {
                let programs = self.store.list_programs()?;
                output::print_entries(out, &programs, self.theme)?;
            }
            Verb::SetProgram { name, path } => {
                self.store.set_program_path(&name, &path)?;
                writeln!(out, "Program {} now runs {}", name, path)?;
            }
            Verb::Terminal { target } => {
                let path = self.resolve_or_home(target)?;
                let program = self.store.get_program_path(TERMINAL_PROGRAM)?;
                let request = terminal_request(program.as_deref(), &path, self.os);
                self.launcher.launch(&request).map_err(SeeError::from)?;
            }
            Verb::Editor { target } => {
                let path = self.resolve_or_home(target)?;
                let program = self.store.get_program_path(EDITOR_PROGRAM)?;
                let request = editor_request(program.as_deref(), &path, self.os);
                self.launcher.launch(&request).map_err(SeeError::from)?;
            }
            Verb::Open { target } => {
                let path = self.resolve(target)?;
                self.launcher.open(&path).map_err(SeeError::from)?;
            }
        }
        Ok(())
    }

    /// Alias lookup first, then the argument itself as a literal path.
    fn resolve(&self, target: String) -> Result<String> {
        match self.store.get_path(&target)? {
            Some(path) => {
                debug!("alias '{}' resolved to {}", target, path);
                Ok(path)
            }
            None => {
                debug!("no alias '{}', using it as a path", target);
                Ok(target)
            }
        }
    }

    fn resolve_or_home(&self, target: Option<String>) -> Result<String> {
        match target {
            Some(target) => self.resolve(target),
            None => Ok(self.home.display().to_string()),
        }
    }
}
