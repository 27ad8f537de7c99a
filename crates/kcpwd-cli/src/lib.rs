//! kcpwd command-line interface.

pub mod commands;
pub mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kcpwd_core::{paths, Config};
use kcpwd_secrets::Vault;
use tracing::debug;

/// kcpwd - keychain password manager
#[derive(Parser)]
#[command(name = "kcpwd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Store a password for a given key
    ///
    /// Example: kcpwd set dbadmin asd123
    Set(commands::secrets::SetArgs),

    /// Retrieve a password and copy it to the clipboard
    ///
    /// Example: kcpwd get dbadmin
    Get(commands::secrets::GetArgs),

    /// Delete a stored password
    ///
    /// Example: kcpwd delete dbadmin
    Delete(commands::secrets::DeleteArgs),

    /// Show where to browse stored keys (not the passwords)
    List,

    /// Show version information
    Version,
}

/// The user declined a confirmation prompt.
///
/// The message has already been printed; the binary exits with status 1
/// without reporting it again.
#[derive(Debug, thiserror::Error)]
#[error("Aborted!")]
pub struct Aborted;

/// Where command output goes and where answers come from.
pub struct Terminal<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    input: &'a mut dyn BufRead,
    interactive: bool,
}

impl<'a> Terminal<'a> {
    /// A terminal over arbitrary streams; password prompts read from `input`.
    pub fn new(
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
        input: &'a mut dyn BufRead,
    ) -> Self {
        Self {
            out,
            err,
            input,
            interactive: false,
        }
    }

    /// Read hidden input from the tty instead of `input` when prompting for
    /// passwords.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn err(&mut self) -> &mut dyn Write {
        &mut *self.err
    }

    /// Read one line of input, without the trailing newline.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt for a password, hiding input on a real tty.
    pub fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        if self.interactive {
            return rpassword::prompt_password(prompt);
        }
        write!(self.err, "{prompt}")?;
        self.err.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }
}

/// Resolve the configuration for this invocation.
///
/// An explicit `--config` path must exist. The default path, which honors
/// `KCPWD_CONFIG`, may be absent.
pub fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_optional(&paths::config_file()?)?,
    };
    Ok(config)
}

/// Run the CLI against the OS credential store and the process's stdio.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    debug!(clipboard = ?config.clipboard, "resolved configuration");
    let vault = Vault::from_config(&config);

    let interactive = io::stdin().is_terminal();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let mut input = io::stdin().lock();
    let mut term = Terminal::new(&mut out, &mut err, &mut input).interactive(interactive);

    execute(cli.command, &vault, &mut term)
}

/// Dispatch a parsed command.
pub fn execute(command: Commands, vault: &Vault, term: &mut Terminal<'_>) -> anyhow::Result<()> {
    match command {
        Commands::Set(args) => commands::secrets::set(args, vault, term),
        Commands::Get(args) => commands::secrets::get(args, vault, term),
        Commands::Delete(args) => commands::secrets::delete(args, vault, term),
        Commands::List => commands::list::run(term),
        Commands::Version => {
            writeln!(term.out(), "kcpwd {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
    }
}
