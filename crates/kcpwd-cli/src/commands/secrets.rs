//! Password commands.
//!
//! `kcpwd set|get|delete`. Failures are reported on stderr but do not change
//! the exit code; only a declined delete exits non-zero.

use clap::Args;
use kcpwd_secrets::Vault;

use crate::render::{render_confirm, render_error, render_success};
use crate::{Aborted, Terminal};

/// Arguments for `kcpwd set`.
#[derive(Args)]
pub struct SetArgs {
    /// Identifier for the password
    pub key: String,

    /// Password to store (if omitted, prompts for hidden input)
    pub password: Option<String>,
}

/// Arguments for `kcpwd get`.
#[derive(Args)]
pub struct GetArgs {
    /// Identifier for the password
    pub key: String,

    /// Also write the password to stdout
    #[arg(long)]
    pub print: bool,
}

/// Arguments for `kcpwd delete`.
#[derive(Args)]
pub struct DeleteArgs {
    /// Identifier for the password
    pub key: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Store a password.
pub fn set(args: SetArgs, vault: &Vault, term: &mut Terminal<'_>) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => {
            let prompt = format!("Enter password for '{}': ", args.key);
            let password = term
                .read_password(&prompt)
                .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
            if password.is_empty() {
                render_error(term, "Password must not be empty")?;
                return Ok(());
            }
            password
        }
    };

    if vault.set_secret(&args.key, &password) {
        render_success(term, &format!("Password stored for '{}'", args.key))?;
    } else {
        render_error(term, "Error storing password")?;
    }
    Ok(())
}

/// Retrieve a password and copy it to the clipboard.
pub fn get(args: GetArgs, vault: &Vault, term: &mut Terminal<'_>) -> anyhow::Result<()> {
    let Some(password) = vault.get_secret(&args.key, true) else {
        render_error(term, &format!("No password found for '{}'", args.key))?;
        return Ok(());
    };

    if args.print {
        writeln!(term.out(), "{}", password.expose_secret())?;
        writeln!(
            term.err(),
            "Password for '{}' copied to clipboard",
            args.key
        )?;
    } else {
        render_success(
            term,
            &format!("Password for '{}' copied to clipboard", args.key),
        )?;
    }
    Ok(())
}

/// Delete a password after confirmation.
pub fn delete(args: DeleteArgs, vault: &Vault, term: &mut Terminal<'_>) -> anyhow::Result<()> {
    if !args.yes && !render_confirm(term, "Are you sure you want to delete this password?")? {
        render_error(term, "Aborted!")?;
        return Err(Aborted.into());
    }

    if vault.delete_secret(&args.key) {
        render_success(term, &format!("Password for '{}' deleted", args.key))?;
    } else {
        render_error(term, &format!("No password found for '{}'", args.key))?;
    }
    Ok(())
}
