//! `minisign-rs` — sign and verify files with Minisign keys.

mod config;
#[cfg(test)]
mod fixtures;
mod pubkey;
mod sign;
mod verify;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

/// Sign and verify files in the Minisign format.
#[derive(Parser)]
#[command(name = "minisign-rs", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign a file with an unencrypted secret key.
    Sign {
        /// File to sign.
        file: PathBuf,
        /// Secret key file. Defaults to `$MINISIGN_CONFIG_DIR/minisign.key`
        /// or `~/.minisign/minisign.key`.
        #[arg(short = 's', long)]
        key: Option<PathBuf>,
        /// Untrusted comment.
        #[arg(short = 'c', long, default_value = "signature from minisign secret key")]
        untrusted: String,
        /// Trusted comment. Defaults to `timestamp:<now>`.
        #[arg(short = 't', long, default_value = "")]
        trusted: String,
        /// Signature output path. Defaults to `<file>.minisig`.
        #[arg(short = 'x', long)]
        output: Option<PathBuf>,
    },

    /// Verify a file against its signature.
    Verify {
        /// File to verify.
        file: PathBuf,
        /// Public key file. Defaults to `./minisign.pub`.
        #[arg(short = 'p', long, conflicts_with = "pubkey_base64")]
        pubkey: Option<PathBuf>,
        /// Public key given directly as its base64 body.
        #[arg(short = 'P', long)]
        pubkey_base64: Option<String>,
        /// Signature file. Defaults to `<file>.minisig`.
        #[arg(short = 'x', long)]
        signature: Option<PathBuf>,
        /// Don't print the trusted comment.
        #[arg(short = 'q', long)]
        quiet: bool,
    },

    /// Write the public key belonging to a secret key.
    Pubkey {
        /// Secret key file. Defaults as for `sign`.
        #[arg(short = 's', long)]
        key: Option<PathBuf>,
        /// Public key output path. Defaults to `./minisign.pub`.
        #[arg(short = 'p', long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Sign {
            file,
            key,
            untrusted,
            trusted,
            output,
        } => sign::run(&file, key.as_deref(), &untrusted, &trusted, output.as_deref()),
        Command::Verify {
            file,
            pubkey,
            pubkey_base64,
            signature,
            quiet,
        } => verify::run(&file, pubkey.as_deref(), pubkey_base64.as_deref(), signature.as_deref(), quiet),
        Command::Pubkey { key, output } => pubkey::run(key.as_deref(), output.as_deref()),
    }
}
