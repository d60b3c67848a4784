//! Command-line interface for `playfair-rs`.

#![forbid(unsafe_code)]

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use playfair_core::Playfair;

/// Playfair cipher CLI.
#[derive(Parser)]
#[command(
    name = "playfair",
    version,
    author,
    about = "Playfair digraph substitution cipher CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message with a keyword.
    Enc {
        /// Keyword seeding the 5x5 square.
        #[arg(long, value_name = "WORD")]
        keyword: String,
        /// Message to encrypt.
        message: String,
    },
    /// Decrypt a ciphertext with a keyword.
    Dec {
        /// Keyword seeding the 5x5 square.
        #[arg(long, value_name = "WORD")]
        keyword: String,
        /// Ciphertext to decrypt.
        message: String,
    },
    /// Print the 5x5 square derived from a keyword.
    Grid {
        /// Keyword seeding the 5x5 square.
        #[arg(long, value_name = "WORD")]
        keyword: String,
    },
    /// Run a local demo: encrypt a message, feed the ciphertext back, decrypt.
    Demo {
        /// Keyword seeding the 5x5 square.
        #[arg(long, value_name = "WORD", default_value = "monarchy")]
        keyword: String,
        /// Message to run through the round trip.
        #[arg(long, value_name = "TEXT", default_value = "hide the gold in the tree stump")]
        message: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { keyword, message } => cmd_enc(&keyword, &message),
        Commands::Dec { keyword, message } => cmd_dec(&keyword, &message),
        Commands::Grid { keyword } => cmd_grid(&keyword),
        Commands::Demo { keyword, message } => cmd_demo(&keyword, &message),
    }
}

fn cmd_enc(keyword: &str, message: &str) -> Result<()> {
    let cipher = Playfair::new(message, keyword)?;
    println!("{}", cipher.encrypt());
    Ok(())
}

fn cmd_dec(keyword: &str, message: &str) -> Result<()> {
    let cipher = Playfair::new(message, keyword)?;
    println!("{}", cipher.decrypt());
    Ok(())
}

fn cmd_grid(keyword: &str) -> Result<()> {
    let cipher = Playfair::new("", keyword)?;
    println!("{}", cipher.render_grid());
    Ok(())
}

fn cmd_demo(keyword: &str, message: &str) -> Result<()> {
    let mut cipher = Playfair::new(message, keyword)?;
    // The padded plaintext the round trip must reproduce: the segmented
    // digrams with their fillers, before any transformation.
    let padded: String = cipher
        .digrams()
        .iter()
        .flat_map(|d| [d.0 as char, d.1 as char])
        .collect();

    let encrypted = cipher.encrypt();
    cipher.set_message(&encrypted);
    let decrypted = cipher.decrypt();

    println!("--- Playfair Cipher ---");
    println!("message:   {message}");
    println!("keyword:   {keyword}");
    println!("encrypted: {encrypted}");
    println!("decrypted: {decrypted}");
    println!("square:");
    println!("{}", cipher.render_grid());

    if decrypted != padded {
        bail!("demo round trip failed");
    }
    Ok(())
}
