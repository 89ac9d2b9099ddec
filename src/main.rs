//! s256-ecc CLI

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::{debug, info};
use num_bigint::BigUint;
use num_traits::Num;
use s256_ecc::hash::message_digest;
use s256_ecc::report::{KeyReport, SignatureReport, VerifyReport};
use s256_ecc::{PrivateKey, S256Point, Scalar, Signature};

#[derive(Parser, Debug)]
#[command(name = "s256-ecc")]
#[command(version = "0.1.0")]
#[command(about = "secp256k1 key derivation, ECDSA signing and verification", long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the public point for a secret
    Pubkey {
        /// Secret exponent (0x-prefixed hex or decimal)
        #[arg(long)]
        secret: String,
    },
    /// Sign a message
    Sign {
        /// Secret exponent (0x-prefixed hex or decimal)
        #[arg(long)]
        secret: String,

        /// Message to sign; the digest is hash256(message)
        #[arg(long)]
        message: String,

        /// Explicit nonce (default: derived from secret and digest)
        #[arg(long)]
        nonce: Option<String>,
    },
    /// Verify a signature against a public point
    Verify(VerifyArgs),
}

#[derive(ClapArgs, Debug)]
#[command(group = clap::ArgGroup::new("input").required(true).args(["message", "digest"]))]
struct VerifyArgs {
    /// Public point x coordinate
    #[arg(long)]
    px: String,

    /// Public point y coordinate
    #[arg(long)]
    py: String,

    /// Signature r
    #[arg(long)]
    r: String,

    /// Signature s
    #[arg(long)]
    s: String,

    /// Message that was signed
    #[arg(long)]
    message: Option<String>,

    /// Digest z given directly
    #[arg(long)]
    digest: Option<String>,
}

/// Parse a 0x-prefixed hex or a decimal integer
fn parse_int(name: &str, text: &str) -> Result<BigUint> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => BigUint::from_str_radix(hex, 16),
        None => BigUint::from_str_radix(text, 10),
    };
    parsed.with_context(|| format!("invalid integer for {}: {:?}", name, text))
}

fn emit<T: serde::Serialize + std::fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &args.command {
        Command::Pubkey { secret } => {
            let secret = parse_int("secret", secret)?;
            let key = PrivateKey::new(&secret).context("cannot derive key")?;
            info!("derived public point {}", key.public_point());
            emit(&KeyReport::from_key(&key), args.json)?;
        }
        Command::Sign {
            secret,
            message,
            nonce,
        } => {
            let secret = parse_int("secret", secret)?;
            let key = PrivateKey::new(&secret).context("cannot derive key")?;
            let z = message_digest(message.as_bytes());
            debug!("z = {:064x}", z);

            let sig = match nonce {
                Some(k) => {
                    let k = Scalar::new(parse_int("nonce", k)?);
                    key.sign_with_nonce(&z, &k).context("signing failed")?
                }
                None => key.sign(&z).context("signing failed")?,
            };
            info!("signed: {}", sig);
            emit(&SignatureReport::new(&key, &z, &sig), args.json)?;
        }
        Command::Verify(v) => {
            let px = parse_int("px", &v.px)?;
            let py = parse_int("py", &v.py)?;
            let point = S256Point::from_coordinates(&px, &py)
                .context("public point is not on secp256k1")?;
            let sig = Signature::new(parse_int("r", &v.r)?, parse_int("s", &v.s)?);

            let z = match (&v.message, &v.digest) {
                (Some(m), _) => message_digest(m.as_bytes()),
                (None, Some(d)) => parse_int("digest", d)?,
                (None, None) => bail!("either --message or --digest is required"),
            };

            let valid = point.verify(&z, &sig);
            info!("verification result: {}", valid);
            emit(
                &VerifyReport {
                    z_hex: format!("{:064x}", z),
                    valid,
                },
                args.json,
            )?;
            if !valid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
