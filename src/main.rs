//! Command-line interface for ppexpr.
//!
//! This binary wraps the conditional-expression evaluator for use outside a
//! compiler: it evaluates one expression, with preprocessor symbol values
//! supplied on the command line as `-D NAME=VALUE` defines, and prints the
//! 32-bit signed result. Undefined symbols evaluate to 0, the same as in the
//! embedding compiler.

use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use std::collections::HashMap;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluates a conditional-compilation expression
    Eval {
        /// Expression text (omit to read from --file)
        expr: Option<String>,

        /// Input file with the expression
        #[arg(short, long)]
        file: Option<String>,

        /// Predefined symbol values, repeatable: -D NAME=VALUE
        #[arg(short = 'D', long = "define", value_name = "NAME=VALUE")]
        defines: Vec<String>,
    },
}

fn parse_defines(defines: &[String]) -> Result<HashMap<String, i32>> {
    let mut map = HashMap::new();
    for define in defines {
        let Some((name, value)) = define.split_once('=') else {
            bail!("bad define {define:?}, expected NAME=VALUE");
        };
        let value: i32 = value
            .parse()
            .with_context(|| format!("bad define value in {define:?}"))?;
        map.insert(name.to_owned(), value);
    }
    Ok(map)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval {
            expr,
            file,
            defines,
        } => {
            let source = match (expr, file) {
                (Some(expr), None) => expr,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("can't open {path:?}"))?,
                (Some(_), Some(_)) => bail!("give an expression or --file, not both"),
                (None, None) => bail!("an expression or --file is required"),
            };
            let defines = parse_defines(&defines)?;
            let mut resolver = |name: &str| -> i32 { defines.get(name).copied().unwrap_or(0) };
            let value = ppexpr::evaluate_with(&source, &mut resolver)?;
            println!("{value}");
        }
    }
    Ok(())
}
