use clap::Parser;
use colored::Colorize;
use symexpr::{
    convert::{build, Description},
    types::Environment,
};
use std::process;

#[derive(Parser)]
#[command(name = "symexpr-cli")]
#[command(about = "Simplify, differentiate and evaluate expression descriptions")]
#[command(version)]
struct Args {
    /// Nested description literal, e.g. ("+", ("variable", "x"), ("number", 1))
    description: String,

    /// Variable to differentiate with respect to
    #[arg(long)]
    wrt: Option<String>,

    /// Variable binding in the form name=value, may be repeated
    #[arg(long = "var", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let expr = build(&Description::parse(&args.description)?)?;
    let env: Environment = args.vars.iter().cloned().collect();

    println!("{}: {}", "Expression".cyan(), expr);
    let simplified = expr.simplify();
    println!("{}: {}", "Simplified".cyan(), simplified);

    if let Some(variable) = &args.wrt {
        let derivative = expr.derive(variable);
        println!("{}: {}", format!("d/d{variable}").cyan(), derivative);
        if let Ok(value) = derivative.evaluate(&env) {
            println!("{}: {}", format!("d/d{variable} value").cyan(), value);
        }
    }

    // Only report a value when every variable is bound
    if let Ok(value) = simplified.evaluate(&env) {
        println!("{}: {}", "Value".cyan(), value);
    }

    Ok(())
}

fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{binding}`"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for `{name}`: {e}"))?;
    Ok((name.trim().to_string(), value))
}
