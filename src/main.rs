use std::{fs, process::ExitCode};

use benchexpr::{
    Error, RandomSource, SeededRandom, Variables, evaluate_with, interpreter::lexer::tokenize,
    parse, scrape::{DEFAULT_HEAD_LINES, DEFAULT_TAIL_LINES, ScrapeConfig, scrape_variables},
};
use clap::{Parser, Subcommand};

/// benchexpr evaluates the expressions used to derive chart axes and filters
/// from benchmark results.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Checks whether an expression is syntactically valid.
    Check {
        expression: String,
    },
    /// Prints the tokens of an expression with their byte offsets.
    Tokens {
        expression: String,
    },
    /// Prints the fully parenthesised syntax tree of an expression.
    Parse {
        expression: String,
    },
    /// Evaluates an expression and prints the resulting array.
    Eval {
        expression: String,

        /// A variable as `NAME=V1,V2,...`. May be repeated.
        #[arg(short, long = "var", value_name = "NAME=VALUES", value_parser = parse_variable)]
        vars: Vec<(String, Vec<f64>)>,

        /// Reads `$name = number` variables from a captured stderr file.
        #[arg(short, long, value_name = "FILE")]
        stderr: Option<String>,

        /// Number of leading stderr lines searched for variables.
        #[arg(long, default_value_t = DEFAULT_HEAD_LINES)]
        head_lines: usize,

        /// Number of trailing stderr lines searched for variables.
        #[arg(long, default_value_t = DEFAULT_TAIL_LINES)]
        tail_lines: usize,

        /// Seeds `random()` for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Parses `NAME=V1,V2,...` into a variable binding.
fn parse_variable(arg: &str) -> Result<(String, Vec<f64>), String> {
    let (name, values) = arg.split_once('=')
                            .ok_or_else(|| format!("expected NAME=VALUES, found '{arg}'"))?;
    let values = values.split(',')
                       .map(|v| {
                           v.trim()
                            .parse::<f64>()
                            .map_err(|e| format!("invalid value '{v}' for {name}: {e}"))
                       })
                       .collect::<Result<Vec<_>, _>>()?;
    Ok((name.trim().to_string(), values))
}

/// Installs a `fmt` subscriber on stderr when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer()
                                            .with_writer(std::io::stderr)
                                            .with_target(true)
                                            .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn format_array(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(f64::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn run(command: Command) -> Result<ExitCode, Error> {
    match command {
        Command::Check { expression } => {
            if !expression.trim().is_empty()
               && let Err(e) = parse(&expression)
            {
                println!("invalid: {e}");
                return Ok(ExitCode::FAILURE);
            }
            println!("valid");
        },
        Command::Tokens { expression } => {
            for (token, position) in tokenize(&expression)? {
                println!("{position:>4}  {token:?}");
            }
        },
        Command::Parse { expression } => println!("{}", parse(&expression)?),
        Command::Eval { expression,
                        vars,
                        stderr,
                        head_lines,
                        tail_lines,
                        seed, } => {
            let mut variables = Variables::new();
            if let Some(path) = stderr {
                let Ok(output) = fs::read_to_string(&path) else {
                    eprintln!("Failed to read the stderr file '{path}'. Perhaps this file does not exist?");
                    return Ok(ExitCode::FAILURE);
                };
                let config = ScrapeConfig { head_lines,
                                            tail_lines };
                variables.extend(scrape_variables(&output, &config));
            }
            variables.extend(vars);

            let seeded = seed.map(SeededRandom::new);
            let random: &dyn RandomSource = match &seeded {
                Some(seeded) => seeded,
                None => &benchexpr::ProcessRandom,
            };

            let result = evaluate_with(&expression, &variables, random)?;
            println!("{}", format_array(&result));
        },
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_command(expression: &str, stderr: Option<String>) -> Command {
        Command::Eval { expression: expression.to_string(),
                        vars: vec![("time".to_string(), vec![2.0])],
                        stderr,
                        head_lines: DEFAULT_HEAD_LINES,
                        tail_lines: DEFAULT_TAIL_LINES,
                        seed: Some(1) }
    }

    fn same_code(a: ExitCode, b: ExitCode) -> bool {
        format!("{a:?}") == format!("{b:?}")
    }

    #[test]
    fn missing_stderr_file_fails_without_exiting() {
        let missing = std::env::temp_dir().join("benchexpr-no-such-stderr-file.log");
        let command = eval_command("1", Some(missing.to_string_lossy().into_owned()));

        let code = run(command).unwrap();
        assert!(same_code(code, ExitCode::FAILURE));
    }

    #[test]
    fn stderr_file_supplies_variables() {
        let path = std::env::temp_dir().join(format!("benchexpr-stderr-{}.log", std::process::id()));
        fs::write(&path, "start\n$turns = 120\n").unwrap();

        let result = run(eval_command("$turns / time", Some(path.to_string_lossy().into_owned())));
        fs::remove_file(&path).unwrap();
        assert!(same_code(result.unwrap(), ExitCode::SUCCESS));
    }

    #[test]
    fn unknown_variable_is_an_error() {
        assert!(matches!(run(eval_command("Q + 1", None)), Err(Error::Runtime(_))));
    }

    #[test]
    fn variables_from_the_command_line() {
        assert_eq!(parse_variable("N=1, 2,3"), Ok(("N".to_string(), vec![1.0, 2.0, 3.0])));
        assert!(parse_variable("N").is_err());
        assert!(parse_variable("N=1,x").is_err());
    }
}
