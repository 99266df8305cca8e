mod error_formatter;
mod formatter;
mod interactive;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;
use std::fmt;
use tally::{CalcResponse, Engine, Postfix, TallyError};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Evaluate arithmetic expressions.")]
#[command(
    long_about = "Tally evaluates arithmetic expressions built from decimal numbers, + - * / and parentheses.\nThe CLI evaluates expressions directly, runs postfix (RPN) input, or serves the evaluator over HTTP."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an infix expression (try: "(2+3)*4")
    ///
    /// Whitespace is not allowed inside the expression. Quote it so the
    /// shell does not expand `*` or parentheses.
    Eval {
        /// The expression to evaluate
        expression: String,
        /// Also print the postfix (RPN) form
        #[arg(short = 'p', long)]
        postfix: bool,
        /// Show every evaluation step as a table
        #[arg(short = 's', long)]
        steps: bool,
        /// Print the JSON response document the HTTP API would return
        #[arg(short = 'j', long, conflicts_with_all = ["postfix", "steps"])]
        json: bool,
    },
    /// Evaluate a postfix (RPN) token sequence
    ///
    /// Tokens may be passed as separate arguments or as one quoted string.
    ///
    /// Examples:
    ///   tally rpn 2 3 4 '*' +
    ///   tally rpn "8 3 - 2 -"
    Rpn {
        /// Postfix tokens
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Prompt for expressions until an empty line is entered
    Interactive,
    /// Start HTTP REST API server (default: localhost:8080)
    ///
    /// API: POST /api/v1/calculate with {"expression": "..."}
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// A failure whose output has already been printed. `main` only sets the
/// exit code.
#[derive(Debug)]
struct AlreadyReported;

impl fmt::Display for AlreadyReported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failure already reported")
    }
}

impl std::error::Error for AlreadyReported {}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Eval {
            expression,
            postfix,
            steps,
            json,
        } => eval_command(expression, *postfix, *steps, *json),
        Commands::Rpn { tokens } => rpn_command(tokens),
        Commands::Interactive => interactive::run_interactive(&Engine::new()),
        Commands::Server { host, port } => server_command(host, *port),
    };

    if let Err(e) = result {
        if e.downcast_ref::<AlreadyReported>().is_some() {
            std::process::exit(1);
        }
        if let Some(tally_err) = e.downcast_ref::<error_formatter::ExpressionError>() {
            eprintln!("{}", error_formatter::format_error(tally_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn eval_command(expression: &str, show_postfix: bool, show_steps: bool, json: bool) -> Result<()> {
    let engine = Engine::new();

    if json {
        let outcome = engine.evaluate(expression);
        println!("{}", CalcResponse::from_outcome(&outcome).to_json());
        return match outcome {
            Ok(_) => Ok(()),
            Err(_) => Err(AlreadyReported.into()),
        };
    }

    let with_source = |e: TallyError| error_formatter::ExpressionError::new(expression, e);
    let formatter = Formatter::default();

    if show_steps {
        let evaluation = engine.evaluate_with_steps(expression).map_err(with_source)?;
        if show_postfix {
            println!("{}", formatter.format_postfix(&evaluation.postfix));
        }
        print!("{}", formatter.format_steps(&evaluation));
        println!("{}", formatter.format_value(evaluation.value));
        return Ok(());
    }

    let postfix = engine.compile(expression).map_err(with_source)?;
    if show_postfix {
        println!("{}", formatter.format_postfix(&postfix));
    }
    let value = engine.evaluate_postfix(&postfix).map_err(with_source)?;
    println!("{}", formatter.format_value(value));

    Ok(())
}

fn rpn_command(tokens: &[String]) -> Result<()> {
    let text = tokens.join(" ");
    let postfix = Postfix::from_rpn(&text);
    let value = Engine::new()
        .evaluate_postfix(&postfix)
        .map_err(|e| error_formatter::ExpressionError::new(&text, e))?;
    println!("{}", Formatter::default().format_value(value));
    Ok(())
}

fn server_command(host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(async {
            println!("Starting HTTP server on {}:{}", host, port);
            server::http::start_server(Engine::new(), host, port).await
        })?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}
