use clap::Parser;
use std::io::{BufRead, IsTerminal, Read, Write};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use memsh::{FlatFs, Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "memsh")]
#[command(about = "A shell interpreter over an in-memory filesystem")]
#[command(version)]
struct Cli {
    /// Execute the script from command line argument
    #[arg(short = 'c')]
    script: Option<String>,

    /// Starting directory within the virtual filesystem
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Load the filesystem from a JSON file (object of path -> content)
    #[arg(long = "fs")]
    fs_file: Option<String>,

    /// Output the final result as JSON (output, currentDirectory)
    #[arg(long = "json")]
    json: bool,

    /// Script file to execute
    #[arg()]
    script_file: Option<String>,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let fs: Arc<FlatFs> = match &cli.fs_file {
        Some(file) => {
            let raw = match std::fs::read_to_string(file) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error: Cannot read filesystem file: {}: {}", file, e);
                    std::process::exit(1);
                }
            };
            match serde_json::from_str(&raw) {
                Ok(parsed) => Arc::new(parsed),
                Err(e) => {
                    eprintln!("Error: Invalid filesystem file: {}: {}", file, e);
                    std::process::exit(1);
                }
            }
        }
        None => Arc::new(FlatFs::sample()),
    };

    let mut shell = Shell::new(ShellOptions {
        cwd: cli.cwd.clone(),
        fs: Some(fs),
    });

    // Determine script source: -c, file, piped stdin, or interactive REPL
    let script = if let Some(s) = cli.script {
        Some(s)
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => Some(content),
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else if std::io::stdin().is_terminal() {
        None
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_default();
        Some(buf)
    };

    match script {
        Some(script) => run_script(&mut shell, &script, cli.json),
        None => repl(&mut shell),
    }
}

/// Run a script non-interactively, one command per line (`;` also separates).
fn run_script(shell: &mut Shell, script: &str, json: bool) {
    let mut outputs: Vec<String> = Vec::new();
    for line in script.split(['\n', ';']) {
        let output = shell.run_line(line);
        if !output.is_empty() {
            outputs.push(output);
        }
    }

    let combined = outputs.join("\n");
    if json {
        println!(
            "{}",
            serde_json::json!({
                "output": combined,
                "currentDirectory": shell.cwd(),
            })
        );
    } else if !combined.is_empty() {
        println!("{}", combined);
    }
}

/// Interactive read-eval-print loop. Exits on EOF (Ctrl-D).
fn repl(shell: &mut Shell) {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("{} $ ", shell.cwd());
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let output = shell.run_line(&line);
        if !output.is_empty() {
            println!("{}", output);
        }
    }
}
