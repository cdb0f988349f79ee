use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::net::TcpStream;
use std::process;

use serde_json::{json, Value};
use tracing::info;

use rusty_maze::json_utils::{self, solution_json};
use rusty_maze::{init_logging, network, parse_maze, path_report, render_ascii, server_address};

const USAGE: &str = "usage: rusty-maze <input> [output] [--json] [--ascii]\n       rusty-maze --remote <input>";

/// Code de sortie quand le labyrinthe est refusé.
const EXIT_INVALID_MAZE: i32 = 2;
/// Code de sortie pour une ligne de commande incorrecte.
const EXIT_USAGE: i32 = 64;

#[derive(Debug, Default)]
struct Options {
    input: String,
    output: Option<String>,
    json: bool,
    ascii: bool,
    remote: bool,
}

impl Options {
    fn from_args(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Options::default();
        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--json" => options.json = true,
                "--ascii" => options.ascii = true,
                "--remote" => options.remote = true,
                flag if flag.starts_with("--") => return Err(format!("unknown flag {}", flag)),
                _ => positional.push(arg),
            }
        }
        let mut positional = positional.into_iter();
        options.input = positional.next().ok_or("missing input file")?;
        options.output = positional.next();
        if positional.next().is_some() {
            return Err("too many arguments".to_string());
        }
        if options.remote && (options.output.is_some() || options.json || options.ascii) {
            return Err("--remote prints the plain report to stdout only".to_string());
        }
        Ok(options)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let options = match Options::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            process::exit(EXIT_USAGE);
        }
    };

    let code = run(&options, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}

/// Exécute la commande et renvoie le code de sortie.
///
/// Les erreurs d'entrée/sortie remontent telles quelles, un labyrinthe refusé
/// donne [`EXIT_INVALID_MAZE`] avec une ligne `error (<Kind>): ...` sur `err`.
fn run<W: Write, E: Write>(
    options: &Options,
    out: &mut W,
    err: &mut E,
) -> Result<i32, Box<dyn Error>> {
    let text = fs::read_to_string(&options.input)?;
    if options.remote {
        return solve_remote(&text, out, err);
    }

    let maze = match parse_maze(&text) {
        Ok(maze) => maze,
        Err(e) => {
            writeln!(err, "error ({}): {}", e.kind(), e)?;
            return Ok(EXIT_INVALID_MAZE);
        }
    };
    info!(name = maze.name(), input = %options.input, "maze loaded");

    let solved = maze.solve();
    let report = if options.json {
        let mut value = solution_json(&solved);
        if options.ascii {
            value["ascii"] = Value::String(render_ascii(&solved));
        }
        serde_json::to_string_pretty(&value)?
    } else if options.ascii {
        format!("{}\n\n{}", path_report(&solved), render_ascii(&solved))
    } else {
        path_report(&solved)
    };

    match &options.output {
        Some(path) => fs::write(path, report)?,
        None => writeln!(out, "{}", report)?,
    }
    Ok(0)
}

/// Envoie le labyrinthe au serveur et affiche sa réponse.
fn solve_remote<W: Write, E: Write>(
    text: &str,
    out: &mut W,
    err: &mut E,
) -> Result<i32, Box<dyn Error>> {
    let address = server_address();
    let mut stream = TcpStream::connect(&address)?;
    info!(%address, "connected to server");

    let request = json!({ "SolveMaze": text }).to_string();
    network::send_message(&mut stream, &request)?;
    let response = json_utils::parse_json(&network::receive_message(&mut stream)?)?;

    let result = &response["SolveMazeResult"];
    if let Some(report) = result["Ok"]["report"].as_str() {
        writeln!(out, "{}", report)?;
        return Ok(0);
    }
    if let Some(e) = result.get("Err") {
        writeln!(
            err,
            "error ({}): {}",
            e["kind"].as_str().unwrap_or("Unknown"),
            e["message"].as_str().unwrap_or("")
        )?;
        return Ok(EXIT_INVALID_MAZE);
    }
    Err(format!("unexpected server response: {}", response).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_positionals_and_flags() {
        let o = Options::from_args(args(&["in.txt", "--json", "out.txt"])).unwrap();
        assert_eq!(o.input, "in.txt");
        assert_eq!(o.output.as_deref(), Some("out.txt"));
        assert!(o.json);
        assert!(!o.ascii);
    }

    #[test]
    fn rejects_bad_command_lines() {
        assert!(Options::from_args(args(&[])).is_err());
        assert!(Options::from_args(args(&["a", "b", "c"])).is_err());
        assert!(Options::from_args(args(&["a", "--fast"])).is_err());
        assert!(Options::from_args(args(&["--remote", "a", "b"])).is_err());
        assert!(Options::from_args(args(&["--remote", "a", "--json"])).is_err());
        assert!(Options::from_args(args(&["--remote", "a", "--ascii"])).is_err());
        assert!(Options::from_args(args(&["--remote", "a"])).unwrap().remote);
    }

    /// Écrit `text` dans un fichier temporaire propre au test.
    fn input_file(name: &str, text: &str) -> String {
        let path = std::env::temp_dir().join(format!("rusty-maze-{}-{}.txt", process::id(), name));
        fs::write(&path, text).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn run_with(options: &Options) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(options, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn invalid_maze_exits_with_code_2() {
        let options = Options {
            input: input_file("blocked", "M\nStart: 0-0\nEnd: 0-1\nW,P"),
            ..Options::default()
        };
        let (code, out, err) = run_with(&options);
        assert_eq!(code, EXIT_INVALID_MAZE);
        assert_eq!(err, "error (BlockedEndpointError): start 0-0 is a wall\n");
        // jamais confondu avec une absence de chemin
        assert!(out.is_empty());
    }

    #[test]
    fn unsolvable_maze_is_a_normal_report() {
        let options = Options {
            input: input_file("unsolvable", "U\nStart: 0-0\nEnd: 0-2\nP,W,P"),
            ..Options::default()
        };
        let (code, out, err) = run_with(&options);
        assert_eq!(code, 0);
        assert_eq!(out, "No solution found.\n");
        assert!(err.is_empty());
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let options = Options {
            input: "/nonexistent/rusty-maze/input.txt".to_string(),
            ..Options::default()
        };
        let e = run(&options, &mut Vec::<u8>::new(), &mut Vec::<u8>::new()).unwrap_err();
        let io_err = e.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn report_goes_to_output_file() {
        let output = std::env::temp_dir()
            .join(format!("rusty-maze-{}-report.txt", process::id()))
            .to_string_lossy()
            .into_owned();
        let options = Options {
            input: input_file("solvable", "Dot\nStart: 0-0\nEnd: 0-0\nP"),
            output: Some(output.clone()),
            ..Options::default()
        };
        let (code, out, _) = run_with(&options);
        assert_eq!(code, 0);
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&output).unwrap(), "Dot\nMoves: 1\nStart\n0-0\nEnd");
    }

    #[test]
    fn json_with_ascii_stays_valid_json() {
        let options = Options {
            input: input_file("json", "J\nStart: 0-0\nEnd: 1-1\nP,P\nW,P"),
            json: true,
            ascii: true,
            ..Options::default()
        };
        let (code, out, _) = run_with(&options);
        assert_eq!(code, 0);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["moves"], 3);
        assert_eq!(value["ascii"], "S*\n#E");
    }
}
