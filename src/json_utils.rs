use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::ascii_utils::path_report;
use crate::error::MazeError;
use crate::maze::SolvedMaze;
use crate::parser::parse_maze;

pub fn parse_json(msg: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(msg)
}

/// Extrait le texte du labyrinthe d'une requête `{"SolveMaze": "..."}`.
pub fn extract_maze_text(json: &Value) -> Option<&str> {
    json.get("SolveMaze")?.as_str()
}

/// Représentation JSON d'un labyrinthe résolu.
pub fn solution_json(solved: &SolvedMaze) -> Value {
    let path: Vec<Value> = solved
        .path()
        .map(|p| p.coordinates().iter().map(|c| json!([c.row, c.col])).collect())
        .unwrap_or_default();
    json!({
        "name": solved.maze().name(),
        "solved": solved.is_solved(),
        "moves": solved.path().map_or(0, |p| p.len()),
        "path": path,
    })
}

pub fn error_json(err: &MazeError) -> Value {
    json!({
        "kind": err.kind().as_str(),
        "message": err.to_string(),
    })
}

/// Réponse à un message reçu qui n'est pas du JSON valide.
pub fn malformed_message() -> Value {
    json!({ "Error": "MalformedMessage" })
}

/// Choisit la réponse du serveur pour un message brut reçu.
pub fn reply_to_message(msg: &str) -> Value {
    match parse_json(msg) {
        Ok(request) => handle_request(&request),
        Err(err) => {
            warn!(%err, "malformed message");
            malformed_message()
        }
    }
}

/// Traite une requête du serveur et construit la réponse.
///
/// Un labyrinthe invalide produit une réponse `Err`, jamais une solution vide.
pub fn handle_request(request: &Value) -> Value {
    let Some(text) = extract_maze_text(request) else {
        warn!(?request, "unknown request");
        return json!({ "Error": "UnknownRequest" });
    };

    match parse_maze(text) {
        Ok(maze) => {
            let solved = maze.solve();
            let mut ok = solution_json(&solved);
            ok["report"] = Value::String(path_report(&solved));
            debug!(name = solved.maze().name(), solved = solved.is_solved(), "request solved");
            json!({ "SolveMazeResult": { "Ok": ok } })
        }
        Err(err) => {
            debug!(%err, "request rejected");
            json!({ "SolveMazeResult": { "Err": error_json(&err) } })
        }
    }
}
