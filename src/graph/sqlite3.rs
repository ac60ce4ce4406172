use super::CentralityGraph;
use crate::{
    error::{Err, Result},
    types::{Edge, VId},
};
use derive_more::{Display, From};
use log::info;
use rusqlite::{types::Value, Connection, OpenFlags};

#[derive(Debug, Display, From)]
pub enum LoadError {
    #[display(fmt = "sqlite3: {}", _0)]
    Sqlite(rusqlite::Error),
    #[display(fmt = "graph: {}", _0)]
    Graph(Err),
}

impl std::error::Error for LoadError {}

fn as_vid(value: Value) -> Result<VId> {
    match value {
        Value::Integer(vid) => Ok(vid),
        other => Err(Err::NonIntegerVertex(format!("{:?}", other))),
    }
}

fn query_vertices(conn: &Connection) -> rusqlite::Result<Vec<Value>> {
    let mut stmt = conn.prepare("SELECT vid FROM vertices ORDER BY rowid")?;
    let rows = stmt.query_map([], |row| row.get::<_, Value>(0))?;
    let vertices = rows.collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(vertices)
}

fn query_edges(conn: &Connection) -> rusqlite::Result<Vec<(Value, Value)>> {
    let mut stmt = conn.prepare("SELECT src, dst FROM edges ORDER BY rowid")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, Value>(0)?, row.get::<_, Value>(1)?))
    })?;
    let edges = rows.collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(edges)
}

fn read_sqlite3_connection(conn: &Connection) -> std::result::Result<CentralityGraph, LoadError> {
    info!("reading vertices...");
    let vertices = query_vertices(conn)?
        .into_iter()
        .map(as_vid)
        .collect::<Result<Vec<VId>>>()?;
    info!("reading edges...");
    let edges = query_edges(conn)?
        .into_iter()
        .map(|(src, dst)| Ok((as_vid(src)?, as_vid(dst)?)))
        .collect::<Result<Vec<Edge>>>()?;
    info!("read {} vertices, {} edges", vertices.len(), edges.len());
    Ok(CentralityGraph::new(vertices, edges)?)
}

/// Reads the graph stored in the SQLite3 file `path`.
///
/// The SQLite3 file must have the following schema:
///
/// ```sql
/// CREATE TABLE vertices (vid INT);
/// CREATE TABLE edges (src INT, dst INT);
/// ```
///
/// Rows are taken in `rowid` order, which fixes the vertex order of the graph.
pub fn read_sqlite3<P: AsRef<std::path::Path>>(
    path: P,
) -> std::result::Result<CentralityGraph, LoadError> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    read_sqlite3_connection(&conn)
}
