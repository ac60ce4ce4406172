use betweenness::{
    graph::{read_sqlite3, CentralityGraph, GraphInfo},
    types::VId,
};
use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use derive_more::Display;
use itertools::Itertools;
use std::error::Error;

#[derive(Debug, Display, PartialEq)]
enum Err {
    #[display(fmt = "invalid vertex id: {}", _0)]
    InvalidVId(String),
}

impl std::error::Error for Err {}

fn parse_vid(matches: &ArgMatches, name: &str) -> Result<VId, Err> {
    let value = matches.value_of(name).unwrap_or_default();
    value
        .parse::<VId>()
        .map_err(|_| Err::InvalidVId(value.to_string()))
}

fn open_graph(matches: &ArgMatches) -> Result<CentralityGraph, Box<dyn Error>> {
    Ok(read_sqlite3(matches.value_of("GRAPH").unwrap_or_default())?)
}

fn print_scores(scores: &[(VId, f64)]) {
    for (vid, score) in scores {
        println!("{} {}", vid, score);
    }
}

fn handle_sample() -> Result<(), Box<dyn Error>> {
    let graph = CentralityGraph::new(
        vec![1, 2, 3, 4, 5, 6],
        vec![
            (1, 2),
            (1, 5),
            (2, 3),
            (2, 5),
            (3, 4),
            (4, 5),
            (4, 6),
            (3, 6),
        ],
    )?;
    print_scores(&graph.top_k_betweenness_centrality()?);
    Ok(())
}

fn handle_info(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!("{}", GraphInfo::new(&open_graph(matches)?));
    Ok(())
}

fn handle_dist(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = open_graph(matches)?;
    match graph.min_dist(parse_vid(matches, "START")?, parse_vid(matches, "END")?)? {
        Some(dist) => println!("{}", dist),
        None => println!("no path"),
    }
    Ok(())
}

fn handle_paths(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = open_graph(matches)?;
    let (start, end) = (parse_vid(matches, "START")?, parse_vid(matches, "END")?);
    if let Some(dist) = graph.min_dist(start, end)? {
        for path in graph.all_shortest_paths(start, end, dist)? {
            println!("{}", path.iter().join(","));
        }
    }
    Ok(())
}

fn handle_score(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = open_graph(matches)?;
    let node = parse_vid(matches, "NODE")?;
    let score = if matches.is_present("standardized") {
        graph.standardized_betweenness_centrality(node)?
    } else {
        graph.betweenness_centrality(node)?
    };
    println!("{}", score);
    Ok(())
}

fn handle_rank(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    print_scores(&open_graph(matches)?.ranking()?);
    Ok(())
}

fn handle_topk(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    print_scores(&open_graph(matches)?.top_k_betweenness_centrality()?);
    Ok(())
}

fn graph_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("GRAPH")
        .help("SQLite3 file holding the graph")
        .required(true)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .after_help(
            r"The SQLite3 file must contain the following schema:

  CREATE TABLE vertices (vid INT);
  CREATE TABLE edges (src INT, dst INT);
",
        )
        .subcommand(
            SubCommand::with_name("sample")
                .about("Displays the top vertices of the built-in six-vertex graph"),
        )
        .subcommand(
            SubCommand::with_name("info")
                .about("Displays the number of vertices and edges")
                .arg(graph_arg()),
        )
        .subcommand(
            SubCommand::with_name("dist")
                .about("Displays the shortest distance between two vertices")
                .arg(graph_arg())
                .arg(Arg::with_name("START").required(true))
                .arg(Arg::with_name("END").required(true)),
        )
        .subcommand(
            SubCommand::with_name("paths")
                .about("Displays every shortest path between two vertices")
                .arg(graph_arg())
                .arg(Arg::with_name("START").required(true))
                .arg(Arg::with_name("END").required(true)),
        )
        .subcommand(
            SubCommand::with_name("score")
                .about("Displays the betweenness centrality of a vertex")
                .arg(graph_arg())
                .arg(Arg::with_name("NODE").required(true))
                .arg(
                    Arg::with_name("standardized")
                        .help("Divides the score by the number of vertex pairs")
                        .long("standardized")
                        .short("s")
                        .takes_value(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("rank")
                .about("Displays every vertex by standardized centrality")
                .arg(graph_arg()),
        )
        .subcommand(
            SubCommand::with_name("topk")
                .about("Displays the vertices tied for the highest standardized centrality")
                .arg(graph_arg()),
        )
        .get_matches();
    match matches.subcommand() {
        ("sample", Some(_)) => handle_sample(),
        ("info", Some(matches)) => handle_info(matches),
        ("dist", Some(matches)) => handle_dist(matches),
        ("paths", Some(matches)) => handle_paths(matches),
        ("score", Some(matches)) => handle_score(matches),
        ("rank", Some(matches)) => handle_rank(matches),
        ("topk", Some(matches)) => handle_topk(matches),
        _ => unreachable!(),
    }
}
