// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

use std::env;
use std::process;
use std::time::Instant;

use clap::{App, Arg, ArgGroup};
use log::info;

use fifteen_solver::config::Heuristic;
use fifteen_solver::solution_formatter::SolutionFormatter;
use fifteen_solver::solver::SolverErr;
use fifteen_solver::{LoadState, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("fifteen-solver")
        .author("martin-t")
        .version("0.0")
        .about("Finds the shortest solution of a 15-puzzle using A*")
        .arg(
            Arg::with_name("manhattan")
                .short("d")
                .long("manhattan")
                .help("use Manhattan distance as heuristic (default)"),
        ).arg(
            Arg::with_name("misplaced")
                .short("m")
                .long("misplaced")
                .help("use number of misplaced tiles as heuristic"),
        ).group(ArgGroup::with_name("heuristic").arg("manhattan").arg("misplaced"))
        .arg(
            Arg::with_name("steps")
                .short("s")
                .long("steps")
                .help("print the board after every move"),
        ).arg(
            Arg::with_name("max-expansions")
                .long("max-expansions")
                .takes_value(true)
                .value_name("N")
                .help("give up after expanding N nodes"),
        ).arg(
            Arg::with_name("file")
                .required(true)
                .help("16 numbers separated by whitespace or commas, 0 is the blank"),
        ).get_matches();

    let heuristic = if matches.is_present("misplaced") {
        Heuristic::MisplacedTiles
    } else {
        Heuristic::Manhattan
    };
    let print_steps = matches.is_present("steps");
    let max_expansions = matches.value_of("max-expansions").map(|n| {
        n.parse::<u64>().unwrap_or_else(|err| {
            println!("Invalid value for --max-expansions: {}: {}", n, err);
            process::exit(1);
        })
    });
    let path = matches.value_of("file").unwrap_or_else(|| unreachable!("file is required"));

    let state = path.load_state().unwrap_or_else(|err| {
        let current_dir = env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();
        println!("Can't load puzzle {} in {}: {}", path, current_dir, err);
        process::exit(1);
    });

    println!("Solving {} using {}...", path, heuristic);
    let started = Instant::now();
    let result = state.solve(heuristic, max_expansions);
    info!("Search finished in {} ms", started.elapsed().as_millis());

    match result {
        Ok(solution) => {
            println!("{}", solution.stats);
            println!("Found solution:");
            if print_steps {
                println!("{}", SolutionFormatter::new(&state, &solution.moves));
            }
            println!("{}", solution.moves);
            println!("Moves: {}", solution.path_length());
        }
        Err(SolverErr::Unsolvable) => {
            println!("No solution - the goal is not reachable from this state");
        }
        Err(SolverErr::NoSolution) => println!("No solution"),
        Err(SolverErr::Interrupted) => println!("Search interrupted"),
    }
}
