use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_one_move_manhattan() {
    let output = r"Solving puzzles/one-move.txt using manhattan...
Nodes created: 4
Nodes expanded: 2
Frontier replacements: 0
Discarded duplicates: 0

Depth          Created        Expanded
0:             1              1
1:             3              1

Found solution:
R
Moves: 1
";

    Command::main_binary()
        .unwrap()
        .arg("puzzles/one-move.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_one_move_misplaced_steps() {
    let output = r"Solving puzzles/one-move.txt using misplaced-tiles...
Nodes created: 4
Nodes expanded: 2
Frontier replacements: 0
Discarded duplicates: 0

Depth          Created        Expanded
0:             1              1
1:             3              1

Found solution:
 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14  . 15

 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14 15  .

R
Moves: 1
";

    Command::main_binary()
        .unwrap()
        .arg("--misplaced")
        .arg("--steps")
        .arg("puzzles/one-move.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_solved() {
    let output = r"Solving puzzles/solved.txt using manhattan...
Nodes created: 1
Nodes expanded: 1
Frontier replacements: 0
Discarded duplicates: 0

Depth          Created        Expanded
0:             1              1

Found solution:

Moves: 0
";

    Command::main_binary()
        .unwrap()
        .arg("puzzles/solved.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_unsolvable() {
    let output = r"Solving puzzles/unsolvable.txt using manhattan...
No solution - the goal is not reachable from this state
";

    Command::main_binary()
        .unwrap()
        .arg("puzzles/unsolvable.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_with_budget() {
    let output = r"Solving puzzles/medium.txt using misplaced-tiles...
Search interrupted
";

    Command::main_binary()
        .unwrap()
        .arg("-m")
        .arg("--max-expansions")
        .arg("100")
        .arg("puzzles/medium.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_invalid_puzzle() {
    // the message includes the current dir so only check it fails
    Command::main_binary()
        .unwrap()
        .arg("puzzles/invalid.txt")
        .assert()
        .failure()
        .stderr("");
}

#[test]
fn run_bad_heuristic_args() {
    // doesn't check stderr - clap's message is not part of the interface
    Command::main_binary()
        .unwrap()
        .arg("--manhattan")
        .arg("--misplaced")
        .arg("puzzles/one-move.txt")
        .assert()
        .failure()
        .stdout("");
}
