//! Example solver whose second part reuses work from the first
//!
//! Part 1 finds the depth of every node in a small tree and stores the depths
//! in the shared data. Part 2 reads them back if they are there and computes
//! them itself otherwise, so either part can run alone.
//!
//! Run with: cargo run --example dependent_parts

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};
use std::collections::HashMap;

/// Parent links plus the depths part 1 leaves behind
#[derive(Debug)]
pub struct Orbits<'a> {
    parent: HashMap<&'a str, &'a str>,
    depths: Option<HashMap<&'a str, usize>>,
}

impl<'a> Orbits<'a> {
    fn depth(&self, mut node: &'a str) -> usize {
        let mut depth = 0;
        while let Some(&p) = self.parent.get(node) {
            node = p;
            depth += 1;
        }
        depth
    }

    fn depths(&self) -> HashMap<&'a str, usize> {
        self.parent.keys().map(|&n| (n, self.depth(n))).collect()
    }
}

/// `A)B` lines: B orbits A
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 6, tags = ["example", "dependent"])]
pub struct OrbitMap;

impl AocParser for OrbitMap {
    type SharedData<'a> = Orbits<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let parent = input
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.split_once(')')
                    .map(|(center, body)| (body, center))
                    .ok_or_else(|| ParseError::InvalidFormat(format!("line {}: {:?}", i + 1, line)))
            })
            .collect::<Result<_, _>>()?;

        Ok(Orbits {
            parent,
            depths: None,
        })
    }
}

impl PartSolver<1> for OrbitMap {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let depths = shared.depths();
        let total: usize = depths.values().sum();
        shared.depths = Some(depths);
        Ok(total.to_string())
    }
}

impl PartSolver<2> for OrbitMap {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let deepest = match &shared.depths {
            Some(depths) => {
                println!("Reusing part 1 depths");
                depths.values().copied().max()
            }
            None => {
                println!("Computing depths (part 1 not run)");
                shared.depths().into_values().max()
            }
        };
        Ok(deepest.unwrap_or(0).to_string())
    }
}

fn main() {
    println!("=== Dependent Parts Example ===\n");

    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let input = "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L";
    let mut solver = registry
        .create_solver(2019, 6, input)
        .expect("Failed to create solver");

    println!("Parsed in {}", solver.parse_duration());
    for part in 1..=solver.parts() {
        match solver.solve(part) {
            Ok(result) => println!("Part {}: {} ({})", part, result.answer, result.duration()),
            Err(e) => eprintln!("Error solving part {}: {}", part, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L";

    #[test]
    fn test_part1_stores_depths() {
        let mut shared = OrbitMap::parse(SAMPLE).unwrap();
        assert_eq!(<OrbitMap as PartSolver<1>>::solve(&mut shared).unwrap(), "42");
        assert_eq!(shared.depths.as_ref().and_then(|d| d.get("L")), Some(&7));
    }

    #[test]
    fn test_part2_with_and_without_part1() {
        let mut fresh = OrbitMap::parse(SAMPLE).unwrap();
        assert_eq!(<OrbitMap as PartSolver<2>>::solve(&mut fresh).unwrap(), "7");

        let mut reused = OrbitMap::parse(SAMPLE).unwrap();
        <OrbitMap as PartSolver<1>>::solve(&mut reused).unwrap();
        assert_eq!(<OrbitMap as PartSolver<2>>::solve(&mut reused).unwrap(), "7");
    }

    #[test]
    fn test_bad_line() {
        assert!(matches!(
            OrbitMap::parse("COM)B\nB-C"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("line 2")
        ));
    }
}
