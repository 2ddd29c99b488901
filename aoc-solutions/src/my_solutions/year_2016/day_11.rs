//! Radioisotope Thermoelectric Generators
//!
//! Every element contributes one generator and one microchip, and elements
//! are interchangeable: only the floors of each (generator, chip) pair
//! matter. States keep their pairs sorted so that symmetric arrangements
//! collapse into one BFS node.

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::HashMap;

use crate::utils::grid_search::bfs;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 11, tags = ["bfs", "state-search"])]
pub struct Solver;

const FLOORS: usize = 4;
const TOP: u8 = FLOORS as u8 - 1;
/// Elerium and dilithium, both found on the ground floor.
const EXTRA_PAIRS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    pub generator: u8,
    pub chip: u8,
}

#[derive(Debug, Clone, Copy)]
enum Item {
    Generator(usize),
    Chip(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Facility {
    elevator: u8,
    pairs: Vec<Pair>,
}

impl Facility {
    pub fn new(elevator: u8, mut pairs: Vec<Pair>) -> Self {
        pairs.sort_unstable();
        Self { elevator, pairs }
    }

    /// A chip fries when it shares a floor with a foreign generator and its
    /// own generator is elsewhere.
    pub fn is_safe(&self) -> bool {
        self.pairs.iter().all(|p| {
            p.chip == p.generator || !self.pairs.iter().any(|q| q.generator == p.chip)
        })
    }

    pub fn is_assembled(&self) -> bool {
        self.pairs.iter().all(|p| p.generator == TOP && p.chip == TOP)
    }

    fn items_here(&self) -> Vec<Item> {
        self.pairs
            .iter()
            .enumerate()
            .flat_map(|(i, p)| {
                let generator = (p.generator == self.elevator).then_some(Item::Generator(i));
                let chip = (p.chip == self.elevator).then_some(Item::Chip(i));
                generator.into_iter().chain(chip)
            })
            .collect()
    }

    fn carry(&self, target: u8, load: &[Item]) -> Facility {
        let mut pairs = self.pairs.clone();
        for item in load {
            match *item {
                Item::Generator(i) => pairs[i].generator = target,
                Item::Chip(i) => pairs[i].chip = target,
            }
        }
        Facility::new(target, pairs)
    }

    /// Safe states one elevator ride away. The elevator never goes below the
    /// lowest occupied floor.
    pub fn moves(&self) -> Vec<Facility> {
        let items = self.items_here();
        let lowest = self
            .pairs
            .iter()
            .map(|p| p.generator.min(p.chip))
            .min()
            .unwrap_or(TOP);
        let down = (self.elevator > lowest).then(|| self.elevator - 1);
        let up = (self.elevator < TOP).then(|| self.elevator + 1);

        let loads: Vec<Vec<Item>> = items
            .iter()
            .map(|&a| vec![a])
            .chain(items.iter().tuple_combinations().map(|(&a, &b)| vec![a, b]))
            .collect();

        down.into_iter()
            .chain(up)
            .flat_map(|target| loads.iter().map(move |load| self.carry(target, load)))
            .filter(Facility::is_safe)
            .collect()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Pair>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_floors(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_floors(input: &str) -> anyhow::Result<Vec<Pair>> {
    let mut elements: HashMap<&str, (Option<u8>, Option<u8>)> = HashMap::new();
    let floors: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
    if floors.len() > FLOORS {
        bail!("expected at most {} floors, found {}", FLOORS, floors.len());
    }

    for (floor, line) in floors.into_iter().enumerate() {
        let words: Vec<&str> = line
            .split_whitespace()
            .map(|w| w.trim_end_matches([',', '.']))
            .collect();
        for (prev, word) in words.iter().tuple_windows() {
            let slot = match *word {
                "generator" | "generators" => {
                    let entry = elements.entry(*prev).or_default();
                    &mut entry.0
                }
                "microchip" | "microchips" => {
                    let element = prev
                        .strip_suffix("-compatible")
                        .ok_or_else(|| anyhow!("(line {}) unknown microchip {:?}", floor + 1, prev))?;
                    let entry = elements.entry(element).or_default();
                    &mut entry.1
                }
                _ => continue,
            };
            if slot.replace(floor as u8).is_some() {
                bail!("(line {}) {} {} listed twice", floor + 1, prev, word);
            }
        }
    }

    if elements.is_empty() {
        bail!("no generators or microchips");
    }
    elements
        .into_iter()
        .sorted()
        .map(|(element, found)| match found {
            (Some(generator), Some(chip)) => Ok(Pair { generator, chip }),
            (None, _) => Err(anyhow!("{} microchip has no generator", element)),
            (_, None) => Err(anyhow!("{} generator has no microchip", element)),
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(pairs: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fewest_rides(pairs.clone())
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("the items can never all reach the top floor").into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(pairs: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut all = pairs.clone();
        all.extend(std::iter::repeat_n(Pair { generator: 0, chip: 0 }, EXTRA_PAIRS));
        fewest_rides(all)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("the items can never all reach the top floor").into()))
    }
}

/// Fewest elevator rides to bring everything to the top floor, starting on
/// the ground floor.
pub fn fewest_rides(pairs: Vec<Pair>) -> Option<usize> {
    log::debug!("searching with {} element pairs", pairs.len());
    bfs(Facility::new(0, pairs), Facility::moves, Facility::is_assembled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
The first floor contains a hydrogen-compatible microchip and a lithium-compatible microchip.
The second floor contains a hydrogen generator.
The third floor contains a lithium generator.
The fourth floor contains nothing relevant.
";

    fn pair(generator: u8, chip: u8) -> Pair {
        Pair { generator, chip }
    }

    #[test]
    fn test_parse_sample() {
        let pairs = Solver::parse(SAMPLE).unwrap();
        assert_eq!(pairs, vec![pair(1, 0), pair(2, 0)]);
    }

    #[test]
    fn test_sample_part1() {
        let mut pairs = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut pairs, 1).unwrap(), "11");
    }

    #[test]
    fn test_sample_part2_is_stuck() {
        // Extra generators on the ground floor fry the unpaired chips.
        let mut pairs = Solver::parse(SAMPLE).unwrap();
        assert!(matches!(Solver::solve_part(&mut pairs, 2), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_each_ground_floor_pair_adds_twelve_rides() {
        assert_eq!(fewest_rides(vec![pair(0, 0)]), Some(3));
        assert_eq!(fewest_rides(vec![pair(0, 0); 3]), Some(27));
    }

    #[test]
    fn test_safety() {
        assert!(Facility::new(0, vec![pair(0, 0), pair(1, 1)]).is_safe());
        assert!(Facility::new(0, vec![pair(1, 0), pair(2, 3)]).is_safe());
        assert!(!Facility::new(0, vec![pair(1, 0), pair(0, 2)]).is_safe());
    }

    #[test]
    fn test_symmetric_states_collapse() {
        let a = Facility::new(1, vec![pair(0, 1), pair(2, 2)]);
        let b = Facility::new(1, vec![pair(2, 2), pair(0, 1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_moves_stay_above_lowest_item() {
        let facility = Facility::new(1, vec![pair(1, 1)]);
        assert!(facility.moves().iter().all(|m| m.elevator == 2));
        assert_eq!(facility.moves().len(), 3);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Solver::parse("The first floor contains a hydrogen generator.\n"),
            Err(ParseError::InvalidFormat(msg)) if msg.contains("hydrogen")
        ));
        assert!(matches!(
            Solver::parse("a\nb\nc\nd\ne\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Solver::parse("The fourth floor contains nothing relevant.\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
