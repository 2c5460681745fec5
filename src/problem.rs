//! Problem data files: nodes with candidate strategies and weighted edges
//! between them, under a shared usage limit.
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProblemError {
    #[error("Failed to read problem data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse problem data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
pub struct Data {
    pub problem: Problem,
}

#[derive(Debug, Deserialize)]
pub struct Problem {
    pub name: String,
    pub nodes: ProblemNodes,
    pub edges: ProblemEdges,
    pub usage_limit: u64,
}

/// Per node: an interval and one cost/usage entry per strategy
#[derive(Debug, Deserialize)]
pub struct ProblemNodes {
    pub intervals: Vec<[u64; 2]>,
    pub costs: Vec<Vec<u64>>,
    pub usages: Vec<Vec<u64>>,
}

/// Per edge: the two node indices and a cost per strategy pair
#[derive(Debug, Deserialize)]
pub struct ProblemEdges {
    pub nodes: Vec<[usize; 2]>,
    pub costs: Vec<Vec<u64>>,
}

impl Problem {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ProblemError> {
        Ok(serde_json::from_slice::<Data>(bytes)?.problem)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        Self::from_slice(&fs::read(path)?)
    }

    pub fn summary(&self) -> Summary<'_> {
        Summary {
            name: &self.name,
            node_count: self.nodes.costs.len(),
            interval_min: self.nodes.intervals.iter().map(|i| i[0]).min(),
            interval_max: self.nodes.intervals.iter().map(|i| i[1]).max(),
            strategy_count: self.nodes.costs.iter().map(Vec::len).sum(),
            edge_cost_count: self.edges.costs.iter().map(Vec::len).sum(),
            connection_count: self.edges.nodes.len(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Summary<'a> {
    pub name: &'a str,
    pub node_count: usize,
    pub interval_min: Option<u64>,
    pub interval_max: Option<u64>,
    pub strategy_count: usize,
    pub edge_cost_count: usize,
    pub connection_count: usize,
}

fn or_dash(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Problem {}", self.name)?;
        writeln!(
            f,
            "  {} nodes, interval min {} max {}, {} total strategies",
            self.node_count,
            or_dash(self.interval_min),
            or_dash(self.interval_max),
            self.strategy_count
        )?;
        writeln!(
            f,
            "  {} edges, {} connections",
            self.edge_cost_count, self.connection_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "problem": {
            "name": "tiny",
            "nodes": {
                "intervals": [[2, 5], [0, 9], [4, 6]],
                "costs": [[1, 2], [3], [4, 5, 6]],
                "usages": [[1, 1], [2], [1, 2, 3]]
            },
            "edges": {
                "nodes": [[0, 1], [1, 2]],
                "costs": [[0, 1], [2, 3, 4]]
            },
            "usage_limit": 10
        }
    }"#;

    #[test]
    fn test_summary_counts() {
        let problem = Problem::from_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(problem.usage_limit, 10);
        assert_eq!(
            problem.summary(),
            Summary {
                name: "tiny",
                node_count: 3,
                interval_min: Some(0),
                interval_max: Some(9),
                strategy_count: 6,
                edge_cost_count: 5,
                connection_count: 2,
            }
        );
    }

    #[test]
    fn test_summary_display() {
        let problem = Problem::from_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            problem.summary().to_string(),
            "Problem tiny\n  3 nodes, interval min 0 max 9, 6 total strategies\n  5 edges, 2 connections\n"
        );
    }

    #[test]
    fn test_empty_problem_has_no_interval_bounds() {
        let json = r#"{"problem": {"name": "empty",
            "nodes": {"intervals": [], "costs": [], "usages": []},
            "edges": {"nodes": [], "costs": []}, "usage_limit": 0}}"#;
        let problem = Problem::from_slice(json.as_bytes()).unwrap();
        assert!(problem
            .summary()
            .to_string()
            .contains("0 nodes, interval min - max -, 0 total strategies"));
    }

    #[test]
    fn test_malformed_data_is_parse_error() {
        let err = Problem::from_slice(b"{\"problem\": {}}").unwrap_err();
        assert!(matches!(err, ProblemError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Problem::load("no/such/problem.json").unwrap_err();
        assert!(matches!(err, ProblemError::Io(_)));
    }
}
