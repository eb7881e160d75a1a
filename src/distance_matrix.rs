/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use std::convert::TryFrom;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

#[cfg(test)]
use rand::rngs::StdRng;
#[cfg(test)]
use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, Weight, WEIGHT_INFINITY, WEIGHT_ZERO};
use crate::distance::Distance;
use crate::error::Error;

/// A square table of edge weights, `get_weight(from, to)` being the weight of the edge between
/// `from` and `to`. Missing edges are stored as `WEIGHT_INFINITY`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "RawDistanceMatrix")]
pub struct DistanceMatrix {
    num_nodes: usize,
    weights: Vec<Weight>,
}

/// Deserialized form of a `DistanceMatrix`, only accepted if it holds exactly
/// `num_nodes * num_nodes` weights.
#[derive(Deserialize)]
struct RawDistanceMatrix {
    num_nodes: usize,
    weights: Vec<Weight>,
}

impl TryFrom<RawDistanceMatrix> for DistanceMatrix {
    type Error = Error;

    fn try_from(raw: RawDistanceMatrix) -> Result<Self, Error> {
        if raw.num_nodes.checked_mul(raw.num_nodes) != Some(raw.weights.len()) {
            return Err(Error::InvalidDimension {
                expected: raw.num_nodes.saturating_mul(raw.num_nodes),
                actual: raw.weights.len(),
            });
        }
        Ok(DistanceMatrix {
            num_nodes: raw.num_nodes,
            weights: raw.weights,
        })
    }
}

impl DistanceMatrix {
    /// Creates a matrix without any edges: zero on the diagonal, `WEIGHT_INFINITY` everywhere
    /// else.
    pub fn new(num_nodes: usize) -> Self {
        let mut weights = vec![WEIGHT_INFINITY; num_nodes * num_nodes];
        for i in 0..num_nodes {
            weights[i * num_nodes + i] = WEIGHT_ZERO;
        }
        DistanceMatrix { num_nodes, weights }
    }

    /// Builds a matrix from signed rows, checking that the rows form a square and that all
    /// weights are in `[0, WEIGHT_INFINITY]`, where `WEIGHT_INFINITY` means there is no edge.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, Error> {
        let num_nodes = rows.len();
        let mut weights = Vec::with_capacity(num_nodes * num_nodes);
        for (from, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != num_nodes {
                return Err(Error::InvalidDimension {
                    expected: num_nodes,
                    actual: row.len(),
                });
            }
            for (to, &weight) in row.iter().enumerate() {
                weights.push(DistanceMatrix::check_weight(from, to, weight)?);
            }
        }
        Ok(DistanceMatrix { num_nodes, weights })
    }

    /// Builds a random symmetric matrix, mostly used for testing purposes
    #[cfg(test)]
    pub fn random(
        rng: &mut StdRng,
        num_nodes: usize,
        edge_probability: f64,
        max_weight: Weight,
    ) -> Self {
        let mut result = DistanceMatrix::new(num_nodes);
        for from in 0..num_nodes {
            for to in (from + 1)..num_nodes {
                if rng.gen_bool(edge_probability) {
                    result.add_edge_bidir(from, to, rng.gen_range(0, max_weight + 1));
                }
            }
        }
        result
    }

    /// Reads a matrix from a text file, one row per line:
    /// <weight> <weight> ... <weight>
    /// where each <weight> is a non-negative integer, or one of `-` / `inf` for a missing edge.
    /// Empty lines and lines starting with 'c' are ignored.
    pub fn from_file(filename: &str) -> Result<Self, Error> {
        let file = File::open(filename)?;
        DistanceMatrix::read_from(BufReader::new(file))
    }

    /// Writes the matrix using the format read by `from_file`, missing edges are written as `-`.
    pub fn to_file(&self, filename: &str) -> Result<(), Error> {
        let mut f = BufWriter::new(File::create(filename)?);
        for from in 0..self.num_nodes {
            let line = self
                .row(from)
                .iter()
                .map(|&w| {
                    if w == WEIGHT_INFINITY {
                        String::from("-")
                    } else {
                        w.to_string()
                    }
                })
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        f.flush()?;
        Ok(())
    }

    pub fn get_num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn get_weight(&self, from: NodeId, to: NodeId) -> Weight {
        self.weights[from * self.num_nodes + to]
    }

    pub fn get_distance(&self, from: NodeId, to: NodeId) -> Distance {
        Distance::from_weight(self.get_weight(from, to))
    }

    pub fn set_weight(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        let n = self.num_nodes;
        self.weights[from * n + to] = weight;
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        if from == to {
            warn!(
                "Loop edges are not allowed. Skipped edge! from: {}, to: {}, weight: {}",
                from, to, weight
            );
            return;
        }
        self.set_weight(from, to, weight);
    }

    pub fn add_edge_bidir(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.add_edge(from, to, weight);
        self.add_edge(to, from, weight);
    }

    pub fn row(&self, node: NodeId) -> &[Weight] {
        let start = node * self.num_nodes;
        &self.weights[start..start + self.num_nodes]
    }

    /// The values of the given column, i.e. the distances stored there by an in-place solve
    /// from `source`.
    pub fn column_distances(&self, source: NodeId) -> Vec<Distance> {
        (0..self.num_nodes)
            .map(|node| self.get_distance(node, source))
            .collect()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.num_nodes)
            .all(|i| (0..i).all(|j| self.get_weight(i, j) == self.get_weight(j, i)))
    }

    fn read_from<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rows: Vec<Vec<i64>> = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let s = line?;
            let s = s.trim();
            if s.is_empty() || s.starts_with('c') {
                continue;
            }
            let row = s
                .split_whitespace()
                .map(|token| DistanceMatrix::parse_weight(index, token))
                .collect::<Result<Vec<i64>, Error>>()?;
            rows.push(row);
        }
        DistanceMatrix::from_rows(&rows)
    }

    fn parse_weight(index: usize, token: &str) -> Result<i64, Error> {
        match token {
            "-" | "inf" => Ok(WEIGHT_INFINITY as i64),
            _ => token.parse::<i64>().map_err(|e| Error::Parse {
                line: index + 1,
                message: format!("invalid weight '{}': {}", token, e),
            }),
        }
    }

    fn check_weight(from: NodeId, to: NodeId, weight: i64) -> Result<Weight, Error> {
        if weight < 0 {
            Err(Error::NegativeWeight { from, to, weight })
        } else if weight > WEIGHT_INFINITY as i64 {
            Err(Error::WeightOutOfRange { from, to, weight })
        } else {
            Ok(weight as Weight)
        }
    }
}

/// Prints one row per line. Single digit values get an extra leading space so that small
/// matrices line up in columns.
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for from in 0..self.num_nodes {
            for &weight in self.row(from) {
                if weight < 10 {
                    write!(f, " {} ", weight)?;
                } else {
                    write!(f, "{} ", weight)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "DistanceMatrix ({} nodes)", self.num_nodes)?;
        write!(f, "{}", self)
    }
}
