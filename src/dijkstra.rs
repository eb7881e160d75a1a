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

use crate::constants::{NodeId, INVALID_NODE, WEIGHT_ZERO};
use crate::distance::{Distance, Extension};
use crate::distance_matrix::DistanceMatrix;
use crate::error::Error;
use crate::params::{OverflowPolicy, Params};
use crate::shortest_distances::ShortestDistances;
use crate::visited_set::VisitedSet;

/// Dijkstra's algorithm for dense graphs: instead of a priority queue the next vertex is found by
/// scanning all tentative distances, so every solve takes Θ(n²) time.
///
/// The solver can be reused for any number of matrices with the same number of vertices. Use one
/// solver per thread.
pub struct ShortestPathSolver {
    num_nodes: usize,
    visited: VisitedSet,
    params: Params,
}

impl ShortestPathSolver {
    pub fn new(num_nodes: usize) -> Self {
        ShortestPathSolver::with_params(num_nodes, Params::default())
    }

    pub fn with_params(num_nodes: usize, params: Params) -> Self {
        ShortestPathSolver {
            num_nodes,
            visited: VisitedSet::new(num_nodes),
            params,
        }
    }

    pub fn get_num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn get_params(&self) -> &Params {
        &self.params
    }

    /// Solves in place with vertex 0 as the source, see `solve_in_place`.
    pub fn solve(&mut self, matrix: &mut DistanceMatrix) -> Result<(), Error> {
        self.solve_in_place(matrix, 0)
    }

    /// Replaces column `source` of the matrix with the shortest distances from `source`, i.e.
    /// afterwards `matrix.get_weight(v, source)` is the distance from `source` to `v`. The column
    /// is also where the initial tentative distances are read from, so this is meant for
    /// symmetric matrices. All other entries are left untouched, and if an error is returned the
    /// matrix is not modified at all.
    pub fn solve_in_place(
        &mut self,
        matrix: &mut DistanceMatrix,
        source: NodeId,
    ) -> Result<(), Error> {
        self.check_input(matrix, source)?;
        let mut distances = matrix.column_distances(source);
        self.do_solve(matrix, source, &mut distances, &mut |_, _| {})?;
        for (node, distance) in distances.iter().enumerate() {
            matrix.set_weight(node, source, distance.to_weight());
        }
        Ok(())
    }

    /// Calculates the shortest distances from `source` to all vertices without modifying the
    /// matrix. The initial tentative distances are the weights of the edges leaving `source`.
    pub fn calc_distances(
        &mut self,
        matrix: &DistanceMatrix,
        source: NodeId,
    ) -> Result<ShortestDistances, Error> {
        self.check_input(matrix, source)?;
        let mut distances = matrix
            .row(source)
            .iter()
            .map(|&w| Distance::from(w))
            .collect::<Vec<_>>();
        let settled = self.do_solve(matrix, source, &mut distances, &mut |_, _| {})?;
        Ok(ShortestDistances::new(source, distances, settled))
    }

    fn check_input(&self, matrix: &DistanceMatrix, source: NodeId) -> Result<(), Error> {
        let num_nodes = matrix.get_num_nodes();
        if num_nodes != self.num_nodes {
            return Err(Error::InvalidDimension {
                expected: self.num_nodes,
                actual: num_nodes,
            });
        }
        if num_nodes == 0 {
            return Err(Error::InvalidDimension {
                expected: 1,
                actual: 0,
            });
        }
        if source >= num_nodes {
            return Err(Error::InvalidSource {
                node: source,
                num_nodes,
            });
        }
        let weight = matrix.get_weight(source, source);
        if weight != WEIGHT_ZERO {
            return Err(Error::NonZeroSelfWeight {
                node: source,
                weight,
            });
        }
        Ok(())
    }

    /// Runs the n - 1 select/relax rounds on the given tentative distances and returns the
    /// vertices in the order they were settled. `observer` is called after every round.
    fn do_solve<F>(
        &mut self,
        matrix: &DistanceMatrix,
        source: NodeId,
        distances: &mut [Distance],
        observer: &mut F,
    ) -> Result<Vec<NodeId>, Error>
    where
        F: FnMut(NodeId, &[Distance]),
    {
        debug!(
            "Calculating shortest distances from {} for {} nodes",
            source, self.num_nodes
        );
        self.visited.clear();
        distances[source] = Distance::Finite(WEIGHT_ZERO);
        let mut settled = Vec::with_capacity(self.num_nodes - 1);
        for _ in 1..self.num_nodes {
            let node = self.select_next(source, distances);
            let newly_visited = self.visited.visit(node);
            debug_assert!(newly_visited, "node {} was settled twice", node);
            settled.push(node);
            trace!("settled node {} at distance {}", node, distances[node]);
            self.relax(matrix, source, node, distances)?;
            observer(node, distances);
        }
        debug_assert_eq!(self.visited.len(), self.num_nodes - 1);
        Ok(settled)
    }

    /// Finds the unvisited vertex with the smallest tentative distance. The scan runs in
    /// ascending order and only a strictly smaller distance replaces the current candidate, so
    /// ties go to the lowest index. If all remaining vertices are unreachable the first of them
    /// is returned.
    fn select_next(&self, source: NodeId, distances: &[Distance]) -> NodeId {
        let mut min_node = INVALID_NODE;
        let mut min_distance = Distance::Unreachable;
        for (node, &distance) in distances.iter().enumerate() {
            if node == source || self.visited.is_visited(node) {
                continue;
            }
            if min_node == INVALID_NODE || distance < min_distance {
                min_node = node;
                min_distance = distance;
            }
        }
        min_node
    }

    fn relax(
        &self,
        matrix: &DistanceMatrix,
        source: NodeId,
        node: NodeId,
        distances: &mut [Distance],
    ) -> Result<(), Error> {
        let base = distances[node];
        if !base.is_finite() {
            return Ok(());
        }
        for adj in 0..self.num_nodes {
            if adj == source {
                continue;
            }
            match base.extend(matrix.get_distance(node, adj)) {
                Extension::Distance(distance) => {
                    if distance < distances[adj] {
                        distances[adj] = distance;
                    }
                }
                // an overflowing sum is larger than any finite distance, so it only matters if
                // there is no path to adj yet
                Extension::Overflow if distances[adj].is_finite() => {}
                Extension::Overflow => match self.params.overflow_policy {
                    OverflowPolicy::Error => {
                        return Err(Error::ArithmeticOverflow {
                            from: node,
                            to: adj,
                        });
                    }
                    OverflowPolicy::Unreachable => {
                        warn!(
                            "Distance via {} to {} exceeds the maximum weight, keeping it unreachable",
                            node, adj
                        );
                    }
                },
            }
        }
        Ok(())
    }
}
