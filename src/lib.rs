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

#[macro_use]
extern crate log;

pub use crate::constants::*;
pub use crate::dijkstra::ShortestPathSolver;
pub use crate::distance::Distance;
pub use crate::distance_matrix::DistanceMatrix;
pub use crate::error::Error;
pub use crate::params::{OverflowPolicy, Params};
pub use crate::shortest_distances::ShortestDistances;

mod constants;
mod dijkstra;
mod distance;
mod distance_matrix;
mod error;
#[cfg(test)]
mod floyd_warshall;
mod params;
mod shortest_distances;
mod visited_set;

/// Replaces column 0 of the given matrix with the shortest distances from vertex 0, so that
/// afterwards `matrix.get_weight(v, 0)` is the distance from vertex 0 to `v`.
pub fn solve(matrix: &mut DistanceMatrix) -> Result<(), Error> {
    solve_from(matrix, 0)
}

/// Like `solve()`, but for an arbitrary source vertex, whose column is replaced.
pub fn solve_from(matrix: &mut DistanceMatrix, source: NodeId) -> Result<(), Error> {
    create_solver(matrix).solve_in_place(matrix, source)
}

/// Like `solve_from()`, but allows specifying how arithmetic overflow is handled.
pub fn solve_with_params(
    matrix: &mut DistanceMatrix,
    source: NodeId,
    params: &Params,
) -> Result<(), Error> {
    ShortestPathSolver::with_params(matrix.get_num_nodes(), *params).solve_in_place(matrix, source)
}

/// Calculates the shortest distances from `source` to all vertices. The matrix is not modified.
pub fn calc_distances(matrix: &DistanceMatrix, source: NodeId) -> Result<ShortestDistances, Error> {
    create_solver(matrix).calc_distances(matrix, source)
}

/// Creates a `ShortestPathSolver` that can be used to run many calculations on matrices of the
/// same size in a row. Use one `ShortestPathSolver` for each thread.
pub fn create_solver(matrix: &DistanceMatrix) -> ShortestPathSolver {
    ShortestPathSolver::new(matrix.get_num_nodes())
}
