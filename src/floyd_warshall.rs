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

use std::cmp;

use crate::constants::{NodeId, Weight, WEIGHT_INFINITY};
use crate::distance::Distance;
use crate::distance_matrix::DistanceMatrix;

/// All pairs shortest distances, used as a reference to check the Dijkstra results. Weights are
/// added as u64 so that the reference never overflows.
pub struct FloydWarshall {
    num_nodes: usize,
    matrix: Vec<u64>,
}

const UNREACHABLE: u64 = std::u64::MAX;

impl FloydWarshall {
    pub fn new(num_nodes: usize) -> Self {
        FloydWarshall {
            num_nodes,
            matrix: vec![UNREACHABLE; num_nodes * num_nodes],
        }
    }

    pub fn prepare(&mut self, distance_matrix: &DistanceMatrix) {
        assert_eq!(
            distance_matrix.get_num_nodes(),
            self.num_nodes,
            "distance matrix has invalid number of nodes"
        );
        let n = self.num_nodes;
        for i in 0..n {
            for (j, &weight) in distance_matrix.row(i).iter().enumerate() {
                self.matrix[i * n + j] = if weight == WEIGHT_INFINITY {
                    UNREACHABLE
                } else {
                    weight as u64
                };
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        self.matrix[i * n + j] = 0;
                    }
                    let weight_ik = self.matrix[i * n + k];
                    let weight_kj = self.matrix[k * n + j];
                    if weight_ik == UNREACHABLE || weight_kj == UNREACHABLE {
                        continue;
                    }
                    let idx = i * n + j;
                    self.matrix[idx] = cmp::min(self.matrix[idx], weight_ik + weight_kj)
                }
            }
        }
    }

    pub fn calc_distance(&self, source: NodeId, target: NodeId) -> Distance {
        let weight = self.matrix[source * self.num_nodes + target];
        if weight < WEIGHT_INFINITY as u64 {
            Distance::Finite(weight as Weight)
        } else {
            Distance::Unreachable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_graph() {
        let inf = WEIGHT_INFINITY as i64;
        let m = DistanceMatrix::from_rows(&[
            vec![0, 6, 10, inf, inf],
            vec![6, 0, inf, 2, inf],
            vec![10, inf, 0, 1, 3],
            vec![inf, 2, 1, 0, 8],
            vec![inf, inf, 3, 8, 0],
        ])
        .unwrap();
        let mut fw = FloydWarshall::new(m.get_num_nodes());
        fw.prepare(&m);
        // 0 -> 1 -> 3 -> 2 -> 4
        assert_eq!(fw.calc_distance(0, 4), Distance::Finite(12));
        assert_eq!(fw.calc_distance(0, 2), Distance::Finite(9));
        assert_eq!(fw.calc_distance(4, 1), Distance::Finite(6));
        assert_eq!(fw.calc_distance(3, 3), Distance::Finite(0));
    }

    #[test]
    fn directed_matrix() {
        // 0 -> 1 -> 2 -> 0, 0 -> 2 and 3 -> 0, nothing leads to 3
        let mut m = DistanceMatrix::new(4);
        m.add_edge(0, 1, 4);
        m.add_edge(1, 2, 1);
        m.add_edge(2, 0, 2);
        m.add_edge(0, 2, 7);
        m.add_edge(3, 0, 1);
        let mut fw = FloydWarshall::new(m.get_num_nodes());
        fw.prepare(&m);
        assert_eq!(fw.calc_distance(0, 2), Distance::Finite(5));
        assert_eq!(fw.calc_distance(1, 0), Distance::Finite(3));
        assert_eq!(fw.calc_distance(2, 1), Distance::Finite(6));
        assert_eq!(fw.calc_distance(3, 2), Distance::Finite(6));
        assert_eq!(fw.calc_distance(0, 3), Distance::Unreachable);
        assert_eq!(fw.calc_distance(2, 3), Distance::Unreachable);
    }

    #[test]
    fn large_weights_stay_finite_below_the_sentinel() {
        // sums are taken in u64, anything at or above the sentinel is reported as unreachable
        let mut m = DistanceMatrix::new(3);
        m.add_edge(0, 1, WEIGHT_INFINITY - 1);
        m.add_edge(1, 2, 1);
        let mut fw = FloydWarshall::new(m.get_num_nodes());
        fw.prepare(&m);
        assert_eq!(fw.calc_distance(0, 1), Distance::Finite(WEIGHT_INFINITY - 1));
        assert_eq!(fw.calc_distance(0, 2), Distance::Unreachable);
    }
}
