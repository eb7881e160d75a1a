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

use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, Weight};
use crate::distance::Distance;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ShortestDistances {
    source: NodeId,
    distances: Vec<Distance>,
    settled: Vec<NodeId>,
}

impl PartialEq for ShortestDistances {
    fn eq(&self, other: &ShortestDistances) -> bool {
        self.source == other.source && self.distances == other.distances
        // the settle order depends on how ties were broken, the distances do not
    }
}

impl ShortestDistances {
    pub fn new(source: NodeId, distances: Vec<Distance>, settled: Vec<NodeId>) -> Self {
        ShortestDistances {
            source,
            distances,
            settled,
        }
    }

    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn get_distance(&self, node: NodeId) -> Distance {
        self.distances[node]
    }

    /// The distance to `node` or `None` if `node` cannot be reached from the source
    pub fn get_weight(&self, node: NodeId) -> Option<Weight> {
        self.distances[node].finite()
    }

    pub fn get_distances(&self) -> &Vec<Distance> {
        &self.distances
    }

    /// The vertices in the order their distances were finalized. The source itself is not
    /// included.
    pub fn get_settled(&self) -> &Vec<NodeId> {
        &self.settled
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distances[node].is_finite()
    }

    pub fn get_num_nodes(&self) -> usize {
        self.distances.len()
    }
}
