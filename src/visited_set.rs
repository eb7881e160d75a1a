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

use std::u32::MAX;

use crate::constants::NodeId;

/// The set of vertices whose shortest distance has been finalized. Clearing the set only
/// increments a single integer, so a solver can reuse it for many solves.
pub struct VisitedSet {
    visited_flags: Vec<u32>,
    visited_flag: u32,
    num_visited: usize,
}

impl VisitedSet {
    pub fn new(num_nodes: usize) -> Self {
        VisitedSet {
            visited_flags: vec![0; num_nodes],
            visited_flag: 1,
            num_visited: 0,
        }
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited_flags[node] == self.visited_flag
    }

    /// Marks the given node as visited, returns false if it was visited already
    pub fn visit(&mut self, node: NodeId) -> bool {
        if self.is_visited(node) {
            return false;
        }
        self.visited_flags[node] = self.visited_flag;
        self.num_visited += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.num_visited
    }

    pub fn clear(&mut self) {
        if self.visited_flag == MAX {
            self.visited_flags = vec![0; self.visited_flags.len()];
            self.visited_flag = 1;
        } else {
            self.visited_flag += 1;
        }
        self.num_visited = 0;
    }
}

#[cfg(test)]
mod tests {
    use crate::visited_set::VisitedSet;

    #[test]
    fn visit_and_clear() {
        let mut visited = VisitedSet::new(5);
        assert_eq!(0, visited.len());
        assert!(!visited.is_visited(3));
        assert!(visited.visit(3));
        assert!(visited.is_visited(3));
        assert!(!visited.visit(3));
        assert_eq!(1, visited.len());
        visited.clear();
        assert!(!visited.is_visited(3));
        assert_eq!(0, visited.len());
    }

    #[test]
    fn clear_many_times() {
        let mut visited = VisitedSet::new(3);
        visited.visited_flag = MAX_FLAG - 1;
        visited.visit(1);
        visited.clear();
        visited.visit(2);
        assert!(!visited.is_visited(1));
        // wraps around and resets all flags
        visited.clear();
        assert!(!visited.is_visited(1));
        assert!(!visited.is_visited(2));
        assert_eq!(1, visited.visited_flag);
    }

    const MAX_FLAG: u32 = std::u32::MAX;
}
