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

/// What to do when a finalized distance plus an edge weight no longer fits below
/// `WEIGHT_INFINITY`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Abort the solve with `Error::ArithmeticOverflow`.
    Error,
    /// Treat the overflowing path as if it did not exist. The target keeps its current distance.
    Unreachable,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Params {
    pub overflow_policy: OverflowPolicy,
}

impl Params {
    pub fn new(overflow_policy: OverflowPolicy) -> Self {
        Params { overflow_policy }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::new(OverflowPolicy::Error)
    }
}
