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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{Weight, WEIGHT_INFINITY};

/// The (tentative) distance of a vertex from the source. The variant order matters: every finite
/// distance compares less than `Unreachable`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

/// Result of extending a distance by an edge weight
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Extension {
    Distance(Distance),
    Overflow,
}

impl Distance {
    /// Converts a raw matrix entry, `WEIGHT_INFINITY` meaning there is no edge.
    pub fn from_weight(weight: Weight) -> Self {
        if weight == WEIGHT_INFINITY {
            Distance::Unreachable
        } else {
            Distance::Finite(weight)
        }
    }

    /// Converts back into a raw matrix entry.
    pub fn to_weight(self) -> Weight {
        match self {
            Distance::Finite(weight) => weight,
            Distance::Unreachable => WEIGHT_INFINITY,
        }
    }

    pub fn is_finite(self) -> bool {
        self != Distance::Unreachable
    }

    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(weight) => Some(weight),
            Distance::Unreachable => None,
        }
    }

    /// Adds an edge to this distance. Unreachable on either side stays unreachable, a finite sum
    /// that would hit or exceed `WEIGHT_INFINITY` is reported as overflow.
    pub(crate) fn extend(self, edge: Distance) -> Extension {
        match (self, edge) {
            (Distance::Finite(a), Distance::Finite(b)) => match a.checked_add(b) {
                Some(sum) if sum < WEIGHT_INFINITY => Extension::Distance(Distance::Finite(sum)),
                _ => Extension::Overflow,
            },
            _ => Extension::Distance(Distance::Unreachable),
        }
    }
}

impl From<Weight> for Distance {
    fn from(weight: Weight) -> Self {
        Distance::from_weight(weight)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Finite(weight) => write!(f, "{}", weight),
            Distance::Unreachable => write!(f, "-"),
        }
    }
}
