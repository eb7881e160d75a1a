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

use thiserror::Error;

use crate::constants::{NodeId, Weight};

/// Everything that can go wrong when building a distance matrix or solving it.
#[derive(Error, Debug)]
pub enum Error {
    /// The matrix is not square, has no vertices at all or does not match the size the solver
    /// was created for.
    #[error("invalid matrix dimension: expected {expected}, found {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("negative weight {weight} for edge {from} -> {to}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: i64 },

    /// Weights above the 'no edge' sentinel cannot be represented.
    #[error("weight {weight} for edge {from} -> {to} exceeds the maximum weight")]
    WeightOutOfRange { from: NodeId, to: NodeId, weight: i64 },

    #[error("invalid source vertex {node}, the graph has {num_nodes} vertices")]
    InvalidSource { node: NodeId, num_nodes: usize },

    #[error("the distance from vertex {node} to itself must be zero, but was {weight}")]
    NonZeroSelfWeight { node: NodeId, weight: Weight },

    /// The sum of a finalized distance and an edge weight does not fit into `Weight`.
    #[error("arithmetic overflow when relaxing edge {from} -> {to}")]
    ArithmeticOverflow { from: NodeId, to: NodeId },

    #[error("invalid matrix file, line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
