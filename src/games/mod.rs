//! Game implementations of the `GameState` contract.

pub mod isolation;
