//! Interstellar trade route search: enumerate candidate routes between two star
//! systems, price their fuel and cargo, and rank them by profit.

pub mod domain;
pub mod infra;
pub mod util;
