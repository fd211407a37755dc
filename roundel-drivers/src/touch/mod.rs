//! Touch controller drivers

mod cst816;

pub use cst816::{decode, Cst816, TouchConfig, CST816_ADDRESS};
