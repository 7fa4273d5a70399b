//! Wire contracts shared by the NutriMax frontend and its REST backend.

pub mod domain;
pub mod shared;
