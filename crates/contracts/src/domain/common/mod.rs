//! Common types shared by product aggregates

pub mod nutrition;

pub use nutrition::NutritionFacts;
