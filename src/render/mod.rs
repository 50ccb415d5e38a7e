//! Diagram-description output for the external renderer.

pub mod uml;

pub use uml::{identifier, render_person, render_population, render_population_with};
