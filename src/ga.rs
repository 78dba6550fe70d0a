pub mod chromosome;
pub mod chromosome_with_fitness;
pub mod error;
pub mod fitness;
pub mod population;
pub mod report;
pub mod selection;
