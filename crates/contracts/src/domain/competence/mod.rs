pub mod aggregate;

pub use aggregate::Competence;
