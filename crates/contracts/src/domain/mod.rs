pub mod common;

pub mod category;
pub mod competence;
pub mod employee;
