pub mod aggregate;

pub use aggregate::{CreateEmployee, Employee};
