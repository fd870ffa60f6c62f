pub mod results_table;

pub use results_table::results_table;
