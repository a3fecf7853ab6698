pub mod io_input;
pub mod spinner;
