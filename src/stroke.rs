pub mod line;
pub mod smooth;
