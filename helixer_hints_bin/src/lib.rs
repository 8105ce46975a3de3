pub mod gff;
pub mod hints;
pub mod results;
