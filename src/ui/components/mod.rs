pub mod lyrics;
pub mod results;
pub mod status;
