pub mod d400_overview;
pub mod records;
