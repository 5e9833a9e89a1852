pub mod d400_overview;
