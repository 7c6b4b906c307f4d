pub mod d404_big_table;
