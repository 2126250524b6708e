// 盤面関連のドメイン層

pub mod coord;
pub mod direction;
pub mod grid;
pub mod token;

pub use coord::Coord;
pub use direction::Direction;
pub use grid::Grid;
pub use token::TokenType;
