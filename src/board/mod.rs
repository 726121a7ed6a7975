//! Types for cells, digits and the board itself
mod board;
mod digit;
mod positions;

pub use self::{
    board::{BlockDisplay, Board},
    digit::Digit,
    positions::{Block, Cell, Col, Row},
};
