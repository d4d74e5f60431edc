//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use std::iter::Peekable;

#[derive(Debug, PartialEq, Clone)]
pub struct Token<T> {
    position: Position,
    ttype: T,
}

impl<T> Token<T> {
    /// Creates a new token.
    pub fn new(ttype: T, loc: Position) -> Self {
        Self {
            position: loc,
            ttype: ttype,
        }
    }

    /// References the inner token type.
    pub fn as_type(&self) -> &T {
        &self.ttype
    }

    /// Transforms the token into its type.
    pub fn take(self) -> T {
        self.ttype
    }

    /// Returns the position in the file where the token was captured.
    pub fn locate(&self) -> &Position {
        &self.position
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
/// (Line, Col)
pub struct Position(usize, usize);

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Creates a new `Position` struct as line 1, col 0.
    pub fn new() -> Self {
        Position(1, 0)
    }

    /// Creates a `Position` struct at a particular location `line`:`col`.
    pub fn place(line: usize, col: usize) -> Self {
        Self(line, col)
    }

    /// Increments the column counter by 1.
    pub fn next_col(&mut self) {
        self.1 += 1;
    }

    /// Increments the column counter by 1. If the current char `c` is a newline,
    /// it will then drop down to the next line.
    pub fn step(&mut self, c: &char) {
        self.next_col();
        if c == &'\n' {
            self.next_line();
        }
    }

    /// Increments the line counter by 1.
    ///
    /// Also resets the column counter to 0.
    pub fn next_line(&mut self) {
        self.0 += 1;
        self.1 = 0;
    }

    /// Access the line (`.0`) number.
    pub fn line(&self) -> usize {
        self.0
    }

    /// Access the col (`.1`) number.
    pub fn col(&self) -> usize {
        self.1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ":{}:{}", self.0, self.1)
    }
}

/// Helps keep the current position in the contents as the characters are consumed.
pub struct TrainCar<T>
where
    T: Iterator<Item = char> + Clone,
{
    contents: Peekable<T>,
    loc: Position,
}

impl<T> TrainCar<T>
where
    T: Iterator<Item = char> + Clone,
{
    /// Creates a new `TrainCar` struct with an initial position (1, 0) and a
    /// train `s`.
    pub fn new(s: T) -> Self {
        Self {
            loc: Position::new(),
            contents: s.peekable(),
        }
    }

    /// Takes the next char in the iterator and steps the `Position` marker
    /// accordingly, if a char exists.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.contents.next()?;
        self.loc.step(&c);
        Some(c)
    }

    /// References the next char in the iterator, if it exists.
    pub fn peek(&mut self) -> Option<&char> {
        self.contents.peek()
    }

    /// Looks `n` chars past the next char without consuming anything.
    ///
    /// `peek_nth(0)` is equivalent to `peek()`.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.contents.clone().nth(n)
    }

    /// Access the position of the last consumed character.
    pub fn locate(&self) -> &Position {
        &self.loc
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn moving_position() {
        let mut pos = Position::new();
        assert_eq!(pos, Position::place(1, 0));
        pos.next_col();
        assert_eq!(pos, Position::place(1, 1));
        pos.next_col();
        assert_eq!(pos, Position::place(1, 2));
        pos.next_line();
        assert_eq!(pos, Position::place(2, 0));
        pos.next_line();
        assert_eq!(pos, Position::place(3, 0));
    }

    #[test]
    fn position_ordering() {
        assert!(Position::place(1, 9) < Position::place(2, 0));
        assert!(Position::place(3, 2) > Position::place(3, 1));
        assert_eq!(Position::place(4, 7).to_string(), ":4:7");
    }

    #[test]
    fn train_car_peeks_ahead() {
        let mut tc = TrainCar::new("ab\ncd".chars());
        assert_eq!(tc.peek_nth(1), Some('b'));
        assert_eq!(tc.consume(), Some('a'));
        assert_eq!(tc.locate(), &Position::place(1, 1));
        tc.consume();
        tc.consume();
        assert_eq!(tc.locate(), &Position::place(2, 0));
        assert_eq!(tc.peek(), Some(&'c'));
    }
}
