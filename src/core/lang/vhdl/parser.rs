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

//! Interface parser: turns the token stream of a VHDL source text into the
//! `Entity` it declares.
//!
//! The parser walks an explicit index over the borrowed tokens and moves
//! through a small set of states, one entity at a time. It stops on the first
//! structural error and never returns a partial entity.

use super::super::lexer::{Position, Token};
use super::entity::Entity;
use super::error::{
    Expected, Found, ParseError, UnbalancedParenError, UnsupportedConstruct, VhdlError,
};
use super::interface::{tokens_to_string, Direction, Generic, GenericClass, Port};
use super::token::{Delimiter, Identifier, Keyword, VhdlToken};
use std::collections::HashSet;

/// Parses the first entity declared in `tokens`.
pub fn parse(tokens: &[Token<VhdlToken>]) -> Result<Entity, VhdlError> {
    Ok(Parser::parse_with_diagnostics(tokens)?.0)
}

/// Parses every entity declared in `tokens`, in source order.
pub fn parse_all(tokens: &[Token<VhdlToken>]) -> Result<Vec<Entity>, VhdlError> {
    Ok(Parser::parse_all_with_diagnostics(tokens)?.0)
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum State {
    Init,
    InEntityHeader,
    /// Holds the position of the clause's opening `(`.
    InGenericClause(Position),
    InPortClause(Position),
    AfterEnd,
    Done,
}

/// What ends a run of tokens collected from inside an interface clause.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Collect {
    /// A subtype indication ends before a top-level `:=` or `bus`.
    Subtype,
    /// A default expression ends at the declaration boundary.
    Expression,
    /// An unparsed generic declaration may hold parameter lists and generic maps.
    Opaque,
}

/// The pieces of an entity gathered while its declaration is being parsed.
#[derive(Debug)]
struct Draft {
    name: Option<Identifier>,
    pos: Position,
    generics: Vec<Generic>,
    ports: Vec<Port>,
    /// Generics and ports share the entity's declarative region.
    names: HashSet<Identifier>,
    has_generic_clause: bool,
    has_port_clause: bool,
}

impl Draft {
    fn new() -> Self {
        Self {
            name: None,
            pos: Position::new(),
            generics: Vec::new(),
            ports: Vec::new(),
            names: HashSet::new(),
            has_generic_clause: false,
            has_port_clause: false,
        }
    }

    fn add_generic(&mut self, generic: Generic, pos: &Position) -> Result<(), VhdlError> {
        if self.names.insert(generic.get_name().clone()) == false {
            return Err(ParseError::DuplicateGeneric {
                name: generic.get_name().to_string(),
                position: pos.clone(),
            }
            .into());
        }
        self.generics.push(generic);
        Ok(())
    }

    fn add_port(&mut self, port: Port, pos: &Position) -> Result<(), VhdlError> {
        if self.names.insert(port.get_name().clone()) == false {
            return Err(ParseError::DuplicatePort {
                name: port.get_name().to_string(),
                position: pos.clone(),
            }
            .into());
        }
        self.ports.push(port);
        Ok(())
    }
}

#[derive(Debug)]
pub struct Parser<'a> {
    tokens: &'a [Token<VhdlToken>],
    index: usize,
    diagnostics: Vec<UnsupportedConstruct>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<VhdlToken>]) -> Self {
        Self {
            tokens: tokens,
            index: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parses the first entity in `tokens` and reports the constructs that were
    /// skipped or kept as opaque text along the way.
    pub fn parse_with_diagnostics(
        tokens: &'a [Token<VhdlToken>],
    ) -> Result<(Entity, Vec<UnsupportedConstruct>), VhdlError> {
        let mut parser = Self::new(tokens);
        let entity = parser.next_entity()?;
        Ok((entity, parser.diagnostics))
    }

    /// Parses every entity in `tokens` and reports the constructs that were
    /// skipped or kept as opaque text along the way.
    ///
    /// A source text without any entity produces an empty list.
    pub fn parse_all_with_diagnostics(
        tokens: &'a [Token<VhdlToken>],
    ) -> Result<(Vec<Entity>, Vec<UnsupportedConstruct>), VhdlError> {
        let mut parser = Self::new(tokens);
        let mut entities = Vec::new();
        while parser.has_entity_ahead() == true {
            entities.push(parser.next_entity()?);
        }
        Ok((entities, parser.diagnostics))
    }

    /// Runs the state machine over the next entity declaration.
    pub fn next_entity(&mut self) -> Result<Entity, VhdlError> {
        let mut draft = Draft::new();
        let mut state = State::Init;
        while state != State::Done {
            state = match state {
                State::Init => self.enter_entity(&mut draft)?,
                State::InEntityHeader => self.step_header(&mut draft)?,
                State::InGenericClause(open) => self.generic_clause(&mut draft, open)?,
                State::InPortClause(open) => self.port_clause(&mut draft, open)?,
                State::AfterEnd => self.close_entity(&draft)?,
                State::Done => State::Done,
            };
        }
        match draft.name {
            Some(name) => Ok(Entity::new(name, draft.generics, draft.ports, draft.pos)),
            None => Err(self.unexpected(Expected::one("entity"))),
        }
    }

    /// Checks if a design-unit `entity` keyword remains in the stream.
    fn has_entity_ahead(&self) -> bool {
        (self.index..self.tokens.len()).any(|i| self.is_entity_unit(i))
    }

    /// Checks if the token at index `i` is an `entity` keyword that begins a
    /// design unit rather than a direct instantiation.
    fn is_entity_unit(&self, i: usize) -> bool {
        let is_entity = self
            .tokens
            .get(i)
            .map_or(false, |t| t.as_type().check_keyword(&Keyword::Entity));
        let at_boundary = match i {
            0 => true,
            _ => self.tokens[i - 1]
                .as_type()
                .check_delimiter(&Delimiter::Terminator),
        };
        is_entity && at_boundary
    }

    /// Skips library and use clauses until the `entity` keyword, then takes the
    /// name and `is`.
    fn enter_entity(&mut self, draft: &mut Draft) -> Result<State, VhdlError> {
        while self.is_entity_unit(self.index) == false {
            if self.advance().is_none() == true {
                return Err(self.unexpected(Expected::one("entity")));
            }
        }
        if let Some(t) = self.advance() {
            draft.pos = t.locate().clone();
        }
        let (name, _) = self.expect_identifier()?;
        self.expect_keyword(&Keyword::Is)?;
        draft.name = Some(name);
        Ok(State::InEntityHeader)
    }

    /// Decides where to go from inside the entity header, outside of any clause.
    fn step_header(&mut self, draft: &mut Draft) -> Result<State, VhdlError> {
        let kw = match self.peek() {
            Some(t) => t.as_type().as_keyword().cloned(),
            None => {
                return Err(self.unexpected(Expected::any(&["generic", "port", "end"])));
            }
        };
        match kw {
            Some(Keyword::Generic) => {
                if draft.has_generic_clause == true || draft.has_port_clause == true {
                    return Err(self.unexpected(Expected::any(&["port", "end"])));
                }
                self.advance();
                let open = self.expect_delimiter(&Delimiter::ParenL)?;
                draft.has_generic_clause = true;
                Ok(State::InGenericClause(open))
            }
            Some(Keyword::Port) => {
                if draft.has_port_clause == true {
                    return Err(self.unexpected(Expected::one("end")));
                }
                self.advance();
                let open = self.expect_delimiter(&Delimiter::ParenL)?;
                draft.has_port_clause = true;
                Ok(State::InPortClause(open))
            }
            Some(Keyword::End) if self.closes_inner_construct() == false => {
                self.advance();
                Ok(State::AfterEnd)
            }
            _ => {
                self.skip_item()?;
                Ok(State::InEntityHeader)
            }
        }
    }

    /// Checks if the `end` at the cursor closes a nested construct such as a
    /// process or function body.
    fn closes_inner_construct(&self) -> bool {
        match self.peek_nth(1).and_then(|t| t.as_type().as_keyword()) {
            Some(kw) => kw.is_inner_ending(),
            None => false,
        }
    }

    /// Skips one entity declarative item or passive statement.
    fn skip_item(&mut self) -> Result<(), VhdlError> {
        let start = match self.advance() {
            Some(t) => t,
            None => return Err(self.unexpected(Expected::one("end"))),
        };
        let construct = match start.as_type() {
            VhdlToken::Keyword(Keyword::Begin) => String::from("entity statement part"),
            t => format!("entity item beginning with \"{}\"", t),
        };
        self.diagnostics.push(UnsupportedConstruct {
            construct: construct,
            position: start.locate().clone(),
        });
        if start.as_type().check_keyword(&Keyword::Begin) == true
            || start.as_type().check_delimiter(&Delimiter::Terminator) == true
        {
            return Ok(());
        }
        let mut depth: usize = 0;
        loop {
            let t = match self.advance() {
                Some(t) => t,
                None => return Err(self.unexpected(Expected::one("end"))),
            };
            match t.as_type() {
                VhdlToken::Delimiter(Delimiter::ParenL) => depth += 1,
                VhdlToken::Delimiter(Delimiter::ParenR) => depth = depth.saturating_sub(1),
                VhdlToken::Delimiter(Delimiter::Terminator) if depth == 0 => return Ok(()),
                _ => (),
            }
        }
    }

    fn generic_clause(&mut self, draft: &mut Draft, open: Position) -> Result<State, VhdlError> {
        self.check_clause_open(open)?;
        let kw = self.peek().and_then(|t| t.as_type().as_keyword()).cloned();
        match kw {
            Some(Keyword::Type) => self.opaque_generic(draft, open, GenericClass::Type)?,
            Some(Keyword::Function)
            | Some(Keyword::Procedure)
            | Some(Keyword::Impure)
            | Some(Keyword::Pure) => self.opaque_generic(draft, open, GenericClass::Subprogram)?,
            Some(Keyword::Package) => self.opaque_generic(draft, open, GenericClass::Package)?,
            _ => self.constant_generic(draft, open)?,
        }
        match self.end_of_declaration(open)? {
            true => Ok(State::InEntityHeader),
            false => Ok(State::InGenericClause(open)),
        }
    }

    fn port_clause(&mut self, draft: &mut Draft, open: Position) -> Result<State, VhdlError> {
        self.check_clause_open(open)?;
        self.port_declaration(draft, open)?;
        match self.end_of_declaration(open)? {
            true => Ok(State::InEntityHeader),
            false => Ok(State::InPortClause(open)),
        }
    }

    /// Verifies the next declaration does not begin where the clause should have
    /// already been closed.
    fn check_clause_open(&self, open: Position) -> Result<(), VhdlError> {
        match self.peek().and_then(|t| t.as_type().as_keyword()) {
            Some(Keyword::Port) | Some(Keyword::Generic) | Some(Keyword::End)
            | Some(Keyword::Begin) => Err(self.unbalanced(open)),
            _ => match self.peek() {
                Some(_) => Ok(()),
                None => Err(self.unbalanced(open)),
            },
        }
    }

    /// Consumes the `;` between two declarations or the `) ;` that closes the
    /// clause.
    ///
    /// Returns `true` when the clause is closed.
    fn end_of_declaration(&mut self, open: Position) -> Result<bool, VhdlError> {
        match self.peek().map(|t| t.as_type()) {
            Some(VhdlToken::Delimiter(Delimiter::Terminator)) => {
                self.advance();
                Ok(false)
            }
            Some(VhdlToken::Delimiter(Delimiter::ParenR)) => {
                self.advance();
                self.expect_delimiter(&Delimiter::Terminator)?;
                Ok(true)
            }
            Some(_) => Err(self.unexpected(Expected::any(&[";", ")"]))),
            None => Err(self.unbalanced(open)),
        }
    }

    /// - interface_constant_declaration ::= [constant] identifier_list : [ in ] subtype_indication [ := static_expression ]
    fn constant_generic(&mut self, draft: &mut Draft, open: Position) -> Result<(), VhdlError> {
        self.accept_keyword(&Keyword::Constant);
        let names = self.identifier_list()?;
        self.expect_delimiter(&Delimiter::Colon)?;
        self.accept_keyword(&Keyword::In);
        let type_desc = self.subtype_indication(open)?;
        let default = self.default_expression(open)?;
        for (name, pos) in names {
            draft.add_generic(
                Generic::new(name, type_desc.clone(), default.clone(), GenericClass::Constant),
                &pos,
            )?;
        }
        Ok(())
    }

    /// Keeps a type, subprogram, or package generic as its declaration text.
    fn opaque_generic(
        &mut self,
        draft: &mut Draft,
        open: Position,
        class: GenericClass,
    ) -> Result<(), VhdlError> {
        let mut text = Vec::new();
        let start = match self.advance() {
            Some(t) => t,
            None => return Err(self.unbalanced(open)),
        };
        text.push(start.as_type().clone());
        // impure/pure lead into the function keyword
        if start.as_type().check_keyword(&Keyword::Impure) == true
            || start.as_type().check_keyword(&Keyword::Pure) == true
        {
            let t = self.expect_keyword(&Keyword::Function)?;
            text.push(t.as_type().clone());
        }
        let (name, pos) = self.expect_identifier()?;
        text.push(VhdlToken::Identifier(name.clone()));
        text.append(&mut self.collect(open, Collect::Opaque)?);

        self.diagnostics.push(UnsupportedConstruct {
            construct: format!("{} generic", class),
            position: start.locate().clone(),
        });
        draft.add_generic(
            Generic::new(name, tokens_to_string(&text), None, class),
            &pos,
        )
    }

    /// - interface_signal_declaration ::= [signal] identifier_list : mode subtype_indication [ bus ] [ := static_expression ]
    fn port_declaration(&mut self, draft: &mut Draft, open: Position) -> Result<(), VhdlError> {
        self.accept_keyword(&Keyword::Signal);
        let names = self.identifier_list()?;
        self.expect_delimiter(&Delimiter::Colon)?;
        let direction = match self
            .peek()
            .and_then(|t| t.as_type().as_keyword())
            .and_then(|kw| Direction::from_keyword(kw))
        {
            Some(d) => {
                self.advance();
                d
            }
            None => {
                return Err(self.unexpected(Expected::any(&[
                    "in", "out", "inout", "buffer", "linkage",
                ])))
            }
        };
        let type_desc = self.subtype_indication(open)?;
        self.accept_keyword(&Keyword::Bus);
        let default = self.default_expression(open)?;
        for (name, pos) in names {
            draft.add_port(
                Port::new(name, direction, type_desc.clone(), default.clone()),
                &pos,
            )?;
        }
        Ok(())
    }

    /// - identifier_list ::= identifier { , identifier }
    fn identifier_list(&mut self) -> Result<Vec<(Identifier, Position)>, VhdlError> {
        let mut names = vec![self.expect_identifier()?];
        while self.accept_delimiter(&Delimiter::Comma) == true {
            names.push(self.expect_identifier()?);
        }
        Ok(names)
    }

    fn subtype_indication(&mut self, open: Position) -> Result<String, VhdlError> {
        let tokens = self.collect(open, Collect::Subtype)?;
        match tokens.is_empty() {
            true => Err(self.unexpected(Expected::one("type mark"))),
            false => Ok(tokens_to_string(&tokens)),
        }
    }

    /// Takes the optional `:= expression` that ends a declaration.
    fn default_expression(&mut self, open: Position) -> Result<Option<String>, VhdlError> {
        if self.accept_delimiter(&Delimiter::VarAssign) == false {
            return Ok(None);
        }
        let tokens = self.collect(open, Collect::Expression)?;
        match tokens.is_empty() {
            true => Err(self.unexpected(Expected::one("expression"))),
            false => Ok(Some(tokens_to_string(&tokens))),
        }
    }

    /// Gathers tokens up to the end of the current piece of a declaration while
    /// keeping track of nested parentheses.
    ///
    /// The clause opened at `open` must still be open when the piece ends.
    fn collect(&mut self, open: Position, until: Collect) -> Result<Vec<VhdlToken>, VhdlError> {
        let mut result = Vec::new();
        let mut nested: Vec<Position> = Vec::new();
        loop {
            let t = match self.peek() {
                Some(t) => t,
                None => {
                    return Err(self.unbalanced(nested.last().cloned().unwrap_or(open)));
                }
            };
            let depth = nested.len();
            match t.as_type() {
                VhdlToken::Delimiter(Delimiter::ParenL) => nested.push(t.locate().clone()),
                VhdlToken::Delimiter(Delimiter::ParenR) => {
                    if nested.pop().is_none() == true {
                        break;
                    }
                }
                VhdlToken::Delimiter(Delimiter::Terminator) => {
                    if depth == 0 {
                        break;
                    } else if until != Collect::Opaque {
                        return Err(self.unbalanced(nested[depth - 1]));
                    }
                }
                VhdlToken::Delimiter(Delimiter::VarAssign)
                    if depth == 0 && until == Collect::Subtype =>
                {
                    break
                }
                VhdlToken::Keyword(Keyword::Bus) if depth == 0 && until == Collect::Subtype => {
                    break
                }
                VhdlToken::Keyword(Keyword::Generic) if until == Collect::Opaque => (),
                VhdlToken::Keyword(Keyword::Port)
                | VhdlToken::Keyword(Keyword::Generic)
                | VhdlToken::Keyword(Keyword::End)
                | VhdlToken::Keyword(Keyword::Begin) => {
                    return Err(self.unbalanced(nested.last().cloned().unwrap_or(open)));
                }
                _ => (),
            }
            result.push(t.as_type().clone());
            self.index += 1;
        }
        Ok(result)
    }

    /// References the token under the cursor.
    fn peek(&self) -> Option<&'a Token<VhdlToken>> {
        self.tokens.get(self.index)
    }

    /// References the token `n` places past the cursor.
    fn peek_nth(&self, n: usize) -> Option<&'a Token<VhdlToken>> {
        self.tokens.get(self.index + n)
    }

    /// Moves the cursor forward and returns the token it passed over.
    fn advance(&mut self) -> Option<&'a Token<VhdlToken>> {
        let t = self.tokens.get(self.index)?;
        self.index += 1;
        Some(t)
    }

    /// Moves past the keyword `kw` if it is under the cursor.
    fn accept_keyword(&mut self, kw: &Keyword) -> bool {
        match self.peek().map_or(false, |t| t.as_type().check_keyword(kw)) {
            true => {
                self.index += 1;
                true
            }
            false => false,
        }
    }

    /// Moves past the delimiter `d` if it is under the cursor.
    fn accept_delimiter(&mut self, d: &Delimiter) -> bool {
        match self.peek().map_or(false, |t| t.as_type().check_delimiter(d)) {
            true => {
                self.index += 1;
                true
            }
            false => false,
        }
    }

    fn expect_keyword(&mut self, kw: &Keyword) -> Result<&'a Token<VhdlToken>, VhdlError> {
        match self.peek() {
            Some(t) if t.as_type().check_keyword(kw) == true => {
                self.index += 1;
                Ok(t)
            }
            _ => Err(self.unexpected(Expected::one(kw.as_str()))),
        }
    }

    /// Takes the delimiter `d` and returns its position.
    fn expect_delimiter(&mut self, d: &Delimiter) -> Result<Position, VhdlError> {
        match self.peek() {
            Some(t) if t.as_type().check_delimiter(d) == true => {
                self.index += 1;
                Ok(t.locate().clone())
            }
            _ => Err(self.unexpected(Expected::one(d.as_str()))),
        }
    }

    fn expect_identifier(&mut self) -> Result<(Identifier, Position), VhdlError> {
        match self.peek() {
            Some(t) => match t.as_type().as_identifier() {
                Some(id) => {
                    self.index += 1;
                    Ok((id.clone(), t.locate().clone()))
                }
                None => Err(self.unexpected(Expected::one("identifier"))),
            },
            None => Err(self.unexpected(Expected::one("identifier"))),
        }
    }

    /// Handles `[entity] [name] ;` after the entity's `end` keyword.
    fn close_entity(&mut self, draft: &Draft) -> Result<State, VhdlError> {
        self.accept_keyword(&Keyword::Entity);
        if let Some(t) = self.peek() {
            if let Some(id) = t.as_type().as_identifier() {
                if let Some(name) = &draft.name {
                    if id != name {
                        return Err(ParseError::NameMismatch {
                            expected: name.to_string(),
                            found: id.to_string(),
                            position: t.locate().clone(),
                        }
                        .into());
                    }
                }
                self.index += 1;
            }
        }
        self.expect_delimiter(&Delimiter::Terminator)?;
        Ok(State::Done)
    }

    /// Computes the position just past the final token.
    fn eof_position(&self) -> Position {
        match self.tokens.last() {
            Some(t) => {
                let width = t.as_type().to_string().chars().count();
                Position::place(t.locate().line(), t.locate().col() + width)
            }
            None => Position::new(),
        }
    }

    /// Reports that the token under the cursor is not one of `expected`.
    fn unexpected(&self, expected: Expected) -> VhdlError {
        match self.peek() {
            Some(t) => ParseError::Unexpected {
                found: Found::Token(t.as_type().to_string()),
                expected: expected,
                position: t.locate().clone(),
            },
            None => ParseError::Unexpected {
                found: Found::Eof,
                expected: expected,
                position: self.eof_position(),
            },
        }
        .into()
    }

    /// Reports that the parenthesis opened at `opened_at` is still open at the
    /// token under the cursor.
    fn unbalanced(&self, opened_at: Position) -> VhdlError {
        let (found, position) = match self.peek() {
            Some(t) => (
                Found::Token(t.as_type().to_string()),
                t.locate().clone(),
            ),
            None => (Found::Eof, self.eof_position()),
        };
        UnbalancedParenError {
            opened_at: opened_at,
            found: found,
            position: position,
        }
        .into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::lang::vhdl::token::VhdlTokenizer;

    const ALU: &str = "entity alu is generic ( WIDTH : integer := 8 ) ; port ( clk : in std_logic ; a, b : in std_logic_vector(WIDTH-1 downto 0); y : out std_logic_vector(WIDTH-1 downto 0) ) ; end entity alu ;";

    fn tokens(s: &str) -> Vec<Token<VhdlToken>> {
        VhdlTokenizer::tokenize(s).unwrap()
    }

    fn id(s: &str) -> Identifier {
        Identifier::Basic(s.to_owned())
    }

    fn port(name: &str, direction: Direction, type_desc: &str) -> Port {
        Port::new(id(name), direction, type_desc.to_owned(), None)
    }

    #[test]
    fn alu_end_to_end() {
        let ent = parse(&tokens(ALU)).unwrap();
        assert_eq!(ent.get_name(), &id("alu"));
        assert_eq!(
            ent.get_generics(),
            &vec![Generic::new(
                id("WIDTH"),
                "integer".to_owned(),
                Some("8".to_owned()),
                GenericClass::Constant
            )]
        );
        let vector = "std_logic_vector(WIDTH-1 downto 0)";
        assert_eq!(
            ent.get_ports(),
            &vec![
                port("clk", Direction::In, "std_logic"),
                port("a", Direction::In, vector),
                port("b", Direction::In, vector),
                port("y", Direction::Out, vector),
            ]
        );
    }

    #[test]
    fn multi_line_file_matches_single_line() {
        let contents = std::fs::read_to_string("./tests/data/vhdl/alu.vhd").unwrap();
        let from_file = parse(&tokens(&contents)).unwrap();
        let from_line = parse(&tokens(ALU)).unwrap();
        assert_eq!(from_file.get_name(), from_line.get_name());
        assert_eq!(from_file.get_generics(), from_line.get_generics());
        assert_eq!(from_file.get_ports(), from_line.get_ports());
        // the entity keyword follows the library and use clauses
        assert_eq!(from_file.get_position(), &Position::place(11, 1));
    }

    #[test]
    fn interface_prefixes_and_defaults() {
        let contents = std::fs::read_to_string("./tests/data/vhdl/fifo.vhd").unwrap();
        let (ent, diagnostics) = Parser::parse_with_diagnostics(&tokens(&contents)).unwrap();
        assert_eq!(diagnostics.len(), 0);
        assert_eq!(ent.get_name(), &id("fifo"));

        let generics = ent.get_generics();
        assert_eq!(
            generics
                .iter()
                .map(|g| g.get_name().to_string())
                .collect::<Vec<String>>(),
            vec!["DEPTH", "DATA_W", "FALL_THROUGH", "RESET_VALUE"]
        );
        assert_eq!(generics[0].get_type(), "positive");
        assert_eq!(generics[0].get_default(), Some(&String::from("16")));
        assert_eq!(generics[2].get_default(), None);
        assert_eq!(generics[3].get_type(), "std_logic_vector(31 downto 0)");
        assert_eq!(
            generics[3].get_default(),
            Some(&String::from("(others => '0')"))
        );

        let ports = ent.get_ports();
        assert_eq!(
            ports
                .iter()
                .map(|p| p.get_name().to_string())
                .collect::<Vec<String>>(),
            vec![
                "sys_clk",
                "rst_n",
                "wr_en",
                "rd_en",
                "data_in",
                "data_out",
                "count",
                "full",
                "empty",
                "data_clk_valid",
                "mode"
            ]
        );
        assert_eq!(ports[6].get_direction(), &Direction::Buffer);
        assert_eq!(ports[6].get_type(), "unsigned(4 downto 0)");
        assert_eq!(ports[6].get_default(), Some(&String::from("(others => '0')")));
        assert_eq!(ports[10].get_type(), "integer range 0 to 3");
        assert_eq!(ports[8], port("empty", Direction::Out, "std_logic"));
    }

    #[test]
    fn comma_list_expands() {
        let ent = parse(&tokens(
            "entity e is port (a, b : in std_logic; c, d, e : inout bit bus := '1'); end;",
        ))
        .unwrap();
        assert_eq!(ent.get_ports().len(), 5);
        assert_eq!(ent.get_ports()[0], port("a", Direction::In, "std_logic"));
        assert_eq!(ent.get_ports()[1], port("b", Direction::In, "std_logic"));
        for p in &ent.get_ports()[2..] {
            assert_eq!(p.get_direction(), &Direction::InOut);
            assert_eq!(p.get_type(), "bit");
            assert_eq!(p.get_default(), Some(&String::from("'1'")));
        }
    }

    #[test]
    fn missing_paren_before_port() {
        let err = parse(&tokens(
            "entity alu is generic ( WIDTH : integer := 8 ; port ( clk : in std_logic ) ; end entity alu ;",
        ))
        .unwrap_err();
        assert_eq!(
            err,
            VhdlError::UnbalancedParen(UnbalancedParenError {
                opened_at: Position::place(1, 23),
                found: Found::Token(String::from("port")),
                position: Position::place(1, 48),
            })
        );
    }

    #[test]
    fn unbalanced_paren_terminates() {
        // input ends inside the type's range
        let err = parse(&tokens("entity e is port ( a : in std_logic_vector(7 downto 0")).unwrap_err();
        match err {
            VhdlError::UnbalancedParen(e) => {
                assert_eq!(e.opened_at, Position::place(1, 43));
                assert_eq!(e.found, Found::Eof);
            }
            _ => panic!("expected unbalanced parenthesis error"),
        }
        // a terminator inside the type's range
        let err = parse(&tokens(
            "entity e is port ( a : in std_logic_vector(7 downto 0; b : out bit ); end;",
        ))
        .unwrap_err();
        match err {
            VhdlError::UnbalancedParen(e) => {
                assert_eq!(e.found, Found::Token(String::from(";")))
            }
            _ => panic!("expected unbalanced parenthesis error"),
        }
        // the clause never closes before the entity ends
        let err = parse(&tokens("entity e is port ( a : in bit; end entity;")).unwrap_err();
        match err {
            VhdlError::UnbalancedParen(e) => {
                assert_eq!(e.opened_at, Position::place(1, 18));
                assert_eq!(e.found, Found::Token(String::from("end")));
            }
            _ => panic!("expected unbalanced parenthesis error"),
        }
    }

    #[test]
    fn closing_name() {
        let err = parse(&tokens("entity foo is\nend entity bar;")).unwrap_err();
        assert_eq!(
            err,
            VhdlError::Parse(ParseError::NameMismatch {
                expected: String::from("foo"),
                found: String::from("bar"),
                position: Position::place(2, 12),
            })
        );
        // names compare without case
        let ent = parse(&tokens("ENTITY Foo IS END FOO;")).unwrap();
        assert_eq!(ent.get_name().to_string(), "Foo");
        // the terminator is required
        let err = parse(&tokens("entity foo is end entity foo")).unwrap_err();
        assert_eq!(
            err,
            VhdlError::Parse(ParseError::Unexpected {
                found: Found::Eof,
                expected: Expected::one(";"),
                position: Position::place(1, 29),
            })
        );
    }

    #[test]
    fn duplicate_names() {
        let err = parse(&tokens(
            "entity e is generic (N : natural; n : natural); end;",
        ))
        .unwrap_err();
        assert_eq!(
            err,
            VhdlError::Parse(ParseError::DuplicateGeneric {
                name: String::from("n"),
                position: Position::place(1, 35),
            })
        );
        let err = parse(&tokens("entity e is port (a, A : in bit); end;")).unwrap_err();
        assert_eq!(
            err,
            VhdlError::Parse(ParseError::DuplicatePort {
                name: String::from("A"),
                position: Position::place(1, 22),
            })
        );
        // extended identifiers keep their case
        let ent = parse(&tokens("entity e is port (\\a\\, \\A\\ : in bit); end;")).unwrap();
        assert_eq!(ent.get_ports().len(), 2);
    }

    #[test]
    fn port_cannot_reuse_generic_name() {
        let err = parse(&tokens(
            "entity e is generic (D : integer := 1); port (d : in std_logic); end;",
        ))
        .unwrap_err();
        assert_eq!(
            err,
            VhdlError::Parse(ParseError::DuplicatePort {
                name: String::from("d"),
                position: Position::place(1, 47),
            })
        );
        // an extended identifier is a different name
        let ent = parse(&tokens(
            "entity e is generic (D : integer := 1); port (\\d\\ : in std_logic); end;",
        ))
        .unwrap();
        assert_eq!(ent.get_ports().len(), 1);
    }

    #[test]
    fn direction_is_required() {
        let err = parse(&tokens("entity e is port (a : std_logic); end;")).unwrap_err();
        match err {
            VhdlError::Parse(ParseError::Unexpected {
                found, expected, ..
            }) => {
                assert_eq!(found, Found::Token(String::from("std_logic")));
                assert_eq!(expected.contains("in"), true);
                assert_eq!(expected.contains("linkage"), true);
            }
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn structural_errors() {
        // no entity at all
        let err = parse(&tokens("library ieee; use ieee.std_logic_1164.all;")).unwrap_err();
        match err {
            VhdlError::Parse(ParseError::Unexpected {
                found, expected, ..
            }) => {
                assert_eq!(found, Found::Eof);
                assert_eq!(expected, Expected::one("entity"));
            }
            _ => panic!("expected parse error"),
        }
        // missing `is`
        let err = parse(&tokens("entity e port (a : in bit); end;")).unwrap_err();
        assert_eq!(err.locate(), &Position::place(1, 10));
        // missing type
        let err = parse(&tokens("entity e is port (a : in ); end;")).unwrap_err();
        match err {
            VhdlError::Parse(ParseError::Unexpected { expected, .. }) => {
                assert_eq!(expected, Expected::one("type mark"))
            }
            _ => panic!("expected parse error"),
        }
        // trailing terminator inside the clause
        let err = parse(&tokens("entity e is port (a : in bit;); end;")).unwrap_err();
        match err {
            VhdlError::Parse(ParseError::Unexpected { found, .. }) => {
                assert_eq!(found, Found::Token(String::from(")")))
            }
            _ => panic!("expected parse error"),
        }
        // empty input
        assert_eq!(parse(&[]).is_err(), true);
    }

    #[test]
    fn opaque_generics_and_entity_items() {
        let contents = std::fs::read_to_string("./tests/data/vhdl/generics2008.vhd").unwrap();
        let (ent, diagnostics) = Parser::parse_with_diagnostics(&tokens(&contents)).unwrap();
        let generics = ent.get_generics();
        assert_eq!(generics.len(), 4);
        assert_eq!(generics[0].get_class(), &GenericClass::Type);
        assert_eq!(generics[0].get_type(), "type element_t");
        assert_eq!(generics[1].get_class(), &GenericClass::Subprogram);
        assert_eq!(generics[1].get_name(), &id("less"));
        assert_eq!(
            generics[1].get_type(),
            "function less(l, r : element_t) return boolean is <>"
        );
        assert_eq!(generics[2].get_class(), &GenericClass::Package);
        assert_eq!(
            generics[2].get_type(),
            "package math_pkg is new work.generic_math generic map(<>)"
        );
        assert_eq!(generics[3].get_class(), &GenericClass::Constant);
        assert_eq!(ent.get_ports().len(), 4);

        assert_eq!(
            diagnostics
                .iter()
                .map(|d| d.construct.as_str())
                .collect::<Vec<&str>>(),
            vec![
                "type generic",
                "subprogram generic",
                "package generic",
                "entity item beginning with \"constant\"",
                "entity statement part",
                "entity item beginning with \"assert\"",
            ]
        );
    }

    #[test]
    fn inner_end_is_skipped() {
        let ent = parse(&tokens(
            "entity e is port (clk : in bit); begin p : process begin wait; end process; end entity e;",
        ))
        .unwrap();
        assert_eq!(ent.get_ports().len(), 1);
    }

    #[test]
    fn every_entity_in_file() {
        let contents = std::fs::read_to_string("./tests/data/vhdl/units.vhd").unwrap();
        let ents = parse_all(&tokens(&contents)).unwrap();
        assert_eq!(
            ents.iter()
                .map(|e| e.get_name().to_string())
                .collect::<Vec<String>>(),
            vec!["and_gate", "top"]
        );
        assert_eq!(ents[0].get_ports().len(), 3);
        assert_eq!(ents[1].get_ports().len(), 0);
        assert_eq!(ents[1].get_generics().len(), 0);
        // the first entity is the one returned by a single parse
        assert_eq!(parse(&tokens(&contents)).unwrap(), ents[0]);
        // nothing to find is not an error
        assert_eq!(parse_all(&tokens("library ieee;")).unwrap().len(), 0);
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let ent = parse(&tokens(
            "entity e is end; architecture rtl of e is begin end architecture; garbage ( ( (",
        ))
        .unwrap();
        assert_eq!(ent.get_name(), &id("e"));
    }
}
