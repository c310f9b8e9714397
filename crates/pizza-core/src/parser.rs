//! Menu file loader.
//!
//! The format is fixed-layout: the 1-based position of a line, not its
//! content, decides which rule applies.
//!
//! ```text
//! PizzaMenu <N>
//! <blank>
//! <nonvegan1>, <nonvegan2>, ...
//! <vegan1>, <vegan2>, ...
//! <blank>
//! <Pizza Name> [<Topping>, <Topping>, ...]     (exactly N lines)
//! ```

use regex::Regex;
use std::io::{self, BufRead};
use std::sync::LazyLock;

use crate::catalogs::{HEADER_LINES, LIST_SEPARATOR, MENU_NAME};
use crate::error::{MenuError, PizzaError, RegistryError};
use crate::menu::{Menu, MenuCatalog};
use crate::pizza::Pizza;
use crate::topping::{Topping, ToppingRegistry};

/// `<name> [<toppings>]`; the greedy name group makes the bracket the last
/// `[` on the line that has a closing `]` after it.
static RE_PIZZA_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<name>.*)\[(?P<toppings>[^\[\]]*)\]").unwrap());

// ---------------------------------------------------------------------------
// Line source
// ---------------------------------------------------------------------------

/// Sequential supplier of lines without their terminators.
///
/// `Ok(None)` is end of input; `Err` is a read failure and is reported
/// separately from format errors.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

// ---------------------------------------------------------------------------
// Line states
// ---------------------------------------------------------------------------

/// The grammar rule that applies to a line, chosen by position alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// Line 1: `PizzaMenu <count>`.
    Header,
    /// Lines 2 and 5: must be empty.
    Separator,
    /// Line 3: non-vegan topping declarations.
    NonVeganToppings,
    /// Line 4: vegan topping declarations.
    VeganToppings,
    /// Line 6 onwards: one pizza per line.
    Pizza,
}

impl LineState {
    /// Map a 1-based line position to its rule.
    pub fn at(line: usize) -> Self {
        match line {
            1 => LineState::Header,
            2 | 5 => LineState::Separator,
            3 => LineState::NonVeganToppings,
            4 => LineState::VeganToppings,
            _ => LineState::Pizza,
        }
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Drives one pass over a line source, defining toppings in `registry` and
/// registering pizzas in `catalog`.
pub struct MenuParser<'a> {
    registry: &'a mut ToppingRegistry,
    catalog: &'a mut MenuCatalog,
    declared_pizzas: usize,
}

impl<'a> MenuParser<'a> {
    pub fn new(registry: &'a mut ToppingRegistry, catalog: &'a mut MenuCatalog) -> Self {
        MenuParser {
            registry,
            catalog,
            declared_pizzas: 0,
        }
    }

    /// Consume `source` to completion. `None` stands for a missing source.
    ///
    /// The first error aborts the load; toppings and pizzas recorded before
    /// it stay in the registry and catalog.
    pub fn parse<S: LineSource>(mut self, source: Option<S>) -> Result<(), MenuError> {
        let mut source = source.ok_or(MenuError::NullSource { line: 1 })?;

        let first = read_line(&mut source, 1)?.ok_or(MenuError::EmptySource { line: 1 })?;
        let mut line_number = 1;
        let mut next = Some(first);

        while let Some(line) = next {
            self.process_line(&line, line_number)?;
            line_number += 1;
            next = read_line(&mut source, line_number)?;
        }

        self.check_pizza_count(line_number - 1)
    }

    fn process_line(&mut self, line: &str, line_number: usize) -> Result<(), MenuError> {
        let state = LineState::at(line_number);
        tracing::trace!(line = line_number, ?state, "menu line");
        match state {
            LineState::Header => self.handle_header(line, line_number),
            LineState::Separator => handle_separator(line, line_number),
            LineState::NonVeganToppings => self.handle_toppings(line, line_number, false),
            LineState::VeganToppings => self.handle_toppings(line, line_number, true),
            LineState::Pizza => self.handle_pizza(line, line_number),
        }
    }

    fn handle_header(&mut self, line: &str, line_number: usize) -> Result<(), MenuError> {
        if line.get(..MENU_NAME.len()) != Some(MENU_NAME) {
            return Err(MenuError::NameMismatch { line: line_number });
        }
        if !line[MENU_NAME.len()..].starts_with(' ') {
            return Err(MenuError::MissingSpace { line: line_number });
        }

        let value = line.trim().split(' ').nth(1).unwrap_or_default();
        self.declared_pizzas = value.parse().map_err(|_| MenuError::CountParse {
            line: line_number,
            value: value.to_string(),
        })?;
        tracing::debug!(declared = self.declared_pizzas, "parsed menu header");
        Ok(())
    }

    fn handle_toppings(
        &mut self,
        line: &str,
        line_number: usize,
        vegan: bool,
    ) -> Result<(), MenuError> {
        for name in line.trim().split(LIST_SEPARATOR) {
            self.registry
                .define(name, vegan)
                .map_err(|source| MenuError::InvalidToppingName {
                    line: line_number,
                    source,
                })?;
        }
        Ok(())
    }

    fn handle_pizza(&mut self, line: &str, line_number: usize) -> Result<(), MenuError> {
        let caps = RE_PIZZA_LINE
            .captures(line)
            .ok_or_else(|| MenuError::UnknownToppingReference {
                line: line_number,
                reference: line.to_string(),
            })?;

        let toppings = self.resolve_toppings(&caps["toppings"], line_number)?;
        let name = to_title_case(&caps["name"]);

        let pizza = Pizza::menu(name, toppings).map_err(|err| match err {
            PizzaError::TooManyToppings { count, max } => MenuError::TooManyToppings {
                line: line_number,
                count,
                max,
            },
            PizzaError::InvalidName => MenuError::InvalidPizzaName { line: line_number },
        })?;
        self.catalog.register(pizza);
        Ok(())
    }

    /// Resolve the comma-separated names between the brackets. Every name,
    /// including the empty one left by `[]`, must already be in the registry.
    fn resolve_toppings(&self, list: &str, line_number: usize) -> Result<Vec<Topping>, MenuError> {
        list.trim()
            .split(LIST_SEPARATOR)
            .map(|name| match self.registry.lookup(name) {
                Ok(topping) => Ok(topping.clone()),
                Err(RegistryError::Unknown { name }) => Err(MenuError::UnknownToppingReference {
                    line: line_number,
                    reference: name,
                }),
                Err(_) => Err(MenuError::UnknownToppingReference {
                    line: line_number,
                    reference: name.to_string(),
                }),
            })
            .collect()
    }

    fn check_pizza_count(&self, lines_read: usize) -> Result<(), MenuError> {
        let found = lines_read.checked_sub(HEADER_LINES);
        if found != Some(self.declared_pizzas) {
            return Err(MenuError::PizzaCountMismatch {
                line: lines_read,
                declared: self.declared_pizzas,
                found: found.unwrap_or(0),
            });
        }
        Ok(())
    }
}

fn read_line<S: LineSource>(source: &mut S, line: usize) -> Result<Option<String>, MenuError> {
    source
        .next_line()
        .map_err(|source| MenuError::SourceRead { line, source })
}

fn handle_separator(line: &str, line_number: usize) -> Result<(), MenuError> {
    if !line.is_empty() {
        return Err(MenuError::MissingBlankLine { line: line_number });
    }
    Ok(())
}

/// Uppercase the first letter of each whitespace-delimited word and
/// lowercase the rest, joining words with single spaces.
pub fn to_title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Load a menu from a line source into a fresh registry and catalog.
pub fn load_menu<S: LineSource>(source: S) -> Result<Menu, MenuError> {
    let mut menu = Menu::default();
    MenuParser::new(&mut menu.toppings, &mut menu.catalog).parse(Some(source))?;
    Ok(menu)
}

/// Load a menu from in-memory text.
pub fn parse_string(content: &str) -> Result<Menu, MenuError> {
    load_menu(content.as_bytes())
}
