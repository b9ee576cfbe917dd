use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{MenuError, MenuResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Course {
    #[default]
    Starters,
    Mains,
    Desserts,
    Drinks,
}

impl Course {
    pub const ALL: [Course; 4] = [Course::Starters, Course::Mains, Course::Desserts, Course::Drinks];

    pub fn label(self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
            Course::Drinks => "Drinks",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown course: {}", s))
    }
}

/// A validated dish on the menu.
///
/// Fields are private so an item can only exist once it has passed
/// validation: name and description non-empty, price finite and positive.
/// Text is stored exactly as entered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    dish_name: String,
    description: String,
    course: Course,
    price: f64,
}

impl MenuItem {
    pub fn new(
        dish_name: impl Into<String>,
        description: impl Into<String>,
        course: Course,
        price: f64,
    ) -> MenuResult<Self> {
        let dish_name = dish_name.into();
        let description = description.into();

        if dish_name.is_empty() || description.is_empty() {
            return Err(MenuError::MissingField);
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(MenuError::InvalidPrice {
                input: price.to_string(),
            });
        }

        Ok(Self {
            dish_name,
            description,
            course,
            price,
        })
    }

    pub fn dish_name(&self) -> &str {
        &self.dish_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Raw form input before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuDraft {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
}

impl MenuDraft {
    /// Checks required fields first, then the price.
    pub fn validate(&self) -> MenuResult<MenuItem> {
        if self.dish_name.is_empty() || self.description.is_empty() || self.price.is_empty() {
            return Err(MenuError::MissingField);
        }

        let price = parse_price(&self.price)?;
        MenuItem::new(self.dish_name.clone(), self.description.clone(), self.course, price)
    }
}

fn parse_price(input: &str) -> MenuResult<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(MenuError::InvalidPrice {
            input: input.to_string(),
        }),
    }
}
