use std::fmt;

use crate::menu::item::{Course, MenuItem};

/// Course selection on the view screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    pub fn label(self) -> &'static str {
        match self {
            CourseFilter::All => "All Courses",
            CourseFilter::Only(course) => course.label(),
        }
    }

    pub fn matches(self, item: &MenuItem) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(course) => item.course() == course,
        }
    }

    /// All -> Starters -> ... -> Drinks -> All
    pub fn next(self) -> Self {
        match self {
            CourseFilter::All => CourseFilter::Only(Course::ALL[0]),
            CourseFilter::Only(Course::Drinks) => CourseFilter::All,
            CourseFilter::Only(course) => CourseFilter::Only(course.next()),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CourseFilter::All => CourseFilter::Only(Course::Drinks),
            CourseFilter::Only(Course::Starters) => CourseFilter::All,
            CourseFilter::Only(course) => CourseFilter::Only(course.prev()),
        }
    }

    pub fn options() -> impl Iterator<Item = CourseFilter> {
        std::iter::once(CourseFilter::All).chain(Course::ALL.into_iter().map(CourseFilter::Only))
    }
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn filter_items(items: &[MenuItem], filter: CourseFilter) -> Vec<&MenuItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Mean price, or 0 for an empty selection.
pub fn average_price(items: &[&MenuItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let total: f64 = items.iter().map(|item| item.price()).sum();
    total / items.len() as f64
}
