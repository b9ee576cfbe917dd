use crate::menu::MenuItem;

/// Formats prices and menu entries for display.
#[derive(Debug, Clone)]
pub struct MenuFormatter {
    currency: String,
}

impl MenuFormatter {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// Currency symbol followed by two decimals, e.g. `R49.50`
    pub fn format_price(&self, price: f64) -> String {
        format!("{}{:.2}", self.currency, price)
    }

    pub fn format_average(&self, average: f64) -> String {
        format!("Average Price: {}", self.format_price(average))
    }

    /// The lines shown for one entry in the menu list.
    pub fn format_item(&self, item: &MenuItem) -> Vec<String> {
        vec![
            item.dish_name().to_string(),
            format!("Description: {}", item.description()),
            format!("Course: {}", item.course()),
            format!("Price: {}", self.format_price(item.price())),
        ]
    }

    /// Short one-line summary used in the activity log.
    pub fn format_summary(&self, item: &MenuItem) -> String {
        format!(
            "Added {} ({}) at {}",
            item.dish_name(),
            item.course(),
            self.format_price(item.price())
        )
    }
}

impl Default for MenuFormatter {
    fn default() -> Self {
        Self::new("R")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Course;

    #[test]
    fn prices_have_two_decimals() {
        let formatter = MenuFormatter::default();
        assert_eq!(formatter.format_price(150.0), "R150.00");
        assert_eq!(formatter.format_price(49.5), "R49.50");
        assert_eq!(formatter.format_average(0.0), "Average Price: R0.00");
    }

    #[test]
    fn custom_currency() {
        let formatter = MenuFormatter::new("$");
        assert_eq!(formatter.format_price(7.5), "$7.50");
    }

    #[test]
    fn item_lines() {
        let formatter = MenuFormatter::default();
        let item = MenuItem::new("Soup", "Tomato", Course::Starters, 50.0).unwrap();
        assert_eq!(
            formatter.format_item(&item),
            vec!["Soup", "Description: Tomato", "Course: Starters", "Price: R50.00"]
        );
        assert_eq!(formatter.format_summary(&item), "Added Soup (Starters) at R50.00");
    }
}
