use menucard::cli::ui;
use menucard::{AppState, Course, CourseFilter, MenuFormatter, MenuItem, MenuStore, Route};
use ratatui::{backend::TestBackend, Terminal};

fn draw(state: &AppState, store: &MenuStore) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    let formatter = MenuFormatter::default();
    terminal
        .draw(|f| ui::render(f, state, store, &formatter))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn sample_store() -> MenuStore {
    let mut store = MenuStore::new();
    store.append(MenuItem::new("Soup", "Tomato", Course::Starters, 50.0).unwrap());
    store.append(MenuItem::new("Steak", "Sirloin", Course::Mains, 150.0).unwrap());
    store
}

#[test]
fn home_shows_both_actions() {
    let screen = draw(&AppState::new(), &MenuStore::new());
    assert!(screen.contains("Welcome to the Menu App"));
    assert!(screen.contains("Add Menu Item Here"));
    assert!(screen.contains("View Menu Items Here"));
}

#[test]
fn view_all_shows_average_and_items() {
    let mut state = AppState::new();
    state.navigate(Route::View);
    let screen = draw(&state, &sample_store());

    assert!(screen.contains("Average Price: R100.00"));
    assert!(screen.contains("Soup"));
    assert!(screen.contains("Steak"));
    assert!(screen.contains("Price: R150.00"));
}

#[test]
fn view_mains_filters() {
    let mut state = AppState::new();
    state.navigate(Route::View);
    state.view.filter = CourseFilter::Only(Course::Mains);
    let screen = draw(&state, &sample_store());

    assert!(screen.contains("Average Price: R150.00"));
    assert!(screen.contains("Steak"));
    assert!(!screen.contains("Soup"));
    assert!(screen.contains("1 of 2 items"));
}

#[test]
fn empty_view_shows_placeholder() {
    let mut state = AppState::new();
    state.navigate(Route::View);
    let screen = draw(&state, &MenuStore::new());

    assert!(screen.contains("Average Price: R0.00"));
    assert!(screen.contains("No items available for this course."));
}

#[test]
fn add_form_shows_fields_and_alert() {
    let mut state = AppState::new();
    state.navigate(Route::Add);
    let screen = draw(&state, &MenuStore::new());
    assert!(screen.contains("Add Menu Item"));
    assert!(screen.contains("Starters"));
    assert!(screen.contains("Go Back Home"));

    state.show_alert("Error", "All fields are required.");
    let screen = draw(&state, &MenuStore::new());
    assert!(screen.contains("All fields are required."));
}

#[test]
fn alert_fits_a_tiny_terminal() {
    let mut state = AppState::new();
    state.navigate(Route::Add);
    state.show_alert("Error", "All fields are required.");

    let backend = TestBackend::new(40, 5);
    let mut terminal = Terminal::new(backend).unwrap();
    let formatter = MenuFormatter::default();
    terminal
        .draw(|f| ui::render(f, &state, &MenuStore::new(), &formatter))
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer.area.height, 5);
    assert!(buffer.content.iter().any(|cell| cell.symbol == "│" || cell.symbol == "─"));
}
