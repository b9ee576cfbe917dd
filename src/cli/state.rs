use crate::error::MenuResult;
use crate::formatter::MenuFormatter;
use crate::menu::{CourseFilter, MenuDraft, MenuItem, MenuStore};
use crate::router::{Route, Router};

const MAX_MESSAGES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    AddItem,
    ViewItems,
}

impl HomeAction {
    pub const ALL: [HomeAction; 2] = [HomeAction::AddItem, HomeAction::ViewItems];

    pub fn label(self) -> &'static str {
        match self {
            HomeAction::AddItem => "Add Menu Item Here",
            HomeAction::ViewItems => "View Menu Items Here",
        }
    }

    pub fn route(self) -> Route {
        match self {
            HomeAction::AddItem => Route::Add,
            HomeAction::ViewItems => Route::View,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            HomeAction::AddItem => HomeAction::ViewItems,
            HomeAction::ViewItems => HomeAction::AddItem,
        }
    }
}

/// Focusable elements of the add form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    DishName,
    Description,
    Course,
    Price,
    Submit,
    ViewItems,
    Home,
}

impl AddField {
    pub const ORDER: [AddField; 7] = [
        AddField::DishName,
        AddField::Description,
        AddField::Course,
        AddField::Price,
        AddField::Submit,
        AddField::ViewItems,
        AddField::Home,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    pub fn is_text(self) -> bool {
        matches!(self, AddField::DishName | AddField::Description | AddField::Price)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            AddField::DishName => "Dish Name",
            AddField::Description => "Description",
            AddField::Course => "Course",
            AddField::Price => "Price",
            AddField::Submit => "Add Menu Item",
            AddField::ViewItems => "View Menu Items",
            AddField::Home => "Go Back Home",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddForm {
    pub draft: MenuDraft,
    pub focus: AddField,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            draft: MenuDraft::default(),
            focus: AddField::DishName,
        }
    }
}

impl AddForm {
    pub fn text(&self, field: AddField) -> Option<&str> {
        match field {
            AddField::DishName => Some(&self.draft.dish_name),
            AddField::Description => Some(&self.draft.description),
            AddField::Price => Some(&self.draft.price),
            _ => None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            AddField::DishName => Some(&mut self.draft.dish_name),
            AddField::Description => Some(&mut self.draft.description),
            AddField::Price => Some(&mut self.draft.price),
            _ => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn next_course(&mut self) {
        self.draft.course = self.draft.course.next();
    }

    pub fn prev_course(&mut self) {
        self.draft.course = self.draft.course.prev();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the draft and appends it to `store`.
    ///
    /// On failure nothing changes, neither the store nor the typed input.
    pub fn submit(&mut self, store: &mut MenuStore) -> MenuResult<MenuItem> {
        let item = self.draft.validate()?;
        store.append(item.clone());
        self.reset();
        Ok(item)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub filter: CourseFilter,
    pub scroll: usize,
}

impl ViewState {
    pub fn next_filter(&mut self) {
        self.filter = self.filter.next();
        self.scroll = 0;
    }

    pub fn prev_filter(&mut self) {
        self.filter = self.filter.prev();
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, visible_items: usize) {
        if self.scroll + 1 < visible_items {
            self.scroll += 1;
        }
    }
}

/// Blocking message box; dismissed by any key.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug)]
pub struct AppState {
    pub router: Router,
    pub home_selected: HomeAction,
    pub add_form: AddForm,
    pub view: ViewState,
    pub show_help: bool,
    pub alert: Option<Alert>,
    pub messages: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            home_selected: HomeAction::AddItem,
            add_form: AddForm::default(),
            view: ViewState::default(),
            show_help: false,
            alert: None,
            messages: Vec::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    /// Moves to `to`. Screens start fresh on entry, like a remount.
    pub fn navigate(&mut self, to: Route) {
        if let Err(err) = self.router.navigate(to) {
            self.add_message(err.to_string());
            return;
        }
        match to {
            Route::Add => self.add_form.reset(),
            Route::View => self.view = ViewState::default(),
            Route::Home => {}
        }
    }

    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.alert = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Handles the add form's submit action.
    ///
    /// A valid draft lands in the store and the view screen opens; an
    /// invalid one raises an alert and leaves everything else as it was.
    pub fn submit_form(&mut self, store: &mut MenuStore, formatter: &MenuFormatter) {
        match self.add_form.submit(store) {
            Ok(item) => {
                self.add_message(formatter.format_summary(&item));
                self.navigate(Route::View);
            }
            Err(err) => {
                tracing::warn!(error = %err, "menu item rejected");
                self.add_message(format!("Error: {}", err));
                self.show_alert("Error", err.to_string());
            }
        }
    }

    pub fn add_message(&mut self, message: String) {
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        self.messages.push(format!("[{}] {}", timestamp, message));
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
