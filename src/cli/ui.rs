use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::cli::state::{AddField, Alert, AppState, HomeAction};
use crate::formatter::MenuFormatter;
use crate::menu::{average_price, filter_items, CourseFilter, MenuStore};
use crate::router::Route;

const ALERT_HEIGHT: u16 = 7;

pub fn render(f: &mut Frame, app: &AppState, store: &MenuStore, formatter: &MenuFormatter) {
    if app.show_help {
        render_help(f);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(10), Constraint::Length(3)].as_ref())
        .split(f.size());

    match app.route() {
        Route::Home => render_home(f, chunks[0], app),
        Route::Add => render_add(f, chunks[0], app),
        Route::View => render_view(f, chunks[0], app, store, formatter),
    }
    render_status(f, chunks[1], app);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let title = Paragraph::new(title.to_string())
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(title, area);
}

fn render_home(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(4), Constraint::Min(0)].as_ref())
        .split(area);

    render_title(f, chunks[0], "Welcome to the Menu App");

    let items: Vec<ListItem> = HomeAction::ALL
        .iter()
        .map(|action| {
            let style = if *action == app.home_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if *action == app.home_selected { "▶ " } else { "  " };
            ListItem::new(format!("{}{}", marker, action.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Menu "));
    f.render_widget(list, centered_rect(50, chunks[1]));
}

fn render_add(f: &mut Frame, area: Rect, app: &AppState) {
    let form = &app.add_form;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    render_title(f, chunks[0], "Add Menu Item");

    let text_fields = [
        (AddField::DishName, chunks[1]),
        (AddField::Description, chunks[2]),
        (AddField::Price, chunks[4]),
    ];
    for (field, rect) in text_fields {
        let focused = form.focus == field;
        let value = form.text(field).unwrap_or_default();
        let (content, content_style) = if value.is_empty() && !focused {
            (field.placeholder().to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (value.to_string(), Style::default().fg(Color::White))
        };

        let input = Paragraph::new(content)
            .style(content_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.placeholder())
                    .border_style(focus_style(focused)),
            );
        f.render_widget(input, rect);

        if focused {
            f.set_cursor(rect.x + 1 + value.chars().count() as u16, rect.y + 1);
        }
    }

    let course_focused = form.focus == AddField::Course;
    let picker = Paragraph::new(format!("◀ {} ▶", form.draft.course))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(AddField::Course.placeholder())
                .border_style(focus_style(course_focused)),
        );
    f.render_widget(picker, chunks[3]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ]
            .as_ref(),
        )
        .split(chunks[5]);
    for (field, rect) in [AddField::Submit, AddField::ViewItems, AddField::Home]
        .into_iter()
        .zip(buttons.iter())
    {
        render_button(f, *rect, field.placeholder(), form.focus == field);
    }
}

fn render_view(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    store: &MenuStore,
    formatter: &MenuFormatter,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(4),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    render_title(f, chunks[0], "Menu Items");

    let filter = app.view.filter;
    let options: Vec<Span> = CourseFilter::options()
        .flat_map(|option| {
            let style = if option == filter {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            [Span::styled(option.label(), style), Span::raw("  ")]
        })
        .collect();
    let picker = Paragraph::new(Line::from(options))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Course (←/→)"));
    f.render_widget(picker, chunks[1]);

    let items = filter_items(store.snapshot(), filter);
    let average = Paragraph::new(formatter.format_average(average_price(&items)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    f.render_widget(average, chunks[2]);

    if items.is_empty() {
        let empty = Paragraph::new("No items available for this course.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, chunks[3]);
    } else {
        let list_items: Vec<ListItem> = items
            .iter()
            .skip(app.view.scroll)
            .map(|item| {
                let mut lines = formatter.format_item(item).into_iter();
                let mut rendered = Vec::new();
                if let Some(name) = lines.next() {
                    rendered.push(Line::from(Span::styled(
                        name,
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                }
                rendered.extend(lines.map(Line::from));
                rendered.push(Line::from(""));
                ListItem::new(rendered)
            })
            .collect();

        let title = format!(" {} of {} items ", items.len(), store.len());
        let list = List::new(list_items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White));
        f.render_widget(list, chunks[3]);
    }

    render_button(f, centered_rect(40, chunks[4]), "Go Back", true);
}

fn render_status(f: &mut Frame, area: Rect, app: &AppState) {
    let hint = match app.route() {
        Route::Home => "↑/↓ select - Enter open - a add - v view - h help - q quit",
        Route::Add => "Tab/↑/↓ move - ←/→ course - Enter submit - Esc home",
        Route::View => "←/→ filter - j/k scroll - Esc back - q quit",
    };
    let text = match app.last_message() {
        Some(message) => format!("{}\n{}", hint, message),
        None => hint.to_string(),
    };
    let style = match app.last_message() {
        Some(message) if message.contains("Error") => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Gray),
    };

    let status = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::TOP))
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

fn render_button(f: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let size = f.size();
    let height = ALERT_HEIGHT.min(size.height);
    let row = Rect::new(size.x, size.y + (size.height - height) / 2, size.width, height);
    let area = centered_rect(60, row).intersection(size);

    let text = format!("{}\n\nPress any key to continue", alert.message);
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", alert.title))
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_help(f: &mut Frame) {
    let help_text = vec![
        "Menu App",
        "",
        "Home:",
        "  ↑/↓/Tab  - Select an action",
        "  Enter    - Open the selected screen",
        "  a / v    - Add or view menu items",
        "  q / Esc  - Quit",
        "",
        "Add Menu Item:",
        "  Tab/↑/↓  - Move between fields and buttons",
        "  ←/→      - Change course",
        "  Enter    - Add the item (or press the focused button)",
        "  Esc      - Back to home",
        "",
        "View Menu Items:",
        "  ←/→/Tab  - Change course filter",
        "  j/k      - Scroll",
        "  Esc / b  - Back to home",
        "",
        "Ctrl+C twice within 2 seconds exits from anywhere",
        "",
        "Press 'h' or 'Esc' to return",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, f.size());
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Blue)
    }
}

/// Horizontally centers a `percent_x` wide slice of `area`.
fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(area);
    chunks[1]
}
