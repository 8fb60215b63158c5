//! TUI rendering module

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use nanobanana_core::theme::{THEMES, parse_hex, theme_or_default};
use nanobanana_core::{calendar, view};

use crate::app::{App, COLOR_SWATCHES, DialogMode, Focus};

pub fn draw(f: &mut Frame, app: &App) {
    let accent = accent_color(app);

    // Main horizontal layout: sidebar + content
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Length(26), // Sidebar
            Constraint::Min(40),    // Content
        ])
        .split(f.area());

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Lists
            Constraint::Length(9), // Calendar
        ])
        .split(main_chunks[0]);

    draw_list_sidebar(f, app, accent, sidebar_chunks[0]);
    draw_calendar(f, app, accent, sidebar_chunks[1]);

    // Content area: header + task list + status + controls
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Task list
            Constraint::Length(3), // Status bar
            Constraint::Length(3), // Controls
        ])
        .split(main_chunks[1]);

    draw_header(f, app, accent, content_chunks[0]);
    draw_task_list(f, app, accent, content_chunks[1]);
    draw_status_bar(f, app, content_chunks[2]);
    draw_controls(f, app, content_chunks[3]);

    // Draw dialogs on top
    match &app.dialog {
        DialogMode::None => {}
        DialogMode::AddTask { input } => {
            draw_input_dialog(f, " Add Task ", input, accent);
        }
        DialogMode::EditTask { id: _, input } => {
            draw_input_dialog(f, " Edit Task ", input, accent);
        }
        DialogMode::NewList { input } => {
            draw_input_dialog(f, " New List ", input, accent);
        }
        DialogMode::RenameList { id: _, input } => {
            draw_input_dialog(f, " Rename List ", input, accent);
        }
        DialogMode::DeleteListConfirm { id: _, name } => {
            draw_confirm_dialog(
                f,
                "Delete list?",
                &format!("\"{}\" and all of its tasks will be removed", name),
            );
        }
        DialogMode::DeleteTagConfirm { name, .. } => {
            draw_confirm_dialog(
                f,
                "Delete tag?",
                &format!("\"{}\" will be removed from every task", name),
            );
        }
        DialogMode::ListSettings { id: _, color, daily, field } => {
            draw_list_settings_dialog(f, *color, *daily, *field, accent);
        }
        DialogMode::TagMenu { task_id, selected } => {
            draw_tag_menu(f, app, *task_id, *selected);
        }
        DialogMode::NewTag { task_id: _, input, color } => {
            draw_new_tag_dialog(f, input, *color);
        }
        DialogMode::ThemePicker { selected } => {
            draw_theme_picker(f, *selected, accent);
        }
        DialogMode::Help => {
            draw_help_dialog(f, accent);
        }
    }

    // Draw error message if any
    if let Some(msg) = &app.error_message {
        draw_error_message(f, msg);
    }
}

/// Accent color of the current list's theme
fn accent_color(app: &App) -> Color {
    let theme_id = app
        .state
        .current_list()
        .map(|l| l.theme.as_str())
        .unwrap_or("default");
    hex_color(theme_or_default(theme_id).color)
}

fn hex_color(hex: &str) -> Color {
    match parse_hex(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Yellow,
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_list_sidebar(f: &mut Frame, app: &App, accent: Color, area: Rect) {
    let focused = app.focus == Focus::Lists;

    let items: Vec<ListItem> = app
        .state
        .lists
        .iter()
        .enumerate()
        .map(|(i, list)| {
            let open = app
                .state
                .tasks
                .iter()
                .filter(|t| t.list_id == list.id && t.date == app.state.current_date && !t.completed)
                .count();
            let is_cursor = focused && i == app.sidebar_selection;
            let is_active = list.id == app.state.current_list_id;

            let mut spans = vec![
                Span::styled("● ", Style::default().fg(hex_color(&list.color))),
                Span::raw(format!("{} {}", list.icon, list.name)),
            ];
            if list.reset_frequency == nanobanana_core::ResetFrequency::Daily {
                spans.push(Span::styled(" ↻", Style::default().fg(Color::DarkGray)));
            }
            if open > 0 {
                spans.push(Span::styled(
                    format!(" ({})", open),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            let style = if is_cursor {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else if is_active {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Lists ")
            .border_style(focus_style(focused)),
    );

    f.render_widget(list, area);
}

fn draw_calendar(f: &mut Frame, app: &App, accent: Color, area: Rect) {
    let focused = app.focus == Focus::Calendar;
    let grid = calendar::month_grid(app.state.view_date);

    let mut lines = vec![Line::from(Span::styled(
        "Su Mo Tu We Th Fr Sa",
        Style::default().fg(Color::DarkGray),
    ))];

    let mut spans: Vec<Span> = Vec::new();
    for _ in 0..grid.leading_blanks {
        spans.push(Span::raw("   "));
    }
    for day in 1..=grid.days {
        let date = grid.date(day);
        let mut style = Style::default();
        if date == Some(app.state.current_date) {
            style = Style::default().fg(Color::Black).bg(accent).add_modifier(Modifier::BOLD);
        } else if date.is_some_and(|d| view::day_has_open_tasks(&app.state, d)) {
            style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
        }
        if focused && date == Some(app.state.view_date) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{:>2}", day), style));
        spans.push(Span::raw(" "));

        if (day + grid.leading_blanks) % 7 == 0 || day == grid.days {
            lines.push(Line::from(std::mem::take(&mut spans)));
        }
    }

    let title = format!(" {} {} ", grid.name(), grid.year);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(focus_style(focused)),
    );

    f.render_widget(paragraph, area);
}

fn draw_header(f: &mut Frame, app: &App, accent: Color, area: Rect) {
    let list_name = app
        .state
        .current_list()
        .map(|l| format!("{} {}", l.icon, l.name))
        .unwrap_or_else(|| "My Tasks".to_string());

    // e.g. "Friday, August 29, 2026"
    let date = app.state.current_date.format("%A, %B %-d, %Y").to_string();

    let line = Line::from(vec![
        Span::styled(list_name, Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(date, Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", app.state.settings.sort_by.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(paragraph, area);
}

fn draw_task_list(f: &mut Frame, app: &App, accent: Color, area: Rect) {
    let focused = app.focus == Focus::Tasks;
    let tasks = app.visible_tasks();

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = focused && i == app.selected_index;
            let is_grabbed = app.grabbed == Some(task.id);

            let checkbox = if task.completed { "[✓] " } else { "[ ] " };
            let mut spans = vec![Span::styled(
                checkbox,
                if task.completed {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                },
            )];

            if is_grabbed {
                spans.push(Span::styled("◆ ", Style::default().fg(accent)));
            }

            let text_style = if task.completed {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(task.text.clone(), text_style));

            // Tag chips; dangling tag ids are skipped.
            for tag_id in &task.tags {
                if let Some(tag) = app.state.tag(tag_id) {
                    spans.push(Span::styled(
                        format!(" #{}", tag.name),
                        Style::default().fg(hex_color(&tag.color)),
                    ));
                }
            }

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Line::from(Span::styled(
            "No tasks for this day. Press 'a' to add one.",
            Style::default().fg(Color::DarkGray),
        )))])
    } else {
        List::new(items)
    };

    let list = list.block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Tasks ")
            .border_style(focus_style(focused)),
    );

    f.render_widget(list, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let active = view::active_count(&app.state);
    let mut status = vec![
        Span::styled(
            format!("{} item{} left", active, if active == 1 { "" } else { "s" }),
            Style::default(),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{} list(s)", app.state.lists.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if app.grabbed.is_some() {
        status.push(Span::raw(" | "));
        status.push(Span::styled(
            "moving task - Enter to drop, Esc to cancel",
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(status))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_controls(f: &mut Frame, app: &App, area: Rect) {
    let controls = match app.focus {
        Focus::Tasks => vec![
            Span::styled("Space", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Toggle "),
            Span::styled("a", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Add "),
            Span::styled("e", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Edit "),
            Span::styled("d", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Del "),
            Span::styled("t", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Tags "),
            Span::styled("m", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Move "),
            Span::styled("s", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Sort "),
            Span::styled("c", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Clear "),
            Span::styled("T", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Theme "),
            Span::styled("?", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Help"),
        ],
        Focus::Lists => vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Open "),
            Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":New "),
            Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Rename "),
            Span::styled("d", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Del "),
            Span::styled("o", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Settings "),
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Panel "),
            Span::styled("?", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Help"),
        ],
        Focus::Calendar => vec![
            Span::styled("←→↑↓", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Move "),
            Span::styled("[/]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Month "),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Pick day "),
            Span::styled("t", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Today "),
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Panel "),
            Span::styled("?", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":Help"),
        ],
    };

    let paragraph = Paragraph::new(Line::from(controls))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Controls ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_input_dialog(f: &mut Frame, title: &str, input: &str, accent: Color) {
    let area = centered_rect(50, 25, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Length(2)])
        .split(inner);

    let input = Paragraph::new(format!("{}_", input))
        .style(Style::default())
        .wrap(Wrap { trim: false });

    f.render_widget(input, chunks[0]);

    let hint = Paragraph::new("Enter to save, Esc to cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(hint, chunks[1]);
}

fn draw_confirm_dialog(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(40, 25, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(inner);

    let msg = Paragraph::new(message)
        .style(Style::default())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(msg, chunks[0]);

    let hint = Paragraph::new("Y to confirm, N/Esc to cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(hint, chunks[1]);
}

fn swatch_row(selected: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, color) in COLOR_SWATCHES.iter().enumerate() {
        if i == selected {
            spans.push(Span::styled("[██]", Style::default().fg(hex_color(color))));
        } else {
            spans.push(Span::styled(" ██ ", Style::default().fg(hex_color(color))));
        }
    }
    Line::from(spans)
}

fn draw_list_settings_dialog(f: &mut Frame, color: usize, daily: bool, field: usize, accent: Color) {
    let area = centered_rect(50, 30, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" List Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(inner);

    let color_label = if field == 0 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let mut color_line = vec![Span::styled("Color: ", color_label)];
    color_line.extend(swatch_row(color).spans);
    f.render_widget(Paragraph::new(Line::from(color_line)), chunks[0]);

    let reset_label = if field == 1 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let reset_value = if daily { "daily" } else { "none" };
    let reset_line = Line::from(vec![
        Span::styled("Repeat: ", reset_label),
        Span::styled(format!("< {} >", reset_value), reset_label),
    ]);
    f.render_widget(Paragraph::new(reset_line), chunks[1]);

    let hint = Paragraph::new("Tab to switch field, Enter to save, Esc to cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(hint, chunks[2]);
}

fn draw_tag_menu(f: &mut Frame, app: &App, task_id: u64, selected: usize) {
    let area = centered_rect(40, 45, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Tags ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let attached: Vec<&String> = app
        .state
        .task(task_id)
        .map(|t| t.tags.iter().collect())
        .unwrap_or_default();

    let mut items: Vec<ListItem> = app
        .state
        .tags
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let mark = if attached.iter().any(|id| **id == tag.id) {
                "✓ "
            } else {
                "  "
            };
            let style = if i == selected {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(hex_color(&tag.color))
            };
            ListItem::new(format!("{}#{}", mark, tag.name)).style(style)
        })
        .collect();

    let new_tag_style = if selected == app.state.tags.len() {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    items.push(ListItem::new("  + New Tag").style(new_tag_style));

    let list = List::new(items);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    f.render_widget(list, chunks[0]);

    let hint = Paragraph::new("Enter to toggle, d to delete, Esc to close")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(hint, chunks[1]);
}

fn draw_new_tag_dialog(f: &mut Frame, input: &str, color: usize) {
    let area = centered_rect(45, 30, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Tag ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(inner);

    let input_text = Paragraph::new(format!("Name: {}_", input)).wrap(Wrap { trim: false });
    f.render_widget(input_text, chunks[0]);

    f.render_widget(Paragraph::new(swatch_row(color)), chunks[1]);

    let hint = Paragraph::new("Tab to pick color, Enter to save, Esc to cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(hint, chunks[2]);
}

fn draw_theme_picker(f: &mut Frame, selected: usize, accent: Color) {
    let area = centered_rect(40, 60, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Theme ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let items: Vec<ListItem> = THEMES
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let marker = if theme.animated { "~" } else { " " };
            let style = if i == selected {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(hex_color(theme.color))
            };
            ListItem::new(format!("● {} {}", theme.name, marker)).style(style)
        })
        .collect();

    let list = List::new(items);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    f.render_widget(list, chunks[0]);

    let hint = Paragraph::new("Enter to apply, Esc to cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(hint, chunks[1]);
}

fn draw_help_dialog(f: &mut Frame, accent: Color) {
    let area = centered_rect(65, 80, f.area());

    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from(vec![Span::styled("Navigation", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from("  ↑/↓ or j/k   Move selection"),
        Line::from("  Tab/S-Tab    Cycle panel focus (lists, calendar, tasks)"),
        Line::from("  g/G          Go to top/bottom"),
        Line::from(""),
        Line::from(vec![Span::styled("Tasks", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from("  Space/Enter  Toggle completion"),
        Line::from("  a            Add task"),
        Line::from("  e            Edit task text"),
        Line::from("  d/Delete     Delete task"),
        Line::from("  c            Clear completed on this day"),
        Line::from("  m            Pick up / drop task to reorder"),
        Line::from("  s            Cycle sort (custom, A-Z, completed)"),
        Line::from("  t            Tag menu"),
        Line::from(""),
        Line::from(vec![Span::styled("Lists", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from("  Enter        Switch to list"),
        Line::from("  n            New list"),
        Line::from("  r            Rename list"),
        Line::from("  d            Delete list"),
        Line::from("  o            List settings (color, daily repeat)"),
        Line::from(""),
        Line::from(vec![Span::styled("Calendar", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from("  Arrows       Move by day/week"),
        Line::from("  [/]          Previous/next month"),
        Line::from("  Enter        Show tasks for that day"),
        Line::from("  t            Jump to today"),
        Line::from(""),
        Line::from(vec![Span::styled("General", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from("  T            Change list theme"),
        Line::from("  ?            Toggle this help"),
        Line::from("  q/Esc        Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn draw_error_message(f: &mut Frame, message: &str) {
    let area = Rect {
        x: 2,
        y: f.area().height - 2,
        width: f.area().width - 4,
        height: 1,
    };

    let msg = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);

    f.render_widget(msg, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
