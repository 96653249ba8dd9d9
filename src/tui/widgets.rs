use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use crate::color::{Color as AppColor, ContrastText};
use crate::palette::PALETTE_LEN;

use super::App;

fn to_color(c: AppColor) -> Color {
    let (r, g, b) = c.to_rgb();
    Color::Rgb(r, g, b)
}

/// Choose black or white foreground for readable text on the given swatch.
fn contrast_fg(c: AppColor) -> Color {
    match c.contrast_text() {
        ContrastText::Dark => Color::Black,
        ContrastText::Light => Color::White,
    }
}

fn chrome_style(dark: bool) -> Style {
    if dark {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    }
}

/// Render the whole application: header, five swatch columns, footer.
pub fn draw(frame: &mut Frame, app: &App) {
    let [header, swatch_row, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(9),
        Constraint::Length(4),
    ])
    .areas(frame.area());

    draw_header(frame, app, header);
    draw_swatches(frame, app, swatch_row);
    draw_footer(frame, app, footer);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::raw("mode "),
        Span::styled(app.mode.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("   base hue {}°", app.base_hue)),
    ]);
    let widget = Paragraph::new(line)
        .style(chrome_style(app.dark_chrome))
        .block(Block::bordered().title("Palette Studio"));
    frame.render_widget(widget, area);
}

fn draw_swatches(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::horizontal([Constraint::Ratio(1, PALETTE_LEN as u32); PALETTE_LEN])
        .split(area);

    for (i, column) in columns.iter().enumerate() {
        let color = app.palette.slots[i];
        let selected = app.selected == i;
        let locked = app.locks.is_locked(i);
        frame.render_widget(swatch(color, i, selected, locked, app.copied == Some(i)), *column);
    }
}

/// One palette slot: a colored column showing the hex code, the HSL
/// components, the RGB triple, and lock/copy indicators.
fn swatch(color: AppColor, index: usize, selected: bool, locked: bool, copied: bool) -> Paragraph<'static> {
    let (r, g, b) = color.to_rgb();
    let fg = contrast_fg(color);

    let marker = if copied {
        "copied!"
    } else if locked {
        "locked"
    } else {
        ""
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            color.to_hex().to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("H {:>3}°", color.h)),
        Line::from(format!("S {:>3}%", color.s)),
        Line::from(format!("L {:>3}%", color.l)),
        Line::from(format!("RGB {r}, {g}, {b}")),
        Line::from(""),
        Line::from(Span::styled(marker, Style::default().add_modifier(Modifier::ITALIC))),
    ];

    let mut title = format!(" {} ", index + 1);
    if locked {
        title.push_str("● ");
    }
    let border = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(fg)
    };

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(to_color(color)).fg(fg))
        .block(Block::bordered().title(title).border_style(border))
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = Line::from(
        "g generate   m mode   [ ] hue   ←/→ select   space lock   c copy   e export   d chrome   q quit",
    );
    let status = Line::from(app.status.as_str());
    let widget = Paragraph::new(vec![keys, status])
        .style(chrome_style(app.dark_chrome))
        .block(Block::bordered().title("Keys"));
    frame.render_widget(widget, area);
}
