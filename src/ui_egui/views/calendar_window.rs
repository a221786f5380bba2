//! Day/week calendar window for a single provider.
//!
//! Paints the 08:00-24:00 time grid and places one box per calendar event.
//! Events never overlap, so each box fills its quarter-hour cell.

use chrono::{Local, NaiveDate, Timelike};
use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use super::palette::{SlotVisual, TimeGridPalette};
use crate::models::provider::Provider;
use crate::models::slot::{
    SlotTime, DISPLAY_END_HOUR, DISPLAY_START_HOUR, SLOTS_PER_HOUR, WINDOW_SLOT_COUNT,
};
use crate::services::calendar::{project_events, CalendarEvent, CalendarViewKind};
use crate::ui_egui::app::state::CalendarWindowState;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::format_date_range;

const TIME_LABEL_WIDTH: f32 = 50.0;
const SLOT_HEIGHT: f32 = 28.0;
const HEADER_HEIGHT: f32 = 32.0;
const MIN_COLUMN_WIDTH: f32 = 90.0;
const ACCENT_BAR_WIDTH: f32 = 4.0;
const EVENT_INSET: f32 = 1.5;

/// Show the calendar window. Returns false once the user closes it.
pub fn render_calendar_window(
    ctx: &egui::Context,
    state: &mut CalendarWindowState,
    provider: &Provider,
    first_day_of_week: u8,
    theme: &CalendarTheme,
) -> bool {
    let mut open = true;
    let title = format!("{} - {}", provider.name, provider.clinic_details.name);

    egui::Window::new(title)
        .id(egui::Id::new(("calendar_window", provider.id)))
        .open(&mut open)
        .default_size([960.0, 680.0])
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            render_toolbar(ui, state, first_day_of_week);
            ui.separator();

            let dates = state.view.dates(state.anchor, first_day_of_week);
            let events = project_events(provider, &dates);
            if events.is_empty() {
                ui.label(
                    RichText::new("No bookings, availability or blocks in this range")
                        .italics()
                        .color(theme.text_secondary),
                );
            }
            render_time_grid(ui, &dates, &events, theme);
        });

    open
}

fn render_toolbar(ui: &mut egui::Ui, state: &mut CalendarWindowState, first_day_of_week: u8) {
    ui.horizontal(|ui| {
        if ui.button("◀").on_hover_text("Previous").clicked() {
            state.navigate_previous();
        }
        if ui.button("Today").clicked() {
            state.anchor = Local::now().date_naive();
        }
        if ui.button("▶").on_hover_text("Next").clicked() {
            state.navigate_next();
        }

        ui.add_space(12.0);
        ui.strong(range_label(state, first_day_of_week));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.selectable_value(&mut state.view, CalendarViewKind::Week, "Week");
            ui.selectable_value(&mut state.view, CalendarViewKind::Day, "Day");
        });
    });
}

fn range_label(state: &CalendarWindowState, first_day_of_week: u8) -> String {
    match state.view {
        CalendarViewKind::Day => state.anchor.format("%A, %-d %B %Y").to_string(),
        CalendarViewKind::Week => {
            format_date_range(&state.view.dates(state.anchor, first_day_of_week))
        }
    }
}

fn render_time_grid(
    ui: &mut egui::Ui,
    dates: &[NaiveDate],
    events: &[CalendarEvent],
    theme: &CalendarTheme,
) {
    let palette = TimeGridPalette::from_theme(theme);
    let column_count = dates.len().max(1);
    let column_width =
        ((ui.available_width() - TIME_LABEL_WIDTH) / column_count as f32).max(MIN_COLUMN_WIDTH);

    render_date_header(ui, dates, column_width, &palette);

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let size = Vec2::new(
                TIME_LABEL_WIDTH + column_width * column_count as f32,
                SLOT_HEIGHT * WINDOW_SLOT_COUNT as f32,
            );
            let (grid_rect, _) = ui.allocate_exact_size(size, Sense::hover());
            let layout = GridLayout {
                origin: grid_rect.min,
                column_width,
            };

            paint_grid_background(ui, &layout, dates.len(), &palette);
            for event in events {
                render_event(ui, &layout, dates, event, theme);
            }
            paint_current_time(ui, &layout, dates);
        });
}

fn render_date_header(
    ui: &mut egui::Ui,
    dates: &[NaiveDate],
    column_width: f32,
    palette: &TimeGridPalette,
) {
    let today = Local::now().date_naive();
    let width = TIME_LABEL_WIDTH + column_width * dates.len() as f32;
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, HEADER_HEIGHT), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.header_bg);

    for (index, date) in dates.iter().enumerate() {
        let left = rect.left() + TIME_LABEL_WIDTH + column_width * index as f32;
        let center = Pos2::new(left + column_width / 2.0, rect.center().y);
        let font = if *date == today {
            FontId::proportional(13.0)
        } else {
            FontId::proportional(12.0)
        };
        painter.text(
            center,
            Align2::CENTER_CENTER,
            date.format("%a %-d %b").to_string(),
            font,
            palette.label_text,
        );
    }
}

/// Pixel geometry of the painted grid
struct GridLayout {
    origin: Pos2,
    column_width: f32,
}

impl GridLayout {
    fn cell_rect(&self, column: usize, row: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(
                self.origin.x + TIME_LABEL_WIDTH + self.column_width * column as f32,
                self.origin.y + SLOT_HEIGHT * row as f32,
            ),
            Vec2::new(self.column_width, SLOT_HEIGHT),
        )
    }

    fn right(&self, columns: usize) -> f32 {
        self.origin.x + TIME_LABEL_WIDTH + self.column_width * columns as f32
    }
}

fn paint_grid_background(
    ui: &egui::Ui,
    layout: &GridLayout,
    columns: usize,
    palette: &TimeGridPalette,
) {
    let painter = ui.painter();

    for row in 0..WINDOW_SLOT_COUNT {
        let is_hour_start = row % SLOTS_PER_HOUR == 0;
        let background = if is_hour_start {
            palette.hour_bg
        } else {
            palette.regular_bg
        };
        for column in 0..columns {
            painter.rect_filled(layout.cell_rect(column, row), 0.0, background);
        }

        let y = layout.origin.y + SLOT_HEIGHT * row as f32;
        let line = if is_hour_start {
            Stroke::new(1.0, palette.hour_line)
        } else {
            Stroke::new(0.5, palette.slot_line)
        };
        painter.line_segment(
            [
                Pos2::new(layout.origin.x + TIME_LABEL_WIDTH, y),
                Pos2::new(layout.right(columns), y),
            ],
            line,
        );

        if is_hour_start {
            let hour = DISPLAY_START_HOUR + (row / SLOTS_PER_HOUR) as u32;
            painter.text(
                Pos2::new(layout.origin.x + TIME_LABEL_WIDTH - 6.0, y + 2.0),
                Align2::RIGHT_TOP,
                format!("{:02}:00", hour),
                FontId::proportional(12.0),
                palette.label_text,
            );
        }
    }

    for column in 0..=columns {
        let x = layout.origin.x + TIME_LABEL_WIDTH + layout.column_width * column as f32;
        painter.line_segment(
            [
                Pos2::new(x, layout.origin.y),
                Pos2::new(x, layout.origin.y + SLOT_HEIGHT * WINDOW_SLOT_COUNT as f32),
            ],
            Stroke::new(1.0, palette.hour_line),
        );
    }
}

/// Row of the time grid an event starts in
fn event_row(event: &CalendarEvent) -> Option<usize> {
    let start = event.start.time();
    SlotTime::new(start.hour(), start.minute())?.window_index()
}

fn render_event(
    ui: &mut egui::Ui,
    layout: &GridLayout,
    dates: &[NaiveDate],
    event: &CalendarEvent,
    theme: &CalendarTheme,
) {
    let Some(column) = dates.iter().position(|date| *date == event.date()) else {
        return;
    };
    let Some(row) = event_row(event) else {
        return;
    };

    let visual = event.visual();
    let mut colors = SlotVisual::for_status(event.status, theme);
    let is_past = event
        .start_local()
        .is_some_and(|start| start < Local::now());
    if is_past {
        colors = colors.dimmed();
    }
    let rect = layout.cell_rect(column, row).shrink(EVENT_INSET);
    let painter = ui.painter();

    painter.rect_filled(rect, egui::Rounding::same(3.0), colors.fill);
    let bar = Rect::from_min_size(rect.min, Vec2::new(ACCENT_BAR_WIDTH, rect.height()));
    painter.rect_filled(
        bar,
        egui::Rounding {
            nw: 3.0,
            sw: 3.0,
            ne: 0.0,
            se: 0.0,
        },
        colors.accent,
    );

    let text_width = rect.width() - ACCENT_BAR_WIDTH - 6.0;
    let mut job = egui::text::LayoutJob::simple(
        event.body(),
        FontId::proportional(10.0),
        colors.text,
        text_width,
    );
    if !visual.wrap_text {
        job.wrap.max_rows = 1;
        job.wrap.break_anywhere = true;
        job.wrap.overflow_character = Some('…');
    }
    let galley = ui.fonts(|fonts| fonts.layout_job(job));
    ui.painter().with_clip_rect(rect).galley(
        Pos2::new(rect.left() + ACCENT_BAR_WIDTH + 3.0, rect.top() + 2.0),
        galley,
        colors.text,
    );

    let id = egui::Id::new(("calendar_event", event.start));
    ui.interact(rect, id, Sense::hover())
        .on_hover_text(event.tooltip());
}

fn paint_current_time(ui: &egui::Ui, layout: &GridLayout, dates: &[NaiveDate]) {
    let now = Local::now().naive_local();
    let Some(column) = dates.iter().position(|date| *date == now.date()) else {
        return;
    };
    let hour = now.hour();
    if !(DISPLAY_START_HOUR..DISPLAY_END_HOUR).contains(&hour) {
        return;
    }

    let hours_in = (hour - DISPLAY_START_HOUR) as f32 + now.minute() as f32 / 60.0;
    let y = layout.origin.y + hours_in * SLOTS_PER_HOUR as f32 * SLOT_HEIGHT;
    let left = layout.cell_rect(column, 0).left();
    let line_color = Color32::from_rgb(255, 100, 100);

    ui.painter()
        .circle_filled(Pos2::new(left - 4.0, y), 3.0, line_color);
    ui.painter().line_segment(
        [Pos2::new(left, y), Pos2::new(left + layout.column_width, y)],
        Stroke::new(2.0, line_color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slot::SlotStatus;

    fn event_at(hour: u32, minute: u32) -> CalendarEvent {
        let start = NaiveDate::from_ymd_opt(2025, 7, 24)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        CalendarEvent {
            start,
            end: start + chrono::Duration::minutes(15),
            status: SlotStatus::Online,
            reason: None,
        }
    }

    #[test]
    fn test_event_rows() {
        assert_eq!(event_row(&event_at(8, 0)), Some(0));
        assert_eq!(event_row(&event_at(9, 30)), Some(6));
        assert_eq!(event_row(&event_at(23, 45)), Some(WINDOW_SLOT_COUNT - 1));
        assert_eq!(event_row(&event_at(7, 45)), None);
    }

    #[test]
    fn test_range_label_follows_view() {
        let anchor = NaiveDate::from_ymd_opt(2025, 7, 24).unwrap();
        let mut state = CalendarWindowState::new(1, anchor, CalendarViewKind::Week);
        assert_eq!(range_label(&state, 0), "20 Jul - 26 Jul 2025");
        assert_eq!(range_label(&state, 1), "21 Jul - 27 Jul 2025");
        state.view = CalendarViewKind::Day;
        assert_eq!(range_label(&state, 0), "Thursday, 24 July 2025");
    }

    #[test]
    fn test_cell_rect_geometry() {
        let layout = GridLayout {
            origin: Pos2::ZERO,
            column_width: 100.0,
        };
        let rect = layout.cell_rect(2, 4);
        assert_eq!(rect.left(), TIME_LABEL_WIDTH + 200.0);
        assert_eq!(rect.top(), SLOT_HEIGHT * 4.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(layout.right(7), TIME_LABEL_WIDTH + 700.0);
    }
}
