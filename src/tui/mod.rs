//! Ratatui-based terminal UI.
//!
//! The TUI provides a settings panel for entering the customer profile, then
//! renders the churn probability gauge, the logistic curve with the profile's
//! operating point, and the static insight tables. A second tab shows the
//! model performance comparison.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
    Terminal,
};

use crate::cli::ScoreArgs;
use crate::domain::{CHARGES_MAX, CHARGES_MIN, CustomerProfile, RiskTier, TENURE_MAX, TENURE_MIN};
use crate::error::AppError;
use crate::math::sigmoid;
use crate::report::reference::{
    FEATURE_INSIGHTS, DECISION_NOTE, ImpactMarker, MODEL_COMPARISON, RETENTION_THRESHOLD_NOTE,
};

mod plotters_chart;

use plotters_chart::SigmoidChart;

/// Charges step for the ←/→ adjustment; finer edits go through Enter.
const CHARGES_STEP: f64 = 1.0;

/// Start the TUI.
pub fn run(args: ScoreArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(crate::app::profile_from_args(&args))?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Predictor,
    Performance,
}

struct App {
    profile: CustomerProfile,
    run: crate::app::pipeline::RunOutput,
    tab: Tab,
    selected_field: usize,
    editing_charges: bool,
    charges_input: String,
    status: String,
}

impl App {
    fn new(profile: CustomerProfile) -> Result<Self, AppError> {
        let run = crate::app::pipeline::run_assessment(&profile)?;
        Ok(Self {
            profile,
            run,
            tab: Tab::Predictor,
            selected_field: 0,
            editing_charges: false,
            charges_input: String::new(),
            status: "Adjust the profile to re-score.".to_string(),
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        if self.editing_charges {
            return self.handle_charges_edit(code);
        }

        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Tab | KeyCode::BackTab => {
                self.tab = match self.tab {
                    Tab::Predictor => Tab::Performance,
                    Tab::Performance => Tab::Predictor,
                };
            }
            KeyCode::Char('1') => self.tab = Tab::Predictor,
            KeyCode::Char('2') => self.tab = Tab::Performance,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < 4 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1)?,
            KeyCode::Right => self.adjust_field(1)?,
            KeyCode::Enter => {
                if self.selected_field == 3 {
                    self.editing_charges = true;
                    self.charges_input.clear();
                    self.status =
                        "Editing charges ($). Enter to apply, Esc to cancel.".to_string();
                }
            }
            KeyCode::Char('e') => {
                let path = std::path::Path::new("churn-assessment.json");
                match crate::io::export::write_assessment_json(path, &self.run) {
                    Ok(()) => {
                        self.status = format!("Wrote assessment: {}", path.display());
                    }
                    Err(err) => {
                        self.status = format!("Export failed: {err}");
                    }
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn handle_charges_edit(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Esc => {
                self.editing_charges = false;
                self.status = "Charges edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing_charges = false;
                self.apply_charges_input()?;
            }
            KeyCode::Backspace => {
                self.charges_input.pop();
            }
            KeyCode::Char(c) => {
                if c.is_ascii_digit() || c == '.' {
                    self.charges_input.push(c);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn adjust_field(&mut self, delta: i32) -> Result<(), AppError> {
        match self.selected_field {
            0 => {
                self.profile.contract = if delta >= 0 {
                    self.profile.contract.next()
                } else {
                    self.profile.contract.prev()
                };
                self.rescore(format!("contract: {}", self.profile.contract.display_name()))?;
            }
            1 => {
                let next = if delta >= 0 {
                    self.profile.tenure_months.saturating_add(1)
                } else {
                    self.profile.tenure_months.saturating_sub(1)
                };
                self.profile.tenure_months = next.clamp(TENURE_MIN, TENURE_MAX);
                self.rescore(format!("tenure: {} months", self.profile.tenure_months))?;
            }
            2 => {
                self.profile.internet = if delta >= 0 {
                    self.profile.internet.next()
                } else {
                    self.profile.internet.prev()
                };
                self.rescore(format!("internet: {}", self.profile.internet.display_name()))?;
            }
            3 => {
                let next = self.profile.monthly_charges + f64::from(delta) * CHARGES_STEP;
                self.profile.monthly_charges = next.clamp(CHARGES_MIN, CHARGES_MAX);
                self.rescore(format!("charges: ${:.2}", self.profile.monthly_charges))?;
            }
            4 => {
                self.profile.payment = if delta >= 0 {
                    self.profile.payment.next()
                } else {
                    self.profile.payment.prev()
                };
                self.rescore(format!("payment: {}", self.profile.payment.display_name()))?;
            }
            _ => {}
        }
        Ok(())
    }

    fn apply_charges_input(&mut self) -> Result<(), AppError> {
        let trimmed = self.charges_input.trim();
        if trimmed.is_empty() {
            self.status = "Charges unchanged.".to_string();
            return Ok(());
        }
        let value: f64 = match trimmed.parse() {
            Ok(v) => v,
            Err(e) => {
                self.status = format!("Invalid charges '{trimmed}': {e}");
                return Ok(());
            }
        };
        if !(CHARGES_MIN..=CHARGES_MAX).contains(&value) {
            self.status =
                format!("Charges must be in [{CHARGES_MIN}, {CHARGES_MAX}], got {value}");
            return Ok(());
        }
        self.profile.monthly_charges = value;
        self.rescore(format!("charges: ${value:.2}"))
    }

    fn rescore(&mut self, status: String) -> Result<(), AppError> {
        // Widgets clamp every field, so validation cannot fail here; any error
        // still surfaces rather than leaving a stale score on screen.
        self.run = crate::app::pipeline::run_assessment(&self.profile)?;
        self.status = status;
        Ok(())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.tab {
            Tab::Predictor => self.draw_predictor(frame, chunks[1]),
            Tab::Performance => self.draw_performance(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("churn", Style::default().fg(Color::Cyan)),
            Span::raw(" — Telco Customer Churn Risk Dashboard"),
            Span::styled(
                match self.tab {
                    Tab::Predictor => "   [1] Predictor & Insights   2  Model Performance",
                    Tab::Performance => "    1  Predictor & Insights  [2] Model Performance",
                },
                Style::default().fg(Color::Gray),
            ),
        ]));

        lines.push(Line::from(Span::styled(
            format!(
                "{} | {}m | {} | ${:.2} | {}",
                self.profile.contract.display_name(),
                self.profile.tenure_months,
                self.profile.internet.display_name(),
                self.profile.monthly_charges,
                self.profile.payment.display_name(),
            ),
            Style::default().fg(Color::Gray),
        )));

        let a = &self.run.assessment;
        lines.push(Line::from(vec![
            Span::raw(format!(
                "p(churn)={:.4} ({}%) | linear score={:+.2} | tier: ",
                a.probability, a.percentage, self.run.linear_score
            )),
            Span::styled(
                a.tier.display_name(),
                Style::default().fg(tier_color(a.tier)).add_modifier(Modifier::BOLD),
            ),
        ]));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_predictor(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(38), Constraint::Min(0)])
            .split(area);

        self.draw_settings(frame, chunks[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(9),
            ])
            .split(chunks[1]);

        self.draw_gauge(frame, right[0]);
        self.draw_tier_message(frame, right[1]);
        self.draw_chart(frame, right[2]);
        self.draw_insights(frame, right[3]);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(format!("Contract: {}", self.profile.contract.display_name())),
            ListItem::new(format!("Tenure: {} months", self.profile.tenure_months)),
            ListItem::new(format!("Internet: {}", self.profile.internet.display_name())),
            ListItem::new(format!("Charges: ${:.2}", self.profile.monthly_charges)),
            ListItem::new(format!("Payment: {}", self.profile.payment.display_name())),
        ];

        let list = List::new(items)
            .block(Block::default().title("Model Input").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing_charges {
            let hint = Paragraph::new(format!("charges: {}_", self.charges_input))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_gauge(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let a = &self.run.assessment;
        let gauge = Gauge::default()
            .block(Block::default().title("Churn Probability").borders(Borders::ALL))
            .gauge_style(Style::default().fg(tier_color(a.tier)))
            .ratio(a.probability.clamp(0.0, 1.0))
            .label(format!("{}%", a.percentage));
        frame.render_widget(gauge, area);
    }

    fn draw_tier_message(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let tier = self.run.assessment.tier;
        let lines = vec![
            Line::from(Span::styled(
                format!("{} — {}", tier.display_name(), tier.message()),
                Style::default().fg(tier_color(tier)),
            )),
            Line::from(Span::styled(
                RETENTION_THRESHOLD_NOTE,
                Style::default().fg(Color::Gray),
            )),
        ];
        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Logistic Curve").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (curve, threshold, guide, marker, x_bounds, y_bounds) =
            chart_series(self.run.linear_score);

        let widget = SigmoidChart {
            curve: &curve,
            threshold: &threshold,
            guide: &guide,
            marker,
            x_bounds,
            y_bounds,
            x_label: "linear score",
            y_label: "p(churn)",
            fmt_x: fmt_axis_x,
            fmt_y: fmt_axis_y,
        };

        frame.render_widget(widget, inner);
    }

    fn draw_insights(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let rows: Vec<Row> = FEATURE_INSIGHTS
            .iter()
            .map(|insight| {
                Row::new(vec![
                    Cell::from("●").style(Style::default().fg(marker_color(insight.marker))),
                    Cell::from(insight.name),
                    Cell::from(insight.effect),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(28),
                Constraint::Min(0),
            ],
        )
        .header(
            Row::new(vec!["", "Feature", "Risk impact"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().title("Key Churn Drivers").borders(Borders::ALL));

        frame.render_widget(table, area);
    }

    fn draw_performance(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(area);

        let rows: Vec<Row> = MODEL_COMPARISON
            .iter()
            .map(|row| {
                Row::new(vec![
                    row.model,
                    row.accuracy,
                    row.recall,
                    row.precision,
                    row.complexity,
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(26),
                Constraint::Length(9),
                Constraint::Length(7),
                Constraint::Length(10),
                Constraint::Min(0),
            ],
        )
        .header(
            Row::new(vec!["Model", "Accuracy", "Recall", "Precision", "Complexity"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title("Model Evaluation Summary (testing data)")
                .borders(Borders::ALL),
        );
        frame.render_widget(table, chunks[0]);

        let note = Paragraph::new(DECISION_NOTE)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().title("Deployment Decision").borders(Borders::ALL));
        frame.render_widget(note, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter edit charges  Tab switch tab  e export  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn tier_color(tier: RiskTier) -> Color {
    match tier {
        RiskTier::Critical => Color::Red,
        RiskTier::High => Color::Yellow,
        RiskTier::Low => Color::Green,
    }
}

fn marker_color(marker: ImpactMarker) -> Color {
    match marker {
        ImpactMarker::Red => Color::Red,
        ImpactMarker::Amber => Color::Yellow,
        ImpactMarker::Green => Color::Green,
    }
}

/// Build chart series for Plotters.
///
/// The x-range covers every achievable linear score (the coefficient table
/// bounds them to [-4.0, 2.6]) with margin on both sides so the curve's tails
/// are visible.
fn chart_series(
    linear_score: f64,
) -> (
    Vec<(f64, f64)>,
    Vec<(f64, f64)>,
    Vec<(f64, f64)>,
    (f64, f64),
    [f64; 2],
    [f64; 2],
) {
    let x_bounds = [-6.0, 6.0];
    let y_bounds = [-0.02, 1.02];

    let n = 200usize;
    let mut curve = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let x = x_bounds[0] + u * (x_bounds[1] - x_bounds[0]);
        curve.push((x, sigmoid(x)));
    }

    let threshold = vec![(x_bounds[0], 0.5), (x_bounds[1], 0.5)];

    let probability = sigmoid(linear_score);
    let guide = vec![(linear_score, 0.0), (linear_score, probability)];
    let marker = (linear_score, probability);

    (curve, threshold, guide, marker, x_bounds, y_bounds)
}

fn fmt_axis_x(v: f64) -> String {
    format!("{v:.1}")
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_series_spans_achievable_scores() {
        let (curve, threshold, guide, marker, x_bounds, _) = chart_series(2.2);

        assert_eq!(curve.len(), 200);
        assert!(x_bounds[0] <= -4.0 && x_bounds[1] >= 2.6);
        assert!((threshold[0].1 - 0.5).abs() < 1e-12);

        // Guide rises from the axis to the operating point.
        assert!((guide[0].0 - 2.2).abs() < 1e-12);
        assert!((guide[1].1 - marker.1).abs() < 1e-12);
        assert!((marker.1 - 0.9002).abs() < 5e-5);
    }

    #[test]
    fn curve_is_monotone_increasing() {
        let (curve, ..) = chart_series(0.0);
        for pair in curve.windows(2) {
            assert!(pair[1].1 >= pair[0].1);
        }
    }
}
