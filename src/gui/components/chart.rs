// src/gui/components/chart.rs
//
// Painter-drawn charts. Axes are data-driven; the drawing area takes the
// remaining space of the panel.

use std::{collections::BTreeMap, f32::consts::FRAC_PI_4};

use eframe::egui::{
    self, epaint::TextShape, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Vec2,
};

use crate::chart::{ChartSeries, GenreBox, VotePoint, YearMean};

const MARGIN_LEFT: f32 = 48.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 12.0;
const MARGIN_BOTTOM: f32 = 72.0;
const Y_TICKS: usize = 5;

const PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4),
    Color32::from_rgb(0xff, 0x7f, 0x0e),
    Color32::from_rgb(0x2c, 0xa0, 0x2c),
    Color32::from_rgb(0xd6, 0x27, 0x28),
    Color32::from_rgb(0x94, 0x67, 0xbd),
    Color32::from_rgb(0x8c, 0x56, 0x4b),
    Color32::from_rgb(0xe3, 0x77, 0xc2),
    Color32::from_rgb(0x7f, 0x7f, 0x7f),
    Color32::from_rgb(0xbc, 0xbd, 0x22),
    Color32::from_rgb(0x17, 0xbe, 0xcf),
];

pub fn draw(ui: &mut egui::Ui, series: &ChartSeries) {
    let size = Vec2::new(ui.available_width(), ui.available_height().max(240.0));
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let outer = response.rect;
    let plot = Rect::from_min_max(
        Pos2::new(outer.left() + MARGIN_LEFT, outer.top() + MARGIN_TOP),
        Pos2::new(outer.right() - MARGIN_RIGHT, outer.bottom() - MARGIN_BOTTOM),
    );

    let visuals = ui.visuals();
    let axis = Stroke::new(1.0, visuals.weak_text_color());
    let text_color = visuals.text_color();
    let mut canvas = Canvas { painter: &painter, plot, axis, text_color, x: (0.0, 1.0), y: (0.0, 1.0) };

    match series {
        ChartSeries::Distribution(boxes) => draw_boxes(&mut canvas, boxes),
        ChartSeries::Trend(points) => draw_trend(&mut canvas, points),
        ChartSeries::Correlation(points) => draw_scatter(&mut canvas, points),
    }
}

struct Canvas<'a> {
    painter: &'a egui::Painter,
    plot: Rect,
    axis: Stroke,
    text_color: Color32,
    x: (f64, f64),
    y: (f64, f64),
}

impl Canvas<'_> {
    fn pos(&self, x: f64, y: f64) -> Pos2 {
        let tx = unit(x, self.x) as f32;
        let ty = unit(y, self.y) as f32;
        Pos2::new(
            self.plot.left() + tx * self.plot.width(),
            self.plot.bottom() - ty * self.plot.height(),
        )
    }

    fn frame(&self) {
        self.painter.rect_stroke(self.plot, 0.0, self.axis, StrokeKind::Inside);
    }

    fn y_axis(&self, label: &str) {
        let (lo, hi) = self.y;
        for i in 0..=Y_TICKS {
            let v = lo + (hi - lo) * i as f64 / Y_TICKS as f64;
            let p = self.pos(self.x.0, v);
            self.painter.line_segment([p, Pos2::new(p.x - 4.0, p.y)], self.axis);
            self.text(Pos2::new(p.x - 6.0, p.y), Align2::RIGHT_CENTER, &format!("{v:.1}"));
        }
        self.text(
            Pos2::new(self.plot.left(), self.plot.top() - 2.0),
            Align2::LEFT_BOTTOM,
            label,
        );
    }

    fn x_tick(&self, x: f64, label: &str) {
        let p = self.pos(x, self.y.0);
        self.painter.line_segment([p, Pos2::new(p.x, p.y + 4.0)], self.axis);
        self.text(Pos2::new(p.x, p.y + 6.0), Align2::CENTER_TOP, label);
    }

    fn x_label(&self, label: &str) {
        let at = Pos2::new(self.plot.center().x, self.plot.bottom() + MARGIN_BOTTOM - 4.0);
        self.text(at, Align2::CENTER_BOTTOM, label);
    }

    fn text(&self, at: Pos2, align: Align2, text: &str) {
        self.painter.text(at, align, text, FontId::proportional(11.0), self.text_color);
    }

    /// Slanted category label hanging below the axis.
    fn slanted(&self, at: Pos2, text: &str) {
        let galley = self.painter.layout_no_wrap(s!(text), FontId::proportional(11.0), self.text_color);
        let shape = TextShape::new(Pos2::new(at.x - 4.0, at.y + 6.0), galley, self.text_color).with_angle(FRAC_PI_4);
        self.painter.add(Shape::Text(shape));
    }
}

/// Position of `v` in `range` as 0..=1; a zero-width range maps to the middle.
fn unit(v: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo { (v - lo) / (hi - lo) } else { 0.5 }
}

/// Data range with a little headroom on both sides.
fn padded(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(0.1);
    (lo - pad, hi + pad)
}

fn draw_boxes(c: &mut Canvas, boxes: &[GenreBox]) {
    let n = boxes.len();
    c.x = (0.0, n as f64);
    c.y = padded(boxes.iter().flat_map(|b| [b.min, b.max]));
    c.frame();
    c.y_axis("Rating");

    let slot = c.plot.width() / n.max(1) as f32;
    let half = (slot * 0.3).min(24.0);
    let color = PALETTE[0];
    let stroke = Stroke::new(1.5, color);

    for (i, b) in boxes.iter().enumerate() {
        let cx = i as f64 + 0.5;
        let x = c.pos(cx, 0.0).x;
        let y = |v: f64| c.pos(cx, v).y;

        // whiskers
        c.painter.line_segment([Pos2::new(x, y(b.min)), Pos2::new(x, y(b.q1))], stroke);
        c.painter.line_segment([Pos2::new(x, y(b.q3)), Pos2::new(x, y(b.max))], stroke);
        for v in [b.min, b.max] {
            c.painter.line_segment([Pos2::new(x - half * 0.5, y(v)), Pos2::new(x + half * 0.5, y(v))], stroke);
        }

        let body = Rect::from_min_max(Pos2::new(x - half, y(b.q3)), Pos2::new(x + half, y(b.q1)));
        c.painter.rect_filled(body, 2.0, color.gamma_multiply(0.35));
        c.painter.rect_stroke(body, 2.0, stroke, StrokeKind::Inside);
        c.painter.line_segment([Pos2::new(x - half, y(b.median)), Pos2::new(x + half, y(b.median))], Stroke::new(2.0, color));
        c.painter.circle_filled(Pos2::new(x, y(b.mean)), 3.0, PALETTE[1]);

        c.slanted(Pos2::new(x, c.plot.bottom()), &format!("{} ({})", b.genre, b.count));
    }
}

fn draw_trend(c: &mut Canvas, points: &[YearMean]) {
    c.x = padded(points.iter().map(|p| p.year as f64));
    c.y = padded(points.iter().map(|p| p.mean));
    c.frame();
    c.y_axis("Average rating");
    c.x_label("Release year");

    let (first, last) = match (points.first(), points.last()) {
        (Some(f), Some(l)) => (f.year, l.year),
        _ => return,
    };
    let step = ((last - first) / 8).max(1);
    let mut year = first;
    while year <= last {
        c.x_tick(year as f64, &year.to_string());
        year += step;
    }

    let line: Vec<Pos2> = points.iter().map(|p| c.pos(p.year as f64, p.mean)).collect();
    c.painter.add(Shape::line(line.clone(), Stroke::new(1.5, PALETTE[0])));
    for p in line {
        c.painter.circle_filled(p, 2.5, PALETTE[0]);
    }
}

fn draw_scatter(c: &mut Canvas, points: &[VotePoint]) {
    let lx = |v: u64| (v.max(1) as f64).log10();
    c.x = padded(points.iter().map(|p| lx(p.vote_count)));
    c.y = padded(points.iter().map(|p| p.rating));
    c.frame();
    c.y_axis("Rating");
    c.x_label("Vote count (log scale)");

    let (lo, hi) = c.x;
    for exp in (lo.floor() as i32)..=(hi.ceil() as i32) {
        for mult in [1.0, 2.0, 5.0] {
            let x = exp as f64 + f64::log10(mult);
            if x >= lo && x <= hi {
                c.x_tick(x, &fmt_count(mult * 10f64.powi(exp)));
            }
        }
    }

    // one color per first genre, assigned in name order
    let genres: BTreeMap<&str, Color32> = points
        .iter()
        .filter_map(|p| p.genre.as_deref())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(i, g)| (g, PALETTE[i % PALETTE.len()]))
        .collect();

    for p in points {
        let color = p
            .genre
            .as_deref()
            .and_then(|g| genres.get(g).copied())
            .unwrap_or(Color32::GRAY);
        c.painter.circle_filled(c.pos(lx(p.vote_count), p.rating), 3.0, color.gamma_multiply(0.8));
    }

    // legend
    let mut at = Pos2::new(c.plot.right() - 8.0, c.plot.bottom() - 8.0);
    for (genre, color) in genres.iter().rev() {
        c.painter.circle_filled(Pos2::new(at.x - 4.0, at.y - 6.0), 4.0, *color);
        c.text(Pos2::new(at.x - 12.0, at.y - 6.0), Align2::RIGHT_CENTER, genre);
        at.y -= 14.0;
    }
}

/// 1000 → "1k", 2000000 → "2M".
fn fmt_count(v: f64) -> String {
    if v >= 1e6 {
        format!("{}M", v / 1e6)
    } else if v >= 1e3 {
        format!("{}k", v / 1e3)
    } else {
        format!("{v}")
    }
}
