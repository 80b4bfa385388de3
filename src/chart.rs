use crate::models::CategoryCounts;
use std::fmt::Write as _;

/// Drawing surface for the aspect proportions chart.
pub trait ChartBackend {
    type Instance;

    fn draw(&mut self, counts: &CategoryCounts) -> Self::Instance;
    fn destroy(&mut self, instance: Self::Instance);
}

/// Owns the single live chart instance on a backend.
pub struct ChartAdapter<B: ChartBackend> {
    backend: B,
    live: Option<B::Instance>,
}

impl<B: ChartBackend> ChartAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: None,
        }
    }

    /// Take over a backend that may still carry an instance from an earlier
    /// page state. It is destroyed before the first draw.
    pub fn with_stale(backend: B, stale: Option<B::Instance>) -> Self {
        Self {
            backend,
            live: stale,
        }
    }

    pub fn render(&mut self, counts: &CategoryCounts) {
        if let Some(previous) = self.live.take() {
            self.backend.destroy(previous);
        }
        self.live = Some(self.backend.draw(counts));
    }

    pub fn has_instance(&self) -> bool {
        self.live.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHandle(u64);

const SLICE_COLORS: [(&str, &str); 3] = [
    ("rgba(16, 185, 129, 0.8)", "#10b981"),
    ("rgba(239, 68, 68, 0.8)", "#ef4444"),
    ("rgba(245, 158, 11, 0.8)", "#f59e0b"),
];

// Circumference of 100 so slice lengths are percentages.
const RADIUS: f64 = 15.915_494_309_189_533;

/// Doughnut chart rendered as inline SVG with a legend underneath.
#[derive(Debug, Default)]
pub struct SvgDoughnut {
    next_id: u64,
    current: Option<(ChartHandle, String)>,
}

impl SvgDoughnut {
    pub fn markup(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, markup)| markup.as_str())
    }
}

impl ChartBackend for SvgDoughnut {
    type Instance = ChartHandle;

    fn draw(&mut self, counts: &CategoryCounts) -> ChartHandle {
        self.next_id += 1;
        let handle = ChartHandle(self.next_id);
        self.current = Some((handle, doughnut_markup(counts)));
        handle
    }

    fn destroy(&mut self, instance: ChartHandle) {
        if matches!(self.current, Some((live, _)) if live == instance) {
            self.current = None;
        }
    }
}

fn doughnut_markup(counts: &CategoryCounts) -> String {
    let total = counts.total();
    let mut svg = String::from(
        r#"<svg class="doughnut" viewBox="0 0 42 42" role="img" aria-label="Aspect sentiment proportions">"#,
    );
    let _ = write!(
        svg,
        r##"<circle class="doughnut-track" cx="21" cy="21" r="{RADIUS}" fill="transparent" stroke="#e5e7eb" stroke-width="6"/>"##
    );

    if total == 0 {
        svg.push_str(
            r#"<text class="doughnut-empty" x="21" y="22" text-anchor="middle">No aspects</text>"#,
        );
    } else {
        let mut offset = 0.0;
        for ((label, value), (fill, border)) in counts.series().into_iter().zip(SLICE_COLORS) {
            if value == 0 {
                continue;
            }
            let pct = value as f64 / total as f64 * 100.0;
            let _ = write!(
                svg,
                r#"<circle class="slice slice-{class}" cx="21" cy="21" r="{RADIUS}" fill="transparent" stroke="{fill}" stroke-width="6" stroke-dasharray="{pct:.3} {rest:.3}" stroke-dashoffset="{dash:.3}" data-border="{border}"><title>{label}: {value}</title></circle>"#,
                class = label.to_lowercase(),
                rest = 100.0 - pct,
                dash = (125.0 - offset) % 100.0,
            );
            offset += pct;
        }
    }
    svg.push_str("</svg>");

    svg.push_str(r#"<ul class="chart-legend">"#);
    for ((label, value), (_, border)) in counts.series().into_iter().zip(SLICE_COLORS) {
        let _ = write!(
            svg,
            r#"<li><span class="swatch" style="background:{border}"></span>{label} <strong>{value}</strong></li>"#
        );
    }
    svg.push_str("</ul>");
    svg
}
