// File: crates/linechart-core/src/axis.rs
// Summary: Axis generator: tick placement, tick marks/labels, and the domain line, rendered into an SVG group.

use crate::dom::{Document, NodeId};
use crate::scale::{LinearScale, DEFAULT_TICKS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Top,
    Bottom,
    Left,
    Right,
}

impl Orient {
    fn sign(self) -> f64 {
        match self {
            Orient::Top | Orient::Left => -1.0,
            Orient::Bottom | Orient::Right => 1.0,
        }
    }

    fn horizontal(self) -> bool {
        matches!(self, Orient::Top | Orient::Bottom)
    }
}

/// One tick: data value, pixel offset along the axis, and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub offset: f64,
    pub label: String,
}

/// Axis settings. A negative `inner_tick_size` draws ticks into the plot,
/// so `-plot_height` on a bottom axis turns every tick into a grid line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    pub ticks: usize,
    pub inner_tick_size: f64,
    pub outer_tick_size: f64,
    pub tick_padding: f64,
}

impl Axis {
    pub fn new(orient: Orient) -> Self {
        Self { orient, ticks: DEFAULT_TICKS, inner_tick_size: 6.0, outer_tick_size: 6.0, tick_padding: 3.0 }
    }

    pub fn tick_size(mut self, inner: f64, outer: f64) -> Self {
        self.inner_tick_size = inner;
        self.outer_tick_size = outer;
        self
    }

    pub fn orient(&self) -> Orient { self.orient }

    pub fn tick_marks(&self, scale: &LinearScale) -> Vec<TickMark> {
        scale
            .tick_labels(self.ticks)
            .into_iter()
            .map(|(value, label)| TickMark { value, offset: scale.apply(value), label })
            .collect()
    }

    /// Signed distance of a tick label from the axis line.
    pub fn label_offset(&self) -> f64 {
        self.orient.sign() * (self.inner_tick_size.max(0.0) + self.tick_padding)
    }

    /// SVG path data for the domain line with its outer end ticks.
    pub fn domain_path(&self, scale: &LinearScale) -> String {
        let (r0, r1) = scale.range_extent();
        let o = self.orient.sign() * self.outer_tick_size;
        if self.orient.horizontal() {
            format!("M{r0},{o}V0H{r1}V{o}")
        } else {
            format!("M{o},{r0}H0V{r1}H{o}")
        }
    }

    /// Replace the contents of `group` with this axis drawn for `scale`.
    pub fn render(&self, doc: &mut Document, group: NodeId, scale: &LinearScale) {
        doc.clear_children(group);
        let sign = self.orient.sign();
        let inner = sign * self.inner_tick_size;
        let label = self.label_offset();

        for mark in self.tick_marks(scale) {
            let tick = doc.append_child(group, "g");
            doc.set_attr(tick, "class", "tick");
            let line = doc.append_child(tick, "line");
            let text = doc.append_child(tick, "text");
            if self.orient.horizontal() {
                doc.set_attr(tick, "transform", format!("translate({},0)", mark.offset));
                doc.set_attr(line, "x2", 0);
                doc.set_attr(line, "y2", inner);
                doc.set_attr(text, "x", 0);
                doc.set_attr(text, "y", label);
                doc.set_attr(text, "dy", if self.orient == Orient::Top { "0em" } else { ".71em" });
                doc.set_style(text, "text-anchor", "middle");
            } else {
                doc.set_attr(tick, "transform", format!("translate(0,{})", mark.offset));
                doc.set_attr(line, "x2", inner);
                doc.set_attr(line, "y2", 0);
                doc.set_attr(text, "x", label);
                doc.set_attr(text, "y", 0);
                doc.set_attr(text, "dy", ".32em");
                doc.set_style(text, "text-anchor", if self.orient == Orient::Left { "end" } else { "start" });
            }
            doc.set_text(text, mark.label);
        }

        let domain = doc.append_child(group, "path");
        doc.set_attr(domain, "class", "domain");
        doc.set_attr(domain, "d", self.domain_path(scale));
    }
}
