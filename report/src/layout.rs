use partition::PartitionPlan;

use crate::theme::{Theme, paint};

/// Bar width of the largest block size, in characters.
const MAX_BLOCK_WIDTH: usize = 32;
/// Accumulated bytes per rendered line before wrapping.
const LINE_LIMIT: usize = 256;

struct LineWrap {
    lines: Vec<String>,
    current: String,
}

impl LineWrap {
    fn new() -> Self {
        LineWrap {
            lines: Vec::new(),
            current: String::new(),
        }
    }

    fn push(&mut self, chunk: &str) {
        if !self.current.is_empty() && self.current.len() + chunk.len() > LINE_LIMIT {
            self.lines.push(std::mem::take(&mut self.current));
        }
        self.current.push_str(chunk);
    }

    fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}

fn bar_width(size: usize, largest: usize) -> usize {
    MAX_BLOCK_WIDTH * size / largest
}

fn bar(label: &str, width: usize) -> String {
    format!("[{:^1$}]", label, width.saturating_sub(2))
}

/// Renders the proportional visual layout of the plan: one bracketed bar
/// per allocated block, scaled to the largest configured size, with the
/// gap drawn last. Sizes with no blocks are skipped.
pub fn layout_lines(plan: &PartitionPlan, theme: &Theme) -> Vec<String> {
    let Some((largest, _)) = plan.iter_desc().next() else {
        return Vec::new();
    };
    let mut wrap = LineWrap::new();
    for (size, count) in plan.iter_desc() {
        if count == 0 {
            continue;
        }
        let chunk = paint(&bar(&size.to_string(), bar_width(size, largest)), theme.block);
        for _ in 0..count {
            wrap.push(&chunk);
        }
    }
    if plan.gap() > 0 {
        let width = bar_width(plan.gap(), largest);
        let label = if width >= 7 { "GAP" } else { "" };
        wrap.push(&paint(&bar(label, width), theme.gap));
    }
    wrap.finish()
}
