use partition::PartitionPlan;

use crate::theme::{Theme, paint};

/// Renders the textual distribution report: the arena size, one line per
/// configured block size, and the trailing gap line.
pub fn summary_lines(plan: &PartitionPlan, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::with_capacity(plan.iter_desc().count() + 2);
    lines.push(format!(
        "Arena size: {} bytes",
        paint(&plan.arena_size().to_string(), theme.arena)
    ));
    for (size, count) in plan.iter_desc() {
        lines.push(format!(
            "{} byte blocks: {}",
            paint(&format!("{size:4}"), theme.block),
            paint(&format!("{count} ({} bytes)", count * size), theme.count),
        ));
    }
    lines.push(format!(
        "Remaining gap: {}",
        paint(&format!("{} bytes", plan.gap()), theme.gap)
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use partition::{BlockSizeSet, split_arena};

    #[test]
    fn plain_report_lists_every_size_largest_first() {
        let plan = split_arena(512, &BlockSizeSet::default()).unwrap();
        let lines = summary_lines(&plan, &Theme::plain());
        assert_eq!(
            lines,
            vec![
                "Arena size: 512 bytes",
                "1024 byte blocks: 0 (0 bytes)",
                " 512 byte blocks: 0 (0 bytes)",
                " 256 byte blocks: 0 (0 bytes)",
                " 128 byte blocks: 2 (256 bytes)",
                "  64 byte blocks: 2 (128 bytes)",
                "  32 byte blocks: 4 (128 bytes)",
                "Remaining gap: 0 bytes",
            ]
        );
    }

    #[test]
    fn gap_line_reports_the_leftover() {
        let plan = split_arena(100, &BlockSizeSet::default()).unwrap();
        let lines = summary_lines(&plan, &Theme::plain());
        assert_eq!(lines.last().unwrap(), "Remaining gap: 4 bytes");
    }

    #[test]
    fn colored_report_keeps_the_numbers() {
        let plan = split_arena(100, &BlockSizeSet::default()).unwrap();
        let lines = summary_lines(&plan, &Theme::default());
        assert!(lines[0].contains("100"));
        assert!(lines.last().unwrap().contains("4 bytes"));
    }
}
