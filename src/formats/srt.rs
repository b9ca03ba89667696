use crate::{formats::time::parse_time_range_arrow, model::TimedLine};

/// Splits SRT-style input into blocks and flattens each valid block into a
/// [`TimedLine`]. Blocks with fewer than three lines, or whose second line is
/// not a time range, are skipped.
pub fn parse_blocks(raw: &str) -> Vec<TimedLine> {
    let normalized = raw.trim_start_matches('\u{feff}').replace("\r\n", "\n");

    let mut lines = Vec::new();
    for (block_no, block) in split_blocks(&normalized).into_iter().enumerate() {
        if block.len() < 3 {
            tracing::debug!(block = block_no, segments = block.len(), "skipping short block");
            continue;
        }

        let (start, end) = match parse_time_range_arrow(block[1]) {
            Ok(range) => range,
            Err(err) => {
                tracing::warn!(block = block_no, error = %err, "skipping block with bad time range");
                continue;
            }
        };

        lines.push(TimedLine::new(start, end, block[2..].join(" ")));
    }

    lines
}

fn split_blocks(input: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in input.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
