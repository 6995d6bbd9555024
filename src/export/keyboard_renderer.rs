//! Plain-text table rendering of a parsed key matrix.

use crate::models::{KeyGrid, Layout};
use std::fmt::Write;

/// Renders a single layer as a table with column and row headers.
///
/// # Example
///
/// ```text
/// Layer 0
///
///     C1    C2    C3
/// R1  41    42    43
/// R2  0     0     224
/// ```
#[must_use]
pub fn render_layer_table(grid: &KeyGrid, layer_idx: usize) -> String {
    let label_width = format!("R{}", grid.rows()).len().max(2) + 2;
    let mut output = String::new();

    let _ = writeln!(output, "Layer {layer_idx}\n");

    let _ = write!(output, "{:label_width$}", "");
    for col in 0..grid.cols() {
        let _ = write!(output, "{:<6}", format!("C{}", col + 1));
    }
    output.push('\n');

    for (row, keys) in grid.iter_rows().enumerate() {
        let _ = write!(output, "{:<label_width$}", format!("R{}", row + 1));
        for keycode in keys {
            let _ = write!(output, "{keycode:<6}");
        }
        output.push('\n');
    }

    output
}

/// Renders every layer of a layout, preceded by the layer count.
#[must_use]
pub fn render_layout(layout: &Layout) -> String {
    let mut output = format!("Number of layers: {}\n\n", layout.layer_count());
    for (idx, grid) in layout.layers().iter().enumerate() {
        output.push_str(&render_layer_table(grid, idx));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Geometry;
    use crate::parser::parse_layout_str;

    #[test]
    fn test_render_layer_table() {
        let geometry = Geometry::new(2, 3, 6);
        let layout = parse_layout_str("41,42,43\n0,0,224\n", geometry).unwrap();

        let table = render_layer_table(&layout.layers()[0], 0);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Layer 0");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2].trim_end(), "    C1    C2    C3");
        assert_eq!(lines[3].trim_end(), "R1  41    42    43");
        assert_eq!(lines[4].trim_end(), "R2  0     0     224");
    }

    #[test]
    fn test_render_layout_lists_all_layers() {
        let geometry = Geometry::new(1, 2, 6);
        let layout = parse_layout_str("1,2\n3,4\n", geometry).unwrap();

        let text = render_layout(&layout);
        assert!(text.starts_with("Number of layers: 2\n"));
        assert!(text.contains("Layer 0"));
        assert!(text.contains("Layer 1"));
    }

    #[test]
    fn test_row_labels_stay_aligned_past_nine_rows() {
        let geometry = Geometry::new(10, 1, 1);
        let text: String = (1..=10).map(|v| format!("{v}\n")).collect();
        let layout = parse_layout_str(&text, geometry).unwrap();

        let table = render_layer_table(&layout.layers()[0], 0);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[3].trim_end(), "R1   1");
        assert_eq!(lines[12].trim_end(), "R10  10");
    }
}
