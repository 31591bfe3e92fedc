use engine::Grid;

/// One frame of the animation: the grid's block map with the generator's
/// frontier cell shaded so the viewer can follow the carving head.
pub fn frame(grid: &Grid, frontier: Option<(usize, usize)>) -> String {
    let ascii = grid.to_string();

    match frontier {
        Some(cell) => shade_cell(&ascii, cell),
        None => ascii,
    }
}

// The block map puts cell (x, y) on line 2y + 1; each map block is two
// characters wide, so the cell's interior starts at column 2 * (2x + 1).
fn shade_cell(ascii: &str, (x, y): (usize, usize)) -> String {
    let target_line = 2 * y + 1;
    let target_column = 2 * (2 * x + 1);

    ascii
        .lines()
        .enumerate()
        .map(|(line_index, line)| {
            if line_index != target_line {
                return line.to_string();
            }

            line.chars()
                .enumerate()
                .map(|(column, ch)| {
                    if column == target_column || column == target_column + 1 {
                        '░'
                    } else {
                        ch
                    }
                })
                .collect()
        })
        .collect::<Vec<String>>()
        .join("\n")
}
