use crate::{
    foundation::core::{Canvas, Image},
    foundation::error::{TilefadeError, TilefadeResult},
};

/// Cell sizing for the near-square grid.
///
/// `col_widths[c]` is the widest image in column `c`, `row_heights[r]` the tallest image in row
/// `r`. The canvas is exactly the sum of each vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridDescriptor {
    pub cols: usize,
    pub rows: usize,
    pub col_widths: Vec<u32>,
    pub row_heights: Vec<u32>,
}

impl GridDescriptor {
    pub fn for_images(images: &[Image]) -> TilefadeResult<Self> {
        let (cols, rows) = near_square_dims(images.len()).ok_or(TilefadeError::EmptyInput)?;

        let mut col_widths = vec![0u32; cols];
        let mut row_heights = vec![0u32; rows];
        for (idx, img) in images.iter().enumerate() {
            let (r, c) = (idx / cols, idx % cols);
            col_widths[c] = col_widths[c].max(img.width());
            row_heights[r] = row_heights[r].max(img.height());
        }

        Ok(Self {
            cols,
            rows,
            col_widths,
            row_heights,
        })
    }

    /// `(row, col)` of the image at `idx`, row-major.
    pub fn cell(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    pub fn width(&self) -> TilefadeResult<u32> {
        checked_sum(&self.col_widths, "grid width")
    }

    pub fn height(&self) -> TilefadeResult<u32> {
        checked_sum(&self.row_heights, "grid height")
    }

    /// Top-left pixel offset of every cell in row-major order.
    pub fn cell_origins(&self) -> Vec<(u32, u32)> {
        let xs = prefix_sums(&self.col_widths);
        let ys = prefix_sums(&self.row_heights);
        (0..self.cols * self.rows)
            .map(|idx| {
                let (r, c) = self.cell(idx);
                (xs[c], ys[r])
            })
            .collect()
    }
}

/// `(cols, rows)` with `cols = ceil(sqrt(n))` and `rows = ceil(n / cols)`; `None` for `n == 0`.
pub fn near_square_dims(n: usize) -> Option<(usize, usize)> {
    if n == 0 {
        return None;
    }
    let cols = ceil_sqrt(n);
    Some((cols, n.div_ceil(cols)))
}

/// Tile images row-major into a near-square grid, each anchored at its cell's top-left corner.
pub fn compose_grid(images: &[Image]) -> TilefadeResult<Canvas> {
    let grid = GridDescriptor::for_images(images)?;
    let mut canvas = Canvas::new(grid.width()?, grid.height()?);
    for (img, (x, y)) in images.iter().zip(grid.cell_origins()) {
        canvas.paste(img, x, y);
    }
    tracing::debug!(
        cols = grid.cols,
        rows = grid.rows,
        width = canvas.width(),
        height = canvas.height(),
        "composed grid"
    );
    Ok(canvas)
}

// Integer search so perfect squares never round up through float error.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 1 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c
}

fn prefix_sums(values: &[u32]) -> Vec<u32> {
    let mut acc = 0u32;
    values
        .iter()
        .map(|&v| {
            let start = acc;
            acc = acc.saturating_add(v);
            start
        })
        .collect()
}

pub(crate) fn checked_sum(values: &[u32], what: &str) -> TilefadeResult<u32> {
    values.iter().try_fold(0u32, |acc, &v| {
        acc.checked_add(v)
            .ok_or_else(|| TilefadeError::validation(format!("{what} overflows u32")))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
