use crate::artifacts::diff::operation::{Operation, ScriptBuilder};

/// Default ceiling on the number of diagonal cells the Myers trace may hold.
pub const DEFAULT_MAX_TRACE_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error("shortest edit trace needs more than {limit} cells")]
    CostExceeded { limit: usize },
}

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;

    fn compute_shortest_edit(&self) -> Result<Self::Trace, AlignError>;
    fn backtrack(&self) -> Result<Self::EditPath, AlignError>;
    fn operations(&self) -> Result<Vec<Operation>, AlignError>;
}

/// Myers' O(ND) shortest edit script over two slices.
///
/// Each trace row `d` stores only the diagonals `-d..=d` reachable at that
/// depth, so memory grows with the square of the edit distance rather than
/// with the input length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
    max_trace_cells: usize,
}

impl<'d, T> MyersDiff<'d, T> {
    pub fn new(a: &'d [T], b: &'d [T]) -> Self {
        Self {
            a,
            b,
            max_trace_cells: DEFAULT_MAX_TRACE_CELLS,
        }
    }

    pub fn with_max_trace_cells(mut self, max_trace_cells: usize) -> Self {
        self.max_trace_cells = max_trace_cells;
        self
    }
}

fn diagonal(row: &[isize], d: isize, k: isize) -> isize {
    row[(k + d) as usize]
}

impl<'d, T: Eq> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<(isize, isize, isize, isize)>;

    fn compute_shortest_edit(&self) -> Result<Self::Trace, AlignError> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut trace = Vec::new();
        if offset == 0 {
            return Ok(trace);
        }

        let mut v = vec![0; 2 * offset + 1];
        let mut cells = 0usize;

        for d in 0..=(n + m) {
            let lo = offset - d as usize;
            let hi = offset + d as usize;

            cells += hi - lo + 1;
            if cells > self.max_trace_cells {
                return Err(AlignError::CostExceeded {
                    limit: self.max_trace_cells,
                });
            }
            trace.push(v[lo..=hi].to_vec());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // only reachable from k+1, an insertion
                    v[idx + 1]
                } else if k == d {
                    // only reachable from k-1, a deletion
                    v[idx - 1] + 1
                } else {
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return Ok(trace);
                }
            }
        }

        Ok(trace)
    }

    fn backtrack(&self) -> Result<Self::EditPath, AlignError> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit()?;

        for (d, row) in trace.iter().enumerate().rev() {
            let d = d as isize;

            if d == 0 {
                while x > 0 && y > 0 {
                    edit_path.push((x - 1, y - 1, x, y));
                    x -= 1;
                    y -= 1;
                }
                break;
            }

            let k = x - y;
            let prev_k = if k == -d {
                k + 1
            } else if k == d {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if diagonal(row, d, k_del) + 1 > diagonal(row, d, k_ins) {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = diagonal(row, d, prev_k);
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            edit_path.push((prev_x, prev_y, x, y));
            (x, y) = (prev_x, prev_y);
        }

        Ok(edit_path)
    }

    fn operations(&self) -> Result<Vec<Operation>, AlignError> {
        let path = self.backtrack()?;
        let mut builder = ScriptBuilder::default();

        for (prev_x, prev_y, x, y) in path.into_iter().rev() {
            if x == prev_x {
                builder.insert();
            } else if y == prev_y {
                builder.delete();
            } else {
                builder.keep();
            }
        }

        Ok(builder.finish())
    }
}
