//! Dense linear solve through a QR factorization.

use std::ops::{Index, IndexMut, Range};

use crate::MatrixError;

// A column whose residual after orthogonalization falls below this fraction
// of its original norm is taken as linearly dependent.
const RANK_EPS: f64 = 1e-12;

#[derive(Debug, Clone)]
pub struct Matrix {
    data: Vec<f64>,
    cols: usize,
    rows: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a> {
    m: &'a Matrix,
    offset: usize,
    stride: usize,
    limit: usize,
    skip: usize,
}

impl Matrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_cols == 0 || rows.iter().any(|r| r.len() != n_cols) {
            return Err(MatrixError::Shape);
        }
        Ok(Matrix {
            data: rows.into_iter().flatten().collect(),
            rows: n_rows,
            cols: n_cols,
        })
    }

    pub fn col(&self, col: usize) -> MatrixView<'_> {
        MatrixView {
            m: self,
            offset: col % self.cols,
            stride: self.cols,
            limit: self.rows,
            skip: 0,
        }
    }

    pub fn row(&self, row: usize) -> MatrixView<'_> {
        MatrixView {
            m: self,
            offset: self.cols * row,
            stride: 1,
            limit: self.cols,
            skip: 0,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows, "Index out of bounds {} {}", row, self.rows);
        assert!(col < self.cols, "Index out of bounds {} {}", col, self.cols);
        &self.data[self.cols * row + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < self.rows, "Index out of bounds");
        assert!(col < self.cols, "Index out of bounds");
        &mut self.data[self.cols * row + col]
    }
}

impl<'a> Index<usize> for MatrixView<'a> {
    type Output = f64;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(idx < self.limit, "Index out of bounds");
        &self.m.data[self.offset + self.stride * (idx + self.skip)]
    }
}

impl<'a> MatrixView<'a> {
    pub fn range(&self, range: Range<usize>) -> MatrixView<'a> {
        let start = std::cmp::min(self.limit, range.start);
        MatrixView {
            m: self.m,
            offset: self.offset,
            stride: self.stride,
            limit: self.limit - start,
            skip: start,
        }
    }

    pub fn vec(&self) -> Vec<f64> {
        self.into_iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a MatrixView<'a> {
    type Item = &'a f64;
    type IntoIter = MatrixViewIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        MatrixViewIterator { mv: self, idx: 0 }
    }
}

pub struct MatrixViewIterator<'a> {
    mv: &'a MatrixView<'a>,
    idx: usize,
}

impl<'a> Iterator for MatrixViewIterator<'a> {
    type Item = &'a f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.mv.limit {
            self.idx += 1;
            return Some(&self.mv[self.idx - 1]);
        }
        None
    }
}

fn proj(v: &[f64], u: MatrixView) -> Vec<f64> {
    let scale = dot(v, &u) / dot(&u, &u);
    u.into_iter().map(|ui| ui * scale).collect()
}

fn dot<'a>(a: impl IntoIterator<Item = &'a f64>, b: impl IntoIterator<Item = &'a f64>) -> f64 {
    a.into_iter()
        .zip(b)
        .map(|(ai, bi)| ai * bi)
        .sum::<f64>()
}

fn norm<'a>(a: impl IntoIterator<Item = &'a f64>) -> f64 {
    a.into_iter().map(|a| a * a).sum::<f64>().sqrt()
}

/// Orthonormalizes the columns of `m` with modified Gram-Schmidt.
/// Fails when a column is (numerically) a combination of the previous ones.
pub fn gram_schmidt_orthonorm(mut m: Matrix) -> Result<Matrix, MatrixError> {
    for k in 0..m.cols {
        let ak = m.col(k).vec();
        let scale = norm(&ak);
        // take col-k vector remove components shared with other bases
        let uk: Vec<f64> = (0..k).fold(ak, |uk, j| {
            uk.iter()
                .zip(proj(&uk, m.col(j)))
                .map(|(u, vp)| u - vp)
                .collect()
        });
        let len = norm(&uk);
        if len == 0.0 || len <= RANK_EPS * scale {
            return Err(MatrixError::Singular);
        }
        for r in 0..m.rows {
            m[(r, k)] = uk[r] / len;
        }
    }
    Ok(m)
}

/// Solves the square system `a·x = b`, rejecting rank deficient ones as singular.
pub fn nsolve(a: &Matrix, b: &[f64]) -> Result<Vec<f64>, MatrixError> {
    if a.rows != a.cols || b.len() != a.rows {
        return Err(MatrixError::Dimension {
            rows: a.rows,
            cols: a.cols,
            len: b.len(),
        });
    }
    let q = &gram_schmidt_orthonorm(a.clone())?;
    let r = Matrix {
        data: (0..a.cols)
            .flat_map(|r| {
                (0..a.cols).map(move |c| {
                    if c >= r {
                        dot(&a.col(c), &q.col(r))
                    } else {
                        0.0
                    }
                })
            })
            .collect(),
        cols: a.cols,
        rows: a.cols,
    };
    let c: Vec<_> = (0..q.cols).map(|r| dot(&q.col(r), b)).collect();

    // r00 r01 r02  x0  c0
    //   0 r11 r12  x1  c1
    //   0   0 r22  x2  c2
    let mut x = vec![0.0; a.cols];
    for n in (0..a.cols).rev() {
        x[n] = (c[n] - dot(&r.row(n).range(n + 1..r.cols), &x[n + 1..])) / r[(n, n)];
    }
    Ok(x)
}
