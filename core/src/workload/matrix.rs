use std::ops::{Index, IndexMut};

/// Square `f64` matrix stored row-major in a single allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                m[(i, j)] = f(i, j);
            }
        }
        m
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    /// Textbook triple loop; `k` is the innermost index.
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.n, rhs.n, "matrix dimensions must agree");
        let n = self.n;
        let mut out = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        out
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.n + j]
    }
}

/// Multiplies `A[i][j] = i + j` by `B[i][j] = i - j` and returns the centre
/// element `C[n/2][n/2]`. An empty product (`n == 0`) yields `0.0`.
pub fn matrix_multiply(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let a = Matrix::from_fn(n, |i, j| (i + j) as f64);
    let b = Matrix::from_fn(n, |i, j| i as f64 - j as f64);
    let c = a.multiply(&b);
    c[(n / 2, n / 2)]
}
