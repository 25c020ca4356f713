use rand::prelude::*;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub, Mul};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Uniform samples in [-1, 1).
    pub fn random(rows: usize, cols: usize) -> Matrix {
        Matrix::random_with(rows, cols, &mut rand::thread_rng())
    }

    /// Same as `random`, drawing from the supplied generator so callers can seed it.
    pub fn random_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Both uniforms in (0, 1] to avoid log(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Gaussian weights N(0, scale²).
    ///
    /// A linear softmax classifier is usually started from very small weights
    /// (e.g. `scale = 1e-4`) so the initial loss sits close to ln(C).
    pub fn scaled_random<R: Rng + ?Sized>(rows: usize, cols: usize, scale: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng) * scale;
            }
        }
        res
    }

    /// Builds a matrix from row vectors. An empty `data` gives a 0×0 matrix.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when every row holds exactly `cols` entries.
    pub fn is_rectangular(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|row| row.len() == self.cols)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// Σ x² over every entry.
    pub fn sum_squares(&self) -> f64 {
        self.data.iter().flatten().map(|x| x * x).sum()
    }

    /// Row vector times matrix: `v · self`, where `v.len() == self.rows`.
    pub fn vec_mul(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.rows, "Matrices are of incorrect sizes");
        let mut res = vec![0.0; self.cols];
        for (k, &vk) in v.iter().enumerate() {
            for (r, w) in res.iter_mut().zip(self.data[k].iter()) {
                *r += vk * w;
            }
        }
        res
    }

    /// `self[:, col] += coeff * v`
    pub fn add_scaled_to_col(&mut self, col: usize, coeff: f64, v: &[f64]) {
        assert_eq!(v.len(), self.rows, "Matrices are of incorrect sizes");
        for (row, &x) in self.data.iter_mut().zip(v.iter()) {
            row[col] += coeff * x;
        }
    }

    /// Maximum of each row. Empty rows yield `-inf`.
    pub fn row_max(&self) -> Vec<f64> {
        self.data.iter()
            .map(|row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .collect()
    }

    pub fn row_sums(&self) -> Vec<f64> {
        self.data.iter().map(|row| row.iter().sum()).collect()
    }

    /// Subtracts `values[i]` from every entry of row i.
    pub fn sub_row_values(&self, values: &[f64]) -> Matrix {
        self.zip_rows(values, |x, v| x - v)
    }

    /// Divides every entry of row i by `values[i]`.
    pub fn div_row_values(&self, values: &[f64]) -> Matrix {
        self.zip_rows(values, |x, v| x / v)
    }

    fn zip_rows<F>(&self, values: &[f64], op: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(values.len(), self.rows, "Matrices are of incorrect sizes");
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(values.iter())
                .map(|(row, &v)| row.iter().map(|&x| op(x, v)).collect())
                .collect()
        }
    }

    /// Picks `self[i][cols[i]]` for every row i.
    pub fn gather(&self, cols: &[usize]) -> Vec<f64> {
        assert_eq!(cols.len(), self.rows, "Matrices are of incorrect sizes");
        self.data.iter().zip(cols.iter()).map(|(row, &c)| row[c]).collect()
    }

    /// Adds `delta` to `self[i][cols[i]]` for every row i.
    pub fn add_at(&mut self, cols: &[usize], delta: f64) {
        assert_eq!(cols.len(), self.rows, "Matrices are of incorrect sizes");
        for (row, &c) in self.data.iter_mut().zip(cols.iter()) {
            row[c] += delta;
        }
    }
}

impl<'a> Add<&'a Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'a Matrix) -> Matrix {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl<'a> Sub<&'a Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'a Matrix) -> Matrix {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl<'a> Mul<&'a Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Matrix {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn m(data: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_data(data)
    }

    #[test]
    fn matmul_matches_hand_computed_product() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        assert_eq!(&a * &b, m(vec![vec![19.0, 22.0], vec![43.0, 50.0]]));
    }

    #[test]
    #[should_panic(expected = "Matrices are of incorrect sizes")]
    fn matmul_panics_on_inner_dimension_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let _ = &a * &b;
    }

    #[test]
    fn vec_mul_agrees_with_single_row_matmul() {
        let mut rng = StdRng::seed_from_u64(3);
        let w = Matrix::random_with(4, 3, &mut rng);
        let x = Matrix::random_with(1, 4, &mut rng);
        let full = &x * &w;
        let row = w.vec_mul(x.row(0));
        for (a, b) in full.row(0).iter().zip(row.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn row_reductions_and_broadcasts() {
        let a = m(vec![vec![1.0, 5.0, 2.0], vec![-3.0, -1.0, -2.0]]);
        assert_eq!(a.row_max(), vec![5.0, -1.0]);
        assert_eq!(a.row_sums(), vec![8.0, -6.0]);
        assert_eq!(
            a.sub_row_values(&[5.0, -1.0]),
            m(vec![vec![-4.0, 0.0, -3.0], vec![-2.0, 0.0, -1.0]])
        );
        assert_eq!(
            a.div_row_values(&[2.0, -1.0]),
            m(vec![vec![0.5, 2.5, 1.0], vec![3.0, 1.0, 2.0]])
        );
    }

    #[test]
    fn gather_and_add_at_touch_one_entry_per_row() {
        let mut a = m(vec![vec![0.1, 0.9], vec![0.7, 0.3]]);
        assert_eq!(a.gather(&[1, 0]), vec![0.9, 0.7]);
        a.add_at(&[1, 0], -1.0);
        assert!((a.data[0][1] + 0.1).abs() < 1e-12);
        assert!((a.data[1][0] + 0.3).abs() < 1e-12);
        assert_eq!(a.data[0][0], 0.1);
    }

    #[test]
    fn add_scaled_to_col_updates_a_single_column() {
        let mut a = Matrix::zeros(2, 3);
        a.add_scaled_to_col(1, 2.0, &[1.0, -1.0]);
        assert_eq!(a, m(vec![vec![0.0, 2.0, 0.0], vec![0.0, -2.0, 0.0]]));
    }

    #[test]
    fn elementwise_add_and_sub_are_inverse() {
        let a = Matrix::random(3, 4);
        let b = Matrix::random(3, 4);
        assert!(a.data.iter().flatten().all(|x| (-1.0..1.0).contains(x)));
        let back = &(&a + &b) - &b;
        for (x, y) in back.data.iter().flatten().zip(a.data.iter().flatten()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn sum_squares_and_scale() {
        let a = m(vec![vec![1.0, -2.0], vec![3.0, 0.0]]);
        assert_eq!(a.sum_squares(), 14.0);
        assert_eq!(a.scale(2.0).sum_squares(), 56.0);
    }

    #[test]
    fn from_data_handles_empty_and_ragged_input() {
        let empty = Matrix::from_data(vec![]);
        assert_eq!(empty.shape(), (0, 0));
        assert!(empty.is_rectangular());

        let ragged = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(!ragged.is_rectangular());
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let a = Matrix::scaled_random(3, 2, 1e-4, &mut StdRng::seed_from_u64(11));
        let b = Matrix::scaled_random(3, 2, 1e-4, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
        assert!(a.data.iter().flatten().all(|x| x.abs() < 1e-2));
    }
}
