const X_MIN: f64 = -2.0;
const X_MAX: f64 = 1.0;
const Y_MIN: f64 = -1.5;
const Y_MAX: f64 = 1.5;

/// Iteration cap per pixel.
pub const MAX_ITER: u32 = 1000;

/// Escape-time scan of a `size x size` grid over `[-2, 1] x [-1.5, 1.5]`.
///
/// Returns the total number of `z <- z^2 + c` iterations across all pixels.
/// A pixel stops once `|z|^2 > 4` or after [`MAX_ITER`] iterations.
pub fn mandelbrot(size: u32) -> u64 {
    let n = size as f64;
    let mut total = 0u64;

    for py in 0..size {
        let y0 = Y_MIN + (Y_MAX - Y_MIN) * py as f64 / n;
        for px in 0..size {
            let x0 = X_MIN + (X_MAX - X_MIN) * px as f64 / n;
            total += escape_time(x0, y0) as u64;
        }
    }

    total
}

#[inline]
pub(crate) fn escape_time(x0: f64, y0: f64) -> u32 {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut iter = 0;
    while x * x + y * y <= 4.0 && iter < MAX_ITER {
        let xt = x * x - y * y + x0;
        y = 2.0 * x * y + y0;
        x = xt;
        iter += 1;
    }
    iter
}
