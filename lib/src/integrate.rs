use anyhow::ensure;

fn check_bounds(a : f64, b : f64, n : u32) -> anyhow::Result<()> {
    ensure!(a <= b, "Lower bound {} is greater than upper bound {}", a, b);
    ensure!(n > 0, "Number of subdivisions must be positive");
    Ok(())
}

/// Composite midpoint rule over `n` subdivisions of `[a, b]`.
pub fn rectangle(a : f64, b : f64, n : u32, f : impl Fn(f64) -> f64) -> anyhow::Result<f64> {
    check_bounds(a, b, n)?;

    let width = (b - a) / n as f64;
    // Midpoints are stepped, so rounding accumulates over large n.
    let mut midpoint = a + width / 2.0;
    let mut sum = 0.0;
    for _ in 0..n {
        sum += f(midpoint);
        midpoint += width;
    }

    Ok(sum * width)
}

/// Composite trapezoid rule over `n` subdivisions of `[a, b]`.
pub fn trapezoid(a : f64, b : f64, n : u32, f : impl Fn(f64) -> f64) -> anyhow::Result<f64> {
    check_bounds(a, b, n)?;

    let width = (b - a) / n as f64;
    let inner : f64 = (1..n).map(|i| f(a + i as f64 * width)).sum();

    Ok((inner + (f(a) + f(b)) / 2.0) * width)
}

/// Composite Simpson rule over `n` subdivisions of `[a, b]`, `n` must be even.
pub fn simpson(a : f64, b : f64, n : u32, f : impl Fn(f64) -> f64) -> anyhow::Result<f64> {
    check_bounds(a, b, n)?;
    ensure!(n % 2 == 0, "Simpson's rule needs an even number of subdivisions, got {}", n);

    let width = (b - a) / n as f64;
    let mut odd = 0.0;
    let mut even = 0.0;
    for i in 1..n {
        let y = f(a + i as f64 * width);
        if i % 2 == 1 {
            odd += y;
        }
        else {
            even += y;
        }
    }

    Ok((f(a) + f(b) + 4.0 * odd + 2.0 * even) * width / 3.0)
}
