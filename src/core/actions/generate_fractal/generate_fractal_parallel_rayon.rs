use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work; each row is computed independently and the
/// rows are joined back in order, so the output matches [`generate_fractal`]
/// exactly whatever the pool size.
///
/// Runs on the current rayon pool; wrap the call in
/// [`rayon::ThreadPool::install`] to pin it to a specific pool.
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_parallel_rayon<Alg>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let rows: Vec<Vec<Alg::Success>> = (0..height)
        .into_par_iter()
        .map(|y| algorithm.compute_row(y, width))
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::point::Point;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(pixel.x) * 1000 + u64::from(pixel.y))
        }
    }

    #[derive(Debug)]
    struct StubFailOnPixelAlgorithm {
        fail_at: Point,
    }

    impl FractalAlgorithm for StubFailOnPixelAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel == self.fail_at {
                return Err(StubError {});
            }
            Ok(0)
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubSuccessAlgorithm {};

        let sequential_results = generate_fractal(11, 9, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(11, 9, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailOnPixelAlgorithm {
            fail_at: Point { x: 2, y: 3 },
        };

        let result = generate_fractal_parallel_rayon(4, 5, &algorithm);

        assert_eq!(result, Err(StubError {}));
    }

    #[test]
    fn test_rayon_with_smallest_dimensions() {
        let algorithm = StubSuccessAlgorithm {};

        let sequential_results = generate_fractal(1, 1, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(1, 1, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_with_large_grid() {
        let algorithm = StubSuccessAlgorithm {};

        let sequential_results = generate_fractal(101, 101, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(101, 101, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_same_results_on_any_pool_size() {
        let algorithm = StubSuccessAlgorithm {};
        let single = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
        let quad = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();

        let on_single = single.install(|| generate_fractal_parallel_rayon(37, 23, &algorithm));
        let on_quad = quad.install(|| generate_fractal_parallel_rayon(37, 23, &algorithm));

        assert_eq!(on_single.unwrap(), on_quad.unwrap());
    }
}
