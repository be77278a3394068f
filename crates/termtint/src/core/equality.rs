/// Test macro for asserting the equality of floating point numbers.
///
/// The two numbers are considered equal if they differ by no more than one
/// billionth, relative to the larger magnitude or absolute for magnitudes
/// below one.
///
/// # Panics
///
/// This macro panics if the numbers differ by more than that. Its message
/// places the numbers below each other at the beginning of subsequent lines
/// for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2): (f64, f64) = ($f1, $f2);
        let tolerance = 1e-9 * f1.abs().max(f2.abs()).max(1.0);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}
