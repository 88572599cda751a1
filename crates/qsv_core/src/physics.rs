//! Gate matrices for the simulator's single primitive parametric gate.

use num_complex::Complex64;

/// Complex number type alias for readability.
pub type C64 = Complex64;

/// Create a complex number from real and imaginary parts.
#[inline]
pub const fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

/// Complex zero.
pub const ZERO: C64 = C64::new(0.0, 0.0);

/// Complex one.
pub const ONE: C64 = C64::new(1.0, 0.0);

/// 2x2 matrix type: [[a, b], [c, d]].
pub type Matrix2x2 = [[C64; 2]; 2];

/// Identity matrix I.
pub const IDENTITY: Matrix2x2 = [[ONE, ZERO], [ZERO, ONE]];

/// Computes the matrix for the primitive parametric single-qubit gate
/// `U(θ,φ,λ)`:
///
/// ```text
/// G = [[ cos(θ/2),                  −e^{iλ} sin(θ/2) ],
///      [ e^{iφ} sin(θ/2),   e^{i(φ+λ)} cos(θ/2) ]]
/// ```
pub fn u_matrix(theta: f64, phi: f64, lambda: f64) -> Matrix2x2 {
    let cos = (theta / 2.0).cos();
    let sin = (theta / 2.0).sin();
    let e_i_phi = C64::from_polar(1.0, phi);
    let e_i_lambda = C64::from_polar(1.0, lambda);
    let e_i_phi_lambda = C64::from_polar(1.0, phi + lambda);

    [
        [c(cos, 0.0), -e_i_lambda * c(sin, 0.0)],
        [e_i_phi * c(sin, 0.0), e_i_phi_lambda * c(cos, 0.0)],
    ]
}

/// Computes the Hermitian conjugate (conjugate transpose) of a 2x2 matrix.
pub fn dagger_2x2(m: &Matrix2x2) -> Matrix2x2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

/// Multiplies two 2x2 matrices.
pub fn mul_2x2(a: &Matrix2x2, b: &Matrix2x2) -> Matrix2x2 {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}

/// Checks if a 2x2 matrix is approximately unitary (U†U ≈ I).
pub fn is_unitary_2x2(m: &Matrix2x2, tolerance: f64) -> bool {
    let product = mul_2x2(&dagger_2x2(m), m);

    (product[0][0] - ONE).norm() < tolerance
        && product[0][1].norm() < tolerance
        && product[1][0].norm() < tolerance
        && (product[1][1] - ONE).norm() < tolerance
}
