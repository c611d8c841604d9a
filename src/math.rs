//! Mathematical kernels for the direct stiffness method

use nalgebra::{DMatrix, DVector, Matrix2, Matrix6, SMatrix};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
pub type Mat2 = Matrix2<f64>;
pub type Mat6 = Matrix6<f64>;

/// 2x4 transformation matrix for a truss element
pub type Mat2x4 = SMatrix<f64, 2, 4>;
/// 4x4 global stiffness matrix for a truss element
pub type Mat4 = SMatrix<f64, 4, 4>;
/// 4-element vector of truss member end displacements
pub type Vec4 = SMatrix<f64, 4, 1>;
/// 6-element vector of frame member end displacements/forces
pub type Vec6 = SMatrix<f64, 6, 1>;

/// Relative tolerance below which a reduced-stiffness eigenvalue is treated
/// as zero (an unconstrained mechanism mode).
pub const STABILITY_TOLERANCE: f64 = 1e-8;

/// Compute the local stiffness matrix for a truss (axial-only) element
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `a` - Cross-sectional area
/// * `length` - Member length
///
/// # Returns
/// 2x2 local stiffness matrix acting on one axial DOF per node
pub fn truss_local_stiffness(e: f64, a: f64, length: f64) -> Mat2 {
    let ea_l = e * a / length;

    #[rustfmt::skip]
    let data = [
         ea_l, -ea_l,
        -ea_l,  ea_l,
    ];

    Mat2::from_row_slice(&data)
}

/// Compute the transformation matrix for a truss element
///
/// Maps two global DOFs per node (x, y) onto the single local axial DOF per
/// node using the direction cosines `(l, m)` of the member axis.
pub fn truss_transformation(l: f64, m: f64) -> Mat2x4 {
    #[rustfmt::skip]
    let data = [
        l,   m,   0.0, 0.0,
        0.0, 0.0, l,   m,
    ];

    Mat2x4::from_row_slice(&data)
}

/// Compute the global stiffness matrix for a truss element
///
/// `k_global = T^T * k_local * T`, symmetric by construction.
pub fn truss_global_stiffness(e: f64, a: f64, length: f64, l: f64, m: f64) -> Mat4 {
    let k_local = truss_local_stiffness(e, a, length);
    let t = truss_transformation(l, m);
    t.transpose() * k_local * t
}

/// Compute the local stiffness matrix for a 2D frame element
///
/// Combines axial and Euler-Bernoulli bending terms for three DOFs per node
/// (axial, transverse, rotation) in local coordinates.
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `a` - Cross-sectional area
/// * `ix` - Moment of inertia about the bending axis
/// * `length` - Member length
///
/// # Returns
/// 6x6 local stiffness matrix
pub fn frame_local_stiffness(e: f64, a: f64, ix: f64, length: f64) -> Mat6 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let ei_l = e * ix / l;
    let ei_l2 = e * ix / l2;
    let ei_l3 = e * ix / l3;

    #[rustfmt::skip]
    let data = [
        // Row 0: axial at start
        ea_l,   0.0,          0.0,         -ea_l,  0.0,          0.0,
        // Row 1: shear at start
        0.0,    12.0*ei_l3,   6.0*ei_l2,   0.0,    -12.0*ei_l3,  6.0*ei_l2,
        // Row 2: moment at start
        0.0,    6.0*ei_l2,    4.0*ei_l,    0.0,    -6.0*ei_l2,   2.0*ei_l,
        // Row 3: axial at end
        -ea_l,  0.0,          0.0,         ea_l,   0.0,          0.0,
        // Row 4: shear at end
        0.0,    -12.0*ei_l3,  -6.0*ei_l2,  0.0,    12.0*ei_l3,   -6.0*ei_l2,
        // Row 5: moment at end
        0.0,    6.0*ei_l2,    2.0*ei_l,    0.0,    -6.0*ei_l2,   4.0*ei_l,
    ];

    Mat6::from_row_slice(&data)
}

/// Compute the transformation matrix for a 2D frame element
///
/// Rotates the local (axial, transverse, rotation) triple at each node into
/// global (x, y, theta) using the direction cosines `(l, m)`. The rotation
/// DOF passes through unchanged.
pub fn frame_transformation(l: f64, m: f64) -> Mat6 {
    #[rustfmt::skip]
    let data = [
        l,   m,   0.0, 0.0, 0.0, 0.0,
        -m,  l,   0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, l,   m,   0.0,
        0.0, 0.0, 0.0, -m,  l,   0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ];

    Mat6::from_row_slice(&data)
}

/// Compute the global stiffness matrix for a 2D frame element
///
/// `k_global = T^T * k_local * T`, symmetric by construction.
pub fn frame_global_stiffness(e: f64, a: f64, ix: f64, length: f64, l: f64, m: f64) -> Mat6 {
    let k_local = frame_local_stiffness(e, a, ix, length);
    let t = frame_transformation(l, m);
    t.transpose() * k_local * t
}

/// Recover the axial force in a truss member from its end displacements
///
/// `axial = (A*E/L) * [l, m, -l, -m] . d` where `d` holds the global
/// (x, y) displacements of the start and end nodes.
pub fn truss_axial_force(e: f64, a: f64, length: f64, l: f64, m: f64, d: &Vec4) -> f64 {
    let ea_l = e * a / length;
    ea_l * (l * d[0] + m * d[1] - l * d[2] - m * d[3])
}

/// Recover the local end forces of a frame member from its end displacements
///
/// `f_local = k_local * T * d` where `d` holds the global (x, y, theta)
/// displacements of the start and end nodes. The result is ordered
/// [axial, shear, moment] at the start node then at the end node.
pub fn frame_end_forces(e: f64, a: f64, ix: f64, length: f64, l: f64, m: f64, d: &Vec6) -> Vec6 {
    let k_local = frame_local_stiffness(e, a, ix, length);
    let t = frame_transformation(l, m);
    k_local * t * d
}

/// Find a near-zero eigenvalue of a symmetric reduced stiffness matrix
///
/// Returns the eigenvalue closest to zero when its magnitude falls below
/// `rel_tol` times the largest eigenvalue magnitude, signalling an
/// unconstrained rigid-body or mechanism mode. Returns `None` for a
/// well-conditioned matrix or an empty one.
pub fn near_zero_eigenvalue(k: &Mat, rel_tol: f64) -> Option<f64> {
    if k.nrows() == 0 {
        return None;
    }

    let eigenvalues = k.clone().symmetric_eigen().eigenvalues;

    let mut max_mag = 0.0_f64;
    let mut closest = eigenvalues[0];
    for &ev in eigenvalues.iter() {
        max_mag = max_mag.max(ev.abs());
        if ev.abs() < closest.abs() {
            closest = ev;
        }
    }

    let scale = if max_mag > 0.0 { max_mag } else { 1.0 };
    if closest.abs() <= rel_tol * scale {
        Some(closest)
    } else {
        None
    }
}

/// Solve a linear system using LU decomposition
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}
