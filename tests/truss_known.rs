//! Known-solution truss tests for the direct stiffness engine

use approx::{assert_abs_diff_eq, assert_relative_eq};
use frame2d::prelude::*;

/// Three-bar truss: pin and roller supports, loaded at the apex
fn three_bar_truss() -> Structure {
    let mut truss = Structure::truss(Section::general(1.0, 1.0), Material::new(30e6, 50.0));
    truss.add_node(0.0, 0.0, "pin").unwrap();
    truss.add_node(1.0, 1.0, "free").unwrap();
    truss.add_node(2.0, 0.0, "roller").unwrap();
    truss.add_member(0, 1).unwrap();
    truss.add_member(1, 2).unwrap();
    truss.add_member(2, 0).unwrap();
    truss
}

/// Rectangular truss of Rajan Ex. 6.2.4: pin and wall slider, hanging load
fn rajan_6_2_4() -> Structure {
    let mut truss = Structure::truss(Section::general(1.2, 1.0), Material::new(30e6, 50.0));
    truss.add_node(0.0, -180.0, "free").unwrap();
    truss.add_node(0.0, 0.0, "free").unwrap();
    truss.add_node(120.0, 0.0, "pin").unwrap();
    truss.add_node(120.0, -180.0, "wallslider").unwrap();
    truss.add_member(0, 3).unwrap();
    truss.add_member(1, 2).unwrap();
    truss.add_member(1, 0).unwrap();
    truss.add_member(2, 3).unwrap();
    truss.add_member(0, 2).unwrap();
    truss.add_member(1, 3).unwrap();
    truss
}

#[test]
fn zero_force_member_in_three_bar_truss() {
    let mut truss = three_bar_truss();
    truss
        .solve_slice(&[0.0, 0.0, 100.0, 100.0, 0.0, 0.0])
        .unwrap();

    assert_abs_diff_eq!(truss.member_axial(1).unwrap(), 0.0, epsilon = 1e-6);
}

#[test]
fn rajan_6_2_4_member_geometry() {
    let truss = rajan_6_2_4();
    let diagonal = (120.0_f64.powi(2) + 180.0_f64.powi(2)).sqrt();

    assert_relative_eq!(truss.member_length(0).unwrap(), 120.0, epsilon = 1e-12);
    assert_relative_eq!(truss.member_length(1).unwrap(), 120.0, epsilon = 1e-12);
    assert_relative_eq!(truss.member_length(2).unwrap(), 180.0, epsilon = 1e-12);
    assert_relative_eq!(truss.member_length(3).unwrap(), 180.0, epsilon = 1e-12);
    assert_relative_eq!(truss.member_length(4).unwrap(), diagonal, epsilon = 1e-12);
    assert_relative_eq!(truss.member_length(5).unwrap(), diagonal, epsilon = 1e-12);
}

#[test]
fn rajan_6_2_4_axial_forces() {
    let mut truss = rajan_6_2_4();
    truss
        .solve_slice(&[0.0, 0.0, 0.0, -4000.0, 0.0, 0.0, 0.0, 0.0])
        .unwrap();

    let expected = [
        1333.0 + 1.0 / 3.0,
        -1333.0 - 1.0 / 3.0,
        2000.0,
        -2000.0,
        -2403.7008503093257,
        2403.7008503093257,
    ];
    for (i, &value) in expected.iter().enumerate() {
        assert_relative_eq!(truss.member_axial(i).unwrap(), value, max_relative = 1e-9);
    }
}

#[test]
fn global_stiffness_is_symmetric() {
    for truss in [three_bar_truss(), rajan_6_2_4()] {
        let k = truss.global_stiffness();
        for i in 0..k.nrows() {
            for j in 0..k.ncols() {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn member_global_stiffness_is_symmetric() {
    let truss = rajan_6_2_4();
    for member in truss.members() {
        let k = truss.member_global_stiffness(member);
        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn zero_load_gives_zero_results() {
    let mut truss = rajan_6_2_4();
    truss.solve_slice(&[0.0; 8]).unwrap();

    let displacements = truss.displacements().unwrap();
    for &d in displacements.as_vector().iter() {
        assert_abs_diff_eq!(d, 0.0, epsilon = 1e-12);
    }
    for i in 0..truss.n_members() {
        assert_abs_diff_eq!(truss.member_axial(i).unwrap(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn solving_twice_is_idempotent() {
    let loads = [0.0, 0.0, 0.0, -4000.0, 0.0, 0.0, 0.0, 0.0];

    let mut truss = rajan_6_2_4();
    truss.solve_slice(&loads).unwrap();
    let first_displacements = truss.displacements().unwrap();
    let first_axials: Vec<f64> = (0..6).map(|i| truss.member_axial(i).unwrap()).collect();

    truss.solve_slice(&loads).unwrap();
    let second_displacements = truss.displacements().unwrap();
    let second_axials: Vec<f64> = (0..6).map(|i| truss.member_axial(i).unwrap()).collect();

    assert_eq!(first_displacements.as_vector(), second_displacements.as_vector());
    assert_eq!(first_axials, second_axials);
}

#[test]
fn collinear_mechanism_is_unstable() {
    // Two collinear members with no transverse restraint at the middle node
    let mut truss = Structure::truss(Section::general(1.0, 1.0), Material::new(29000.0, 36.0));
    truss.add_node(0.0, 0.0, "pin").unwrap();
    truss.add_node(1.0, 0.0, "free").unwrap();
    truss.add_node(2.0, 0.0, "pin").unwrap();
    truss.add_member(0, 1).unwrap();
    truss.add_member(1, 2).unwrap();

    let err = truss.solve_slice(&[0.0; 6]).unwrap_err();
    assert!(matches!(err, ModelError::UnstableStructure(_)));
    assert!(!truss.is_solved());
}

#[test]
fn wrong_load_shape_is_rejected_before_solving() {
    let mut truss = three_bar_truss();

    let err = truss.solve_slice(&[0.0; 5]).unwrap_err();
    assert!(matches!(err, ModelError::InvalidLoadInput(_)));

    // A load vector built for the wrong element kind is rejected too
    let frame_loads = DofVector::zeros(ElementKind::Frame, 2);
    let err = truss.solve(&frame_loads).unwrap_err();
    assert!(matches!(err, ModelError::InvalidLoadInput(_)));

    assert!(!truss.is_solved());
}
