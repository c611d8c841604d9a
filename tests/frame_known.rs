//! Known-solution frame tests for the direct stiffness engine

use approx::{assert_abs_diff_eq, assert_relative_eq};
use frame2d::prelude::*;

/// Continuous beam of Rajan Ex. 6.2.5: fixed-roller-roller on two spans
fn continuous_beam() -> Structure {
    let mut frame = Structure::frame(Section::general(0.01, 0.0001), Material::new(2e11, 0.0));
    frame.add_node(0.0, 0.0, "fixed").unwrap();
    frame.add_node(2.0, 0.0, "roller").unwrap();
    frame.add_node(5.0, 0.0, "roller").unwrap();
    frame.add_member(0, 1).unwrap();
    frame.add_member(1, 2).unwrap();
    frame
}

const BEAM_LOADING: [f64; 9] = [
    0.0,
    -2000.0,
    -666.6666667,
    0.0,
    -5000.0,
    -833.3333333333333,
    0.0,
    -3000.0,
    1500.0,
];

#[test]
fn single_member_global_stiffness_equals_member_matrix() {
    let mut frame = Structure::frame(Section::general(1.0, 1.0), Material::new(29000.0, 50.0));
    frame.add_node(0.0, 0.0, "fixed").unwrap();
    frame.add_node(10.0, 0.0, "free").unwrap();
    frame.add_member(0, 1).unwrap();

    let k_global = frame.global_stiffness();
    let k_member = frame.member_global_stiffness(&frame.members()[0]);

    assert_eq!(k_global.nrows(), 6);
    for i in 0..6 {
        for j in 0..6 {
            assert_relative_eq!(k_global[(i, j)], k_member[(i, j)], epsilon = 1e-9);
            assert_relative_eq!(k_global[(i, j)], k_global[(j, i)], epsilon = 1e-9);
        }
    }
}

#[test]
fn continuous_beam_reduced_stiffness_matches_hand_calc() {
    let frame = continuous_beam();

    // Free DOFs in node-major order: x and theta at each roller
    assert_eq!(frame.free_dofs(), vec![3, 5, 6, 8]);

    #[rustfmt::skip]
    let hand_calc = [
        [166.7e7, 0.0,     -66.7e7, 0.0    ],
        [0.0,     6.67e7,  0.0,     1.33e7 ],
        [-66.7e7, 0.0,     66.7e7,  0.0    ],
        [0.0,     1.33e7,  0.0,     2.67e7 ],
    ];

    let reduced = frame.reduced_stiffness();
    assert_eq!(reduced.nrows(), 4);
    for i in 0..4 {
        for j in 0..4 {
            if hand_calc[i][j] == 0.0 {
                assert_abs_diff_eq!(reduced[(i, j)], 0.0, epsilon = 1e-3);
            } else {
                assert_relative_eq!(reduced[(i, j)], hand_calc[i][j], max_relative = 0.01);
            }
        }
    }
}

#[test]
fn continuous_beam_rotations_match_hand_calc() {
    let mut frame = continuous_beam();
    frame.solve_slice(&BEAM_LOADING).unwrap();

    // The roller nodes do not translate horizontally
    assert_abs_diff_eq!(frame.node_displacement(1).unwrap()[0], 0.0, epsilon = 1e-10);

    let theta_1 = frame.node_displacement(1).unwrap()[2];
    let theta_2 = frame.node_displacement(2).unwrap()[2];
    assert_relative_eq!(theta_1, -2.63092e-5, max_relative = 0.01);
    assert_relative_eq!(theta_2, 6.92851e-5, max_relative = 0.01);
}

#[test]
fn frame_global_stiffness_is_symmetric() {
    let k = continuous_beam().global_stiffness();
    for i in 0..k.nrows() {
        for j in 0..k.ncols() {
            assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-3);
        }
    }
}

#[test]
fn frame_member_global_stiffness_is_symmetric() {
    // An inclined member exercises the full rotation blocks
    let mut frame = Structure::frame(Section::general(0.01, 0.0001), Material::new(2e11, 0.0));
    frame.add_node(0.0, 0.0, "fixed").unwrap();
    frame.add_node(3.0, 4.0, "free").unwrap();
    frame.add_member(0, 1).unwrap();

    let k = frame.member_global_stiffness(&frame.members()[0]);
    for i in 0..6 {
        for j in 0..6 {
            assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-3);
        }
    }
}

#[test]
fn frame_zero_load_gives_zero_results() {
    let mut frame = continuous_beam();
    frame.solve_slice(&[0.0; 9]).unwrap();

    for node in frame.nodes() {
        for &d in node.displacement().unwrap() {
            assert_abs_diff_eq!(d, 0.0, epsilon = 1e-12);
        }
    }
    for i in 0..frame.n_members() {
        let force = frame.member_force(i).unwrap();
        assert_abs_diff_eq!(force.axial, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(force.shear, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(force.moment, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn frame_re_solve_overwrites_results() {
    let mut frame = continuous_beam();
    frame.solve_slice(&BEAM_LOADING).unwrap();
    let theta_first = frame.node_displacement(2).unwrap()[2];

    // Re-solve with the loading doubled; results scale linearly
    let doubled: Vec<f64> = BEAM_LOADING.iter().map(|v| 2.0 * v).collect();
    frame.solve_slice(&doubled).unwrap();
    let theta_second = frame.node_displacement(2).unwrap()[2];

    assert_relative_eq!(theta_second, 2.0 * theta_first, max_relative = 1e-9);
}

#[test]
fn unsupported_frame_is_unstable() {
    // Nothing restrains the structure: three rigid-body modes
    let mut frame = Structure::frame(Section::general(1.0, 1.0), Material::new(29000.0, 50.0));
    frame.add_node(0.0, 0.0, "free").unwrap();
    frame.add_node(10.0, 0.0, "free").unwrap();
    frame.add_member(0, 1).unwrap();

    let err = frame.solve_slice(&[0.0; 6]).unwrap_err();
    assert!(matches!(err, ModelError::UnstableStructure(_)));
}
