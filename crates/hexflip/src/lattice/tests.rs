use super::*;
use nalgebra::vector;

#[test]
fn radius_two_has_nineteen_points() {
    let lat = HexLattice::new(HexCfg::default());
    assert_eq!(lat.len(), 19);
    assert_eq!(lat.len(), HexCfg::default().point_count());
    for (i, a) in lat.axial.iter().enumerate() {
        assert!(a.ring() <= 2, "point {i} outside the hexagon: {a:?}");
    }
}

#[test]
fn point_counts_follow_centered_hexagonal_numbers() {
    for (radius, expected) in [(0, 1), (1, 7), (2, 19), (3, 37), (4, 61)] {
        let cfg = HexCfg::with_radius(radius);
        assert_eq!(HexLattice::new(cfg).len(), expected);
        assert_eq!(cfg.point_count(), expected);
    }
}

#[test]
fn center_is_id_nine_and_unique_origin() {
    let lat = HexLattice::new(HexCfg::default());
    assert_eq!(lat.center(), VertexId(9));
    let at_origin: Vec<_> = lat
        .ids()
        .filter(|&id| lat.point(id).unwrap().norm() < 1e-12)
        .collect();
    assert_eq!(at_origin, vec![VertexId(9)]);
}

#[test]
fn generation_order_sweeps_q_then_r() {
    let lat = HexLattice::new(HexCfg::default());
    assert_eq!(lat.axial(VertexId(0)), Some(Axial::new(-2, 0)));
    assert_eq!(lat.axial(VertexId(2)), Some(Axial::new(-2, 2)));
    assert_eq!(lat.axial(VertexId(3)), Some(Axial::new(-1, -1)));
    assert_eq!(lat.axial(VertexId(7)), Some(Axial::new(0, -2)));
    assert_eq!(lat.axial(VertexId(18)), Some(Axial::new(2, 0)));
    let p = lat.point(VertexId(14)).unwrap();
    assert!((p - vector![3f64.sqrt() / 2.0, 0.5]).norm() < 1e-12);
    assert!(lat.point(VertexId(19)).is_none());
}

#[test]
fn center_is_origin_for_every_radius() {
    for radius in 0..6 {
        let lat = HexLattice::new(HexCfg::with_radius(radius));
        assert_eq!(lat.axial(lat.center()), Some(Axial::new(0, 0)));
    }
}

#[test]
fn negative_radius_degenerates_to_single_point() {
    let lat = HexLattice::new(HexCfg::with_radius(-3));
    assert_eq!(lat.len(), 1);
    assert_eq!(lat.cfg().radius, 0);
    assert_eq!(lat.edge_count(), 0);
}

#[test]
fn basis_vectors_are_unit_and_sixty_degrees_apart() {
    assert!((e_q().norm() - 1.0).abs() < 1e-12);
    assert!((e_r().norm() - 1.0).abs() < 1e-12);
    assert!((e_q().dot(&e_r()) - 0.5).abs() < 1e-12);
}

#[test]
fn neighbors_are_symmetric_and_exclude_self() {
    let lat = HexLattice::new(HexCfg::default());
    for i in lat.ids() {
        assert!(!lat.are_adjacent(i, i));
        for &j in lat.neighbor_ids(i) {
            assert!(lat.are_adjacent(j, i), "{i} -> {j} not mirrored");
            let d = (lat.point(i).unwrap() - lat.point(j).unwrap()).norm();
            assert!((d - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn neighbor_lists_match_the_hex_layout() {
    let lat = HexLattice::new(HexCfg::default());
    let ids = |v: &[usize]| v.iter().copied().map(VertexId).collect::<Vec<_>>();
    assert_eq!(lat.neighbor_ids(VertexId(9)), ids(&[4, 5, 8, 10, 13, 14]).as_slice());
    assert_eq!(lat.neighbor_ids(VertexId(0)), ids(&[1, 3, 4]).as_slice());
    assert_eq!(lat.neighbor_ids(VertexId(10)), ids(&[5, 6, 9, 11, 14, 15]).as_slice());
    assert_eq!(lat.edge_count(), 42);
    let degree_six = lat.ids().filter(|&i| lat.neighbor_ids(i).len() == 6).count();
    assert_eq!(degree_six, 7);
}

#[test]
fn unknown_ids_have_no_neighbors() {
    let lat = HexLattice::new(HexCfg::default());
    assert!(lat.neighbor_ids(VertexId(100)).is_empty());
    assert!(lat.neighbor_map(VertexId(100)).is_empty());
    assert!(!lat.contains(VertexId(19)));
}
