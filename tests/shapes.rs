use smoothmesh::{
    host::HostApi,
    refine::HostRefiner,
    shape::{cube, torus, Shape},
    Registry,
};

const GREGORY_TEST4: &str = include_str!("shapes/catmark_gregory_test4.shape");

#[test]
fn regression_fixture() {
    let shape: Shape = GREGORY_TEST4.parse().unwrap();
    assert_eq!(shape.positions.len(), 12);
    assert_eq!(shape.num_faces(), 8);
    assert!(shape.face_sizes.iter().all(|&s| s == 4));
    let boundary = shape.tag("interpolateboundary").unwrap();
    assert_eq!(boundary.ints, vec![1]);
    assert!(boundary.floats.is_empty() && boundary.strings.is_empty());

    let topology = shape.topology().unwrap();
    assert_eq!(topology.isolated_points(), 0);
    assert_eq!(topology.hull_edges().count(), 32);

    let mut reg = Registry::new(HostRefiner::new());
    let id = reg.create(2, topology, &shape.points()).unwrap();
    let handle = reg.get(id).unwrap();
    for n in handle.normals() {
        assert!((n.norm() - 1.0).abs() < 1e-6, "{n:?} is not unit length");
    }
    assert_eq!(reg.index_count(id).unwrap(), 8 * 6);
}

#[test]
fn viewer_cages_through_host() {
    for shape in [cube(), torus(4, 8, 1.0, 0.5)] {
        let face_sizes: Vec<i32> = shape.face_sizes.iter().map(|&s| s as i32).collect();
        let face_indices: Vec<i32> = shape.face_indices.iter().map(|&i| i as i32).collect();
        let points = shape.points().into_vec();

        let mut api = HostApi::new(HostRefiner::new());
        let mesh = api
            .create_mesh(3, &face_sizes, &face_indices, 3, &points)
            .unwrap();
        api.update_points(mesh, 3, &points).unwrap();
        assert_eq!(
            api.index_count(mesh).unwrap() as usize,
            shape.num_faces() * 6
        );
        api.delete_mesh(mesh);
        assert_eq!(api.registry().refiner().live_buffers(), 0);
    }
}
