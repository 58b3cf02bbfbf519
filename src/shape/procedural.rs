use std::f64::consts::PI;

use nalgebra::Point3;

use super::Shape;

/// A cube of half-width 1, as six quads.
pub fn cube() -> Shape {
    #[rustfmt::skip]
    let positions = [
        [ 1.0,  1.0,  1.0],
        [-1.0,  1.0,  1.0],
        [-1.0, -1.0,  1.0],
        [ 1.0, -1.0,  1.0],

        [-1.0, -1.0, -1.0],
        [-1.0,  1.0, -1.0],
        [ 1.0,  1.0, -1.0],
        [ 1.0, -1.0, -1.0],
    ];
    #[rustfmt::skip]
    let face_indices = vec![
        0, 1, 2, 3,
        4, 5, 6, 7,

        0, 3, 7, 6,
        4, 2, 1, 5,

        0, 6, 5, 1,
        4, 7, 3, 2,
    ];
    Shape {
        positions: positions.iter().map(|&p| Point3::from(p)).collect(),
        face_sizes: vec![4; 6],
        face_indices,
        ..Default::default()
    }
}

/// A torus of quads around the z axis, with `slices` quads around the tube and `stacks` quads
/// around the ring.
pub fn torus(slices: u32, stacks: u32, major_radius: f32, minor_radius: f32) -> Shape {
    let (major, minor) = (f64::from(major_radius), f64::from(minor_radius));
    let num = (slices * stacks) as usize;
    let mut shape = Shape {
        positions: Vec::with_capacity(num),
        face_sizes: vec![4; num],
        face_indices: Vec::with_capacity(4 * num),
        ..Default::default()
    };

    for i in 0..stacks {
        let a0 = f64::from(i) * 2.0 * PI / f64::from(stacks) + PI / f64::from(stacks);
        let (y, x) = a0.sin_cos();
        for j in 0..slices {
            let a1 = f64::from(j) * 2.0 * PI / f64::from(slices) + PI / f64::from(slices);
            let r = minor * a1.cos() + major;
            let z = minor * a1.sin();
            shape
                .positions
                .push(Point3::new((x * r) as f32, (y * r) as f32, z as f32));

            let base = i * slices + j;
            let next_slice = if j + 1 < slices {
                base + 1
            } else {
                base + 1 - slices
            };
            let stack_offset = |v: u32| {
                if i + 1 < stacks {
                    v + slices
                } else {
                    v + slices - stacks * slices
                }
            };
            shape.face_indices.extend([
                stack_offset(base),
                stack_offset(next_slice),
                next_slice,
                base,
            ]);
        }
    }
    shape
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cube_is_closed() {
        let cube = cube();
        let topo = cube.topology().unwrap();
        assert_eq!(topo.num_faces(), 6);
        assert_eq!(topo.isolated_points(), 0);
        // every directed edge of a closed, consistently wound cage appears reversed exactly once
        let edges: Vec<_> = topo.hull_edges().collect();
        for [a, b] in &edges {
            assert_eq!(edges.iter().filter(|e| **e == [*b, *a]).count(), 1);
        }
    }

    #[test]
    fn torus_counts() {
        let torus = torus(4, 8, 1.0, 0.5);
        let topo = torus.topology().unwrap();
        assert_eq!(topo.num_points(), 32);
        assert_eq!(topo.num_faces(), 32);
        assert_eq!(topo.isolated_points(), 0);
    }
}
