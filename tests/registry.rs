use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use smoothmesh::{
    refine::{BufferId, HostRefiner, RefinedMesh, Refiner},
    Error, HandleId, Points, Registry, Topology, TopologyError,
};

fn triangle() -> (Topology<u32>, Points) {
    (
        Topology::new(vec![3], vec![0, 1, 2], 3).unwrap(),
        Points::new(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], 3).unwrap(),
    )
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Create,
    /// Delete the n-th id issued so far (or an id never issued)
    Delete(u8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Create
        } else {
            Op::Delete(u8::arbitrary(g))
        }
    }
}

#[quickcheck]
fn ids_strictly_increase(ops: Vec<Op>) -> bool {
    let mut reg = Registry::new(HostRefiner::new());
    let mut issued: Vec<HandleId> = Vec::new();
    let mut live = 0usize;
    for op in ops {
        match op {
            Op::Create => {
                let (topo, pts) = triangle();
                let id = reg.create(0, topo, &pts).unwrap();
                if issued.last().is_some_and(|last| *last >= id) {
                    return false;
                }
                issued.push(id);
                live += 1;
            }
            Op::Delete(n) => {
                let id = issued
                    .get(n as usize)
                    .copied()
                    .unwrap_or(HandleId(u32::from(n) + 1000));
                if reg.delete(id) {
                    live -= 1;
                }
            }
        }
    }
    reg.len() == live && reg.refiner().live_buffers() == 2 * live
}

#[test]
fn unknown_ids() {
    let mut reg = Registry::new(HostRefiner::new());
    let (topo, pts) = triangle();
    let id = reg.create(0, topo, &pts).unwrap();
    let stale = HandleId(id.get() + 1);

    assert!(matches!(reg.get(stale), Err(Error::NotFound(i)) if i == stale));
    assert!(matches!(reg.update_points(stale, 0, &pts), Err(Error::NotFound(_))));
    assert!(matches!(reg.vertex_buffer(stale), Err(Error::NotFound(_))));
    assert!(matches!(reg.index_buffer(stale), Err(Error::NotFound(_))));
    assert!(matches!(reg.index_count(stale), Err(Error::NotFound(_))));
    assert!(!reg.delete(stale));

    assert!(reg.delete(id));
    assert!(matches!(reg.get(id), Err(Error::NotFound(_))));
}

#[test]
fn independent_handles() {
    let mut reg = Registry::new(HostRefiner::new());
    let (topo, pts) = triangle();
    let a = reg.create(0, topo, &pts).unwrap();
    let (topo, pts) = triangle();
    let b = reg.create(0, topo, &pts).unwrap();
    assert_ne!(reg.vertex_buffer(a).unwrap(), reg.vertex_buffer(b).unwrap());

    assert!(reg.delete(a));
    assert!(reg.get(b).is_ok());
    assert_eq!(reg.ids().collect::<Vec<_>>(), vec![b]);

    // deleted ids are never issued again
    let (topo, pts) = triangle();
    let c = reg.create(0, topo, &pts).unwrap();
    assert!(c > b);
}

#[test]
fn invalid_topology_registers_nothing() {
    let mut reg = Registry::new(HostRefiner::new());
    assert_eq!(
        Topology::<u32>::new(vec![3, 3], vec![0, 1, 2], 3),
        Err(TopologyError::FaceCountMismatch {
            expected: 6,
            found: 3
        })
    );
    let (topo, _) = triangle();
    let pts = Points::new(vec![0.0; 12], 3).unwrap();
    assert!(matches!(
        reg.create(0, topo, &pts),
        Err(Error::InvalidTopology(_))
    ));
    assert!(reg.is_empty());
}

/// An engine whose meshes fail to refine, to check that failures surface and nothing leaks.
#[derive(Debug, Default)]
struct Failing {
    built: usize,
    released: usize,
}

#[derive(Debug)]
struct FailingMesh;

#[derive(Debug, thiserror::Error)]
#[error("refinement failed")]
struct RefineFailed;

impl Refiner for Failing {
    type Mesh = FailingMesh;

    fn build<Idx: smoothmesh::MeshIndex>(
        &mut self,
        _topology: &Topology<Idx>,
        _vertex_stride: usize,
        _level: u32,
    ) -> Result<Self::Mesh, smoothmesh::error::RefineError> {
        self.built += 1;
        Ok(FailingMesh)
    }

    fn release(&mut self, _mesh: Self::Mesh) {
        self.released += 1;
    }
}

impl RefinedMesh for FailingMesh {
    fn update_vertex_buffer(
        &mut self,
        _data: &[f32],
        _num_points: usize,
    ) -> Result<(), smoothmesh::error::RefineError> {
        Ok(())
    }

    fn refine(&mut self) -> Result<(), smoothmesh::error::RefineError> {
        Err(RefineFailed.into())
    }

    fn vertex_buffer(&self) -> BufferId {
        BufferId(0)
    }

    fn index_buffer(&self) -> BufferId {
        BufferId(0)
    }

    fn patch_index_count(&self) -> usize {
        0
    }
}

#[test]
fn engine_failure_propagates() {
    let mut reg = Registry::new(Failing::default());
    let (topo, pts) = triangle();
    let res = reg.create(0, topo, &pts);
    assert!(matches!(res, Err(Error::Refine(_))));
    assert!(reg.is_empty());
    assert_eq!(reg.refiner().built, 1);
    assert_eq!(reg.refiner().released, 1);
}
