use std::path::PathBuf;

use clap::Parser;
use smoothmesh::{
    host::HostApi,
    refine::HostRefiner,
    shape::{self, Shape, ShapeError},
    HandleId,
};

mod cli;
mod report;

use cli::{Builtin, Cli};
use report::Report;

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("couldn't read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("couldn't parse {path:?}: {source}")]
    Shape {
        path: PathBuf,
        #[source]
        source: ShapeError,
    },
    #[error(transparent)]
    Mesh(#[from] smoothmesh::Error),
    #[error("nothing to inspect; pass shape files or --builtin")]
    NoInput,
}

fn load(path: PathBuf) -> Result<(String, Shape), InspectError> {
    tracing::debug!(?path, "loading shape");
    let src = std::fs::read_to_string(&path).map_err(|source| InspectError::Io {
        path: path.clone(),
        source,
    })?;
    let shape = Shape::parse(&src).map_err(|source| InspectError::Shape {
        path: path.clone(),
        source,
    })?;
    Ok((path.display().to_string(), shape))
}

fn inspect(
    api: &mut HostApi<HostRefiner>,
    name: String,
    shape: &Shape,
    level: i32,
    print_normals: bool,
) -> Result<Report, InspectError> {
    let face_sizes: Vec<i32> = shape.face_sizes.iter().map(|&s| s as i32).collect();
    let face_indices: Vec<i32> = shape.face_indices.iter().map(|&i| i as i32).collect();
    let points = shape.points().into_vec();

    let mesh = api.create_mesh(level, &face_sizes, &face_indices, 3, &points)?;
    api.update_points(mesh, level, &points)?;

    // create_mesh never hands out negative handles
    let handle = api.registry().get(HandleId::new(mesh as u32))?;
    let topology = handle.topology();
    let normals = handle.normals();
    if print_normals {
        report::print_normals(normals);
    }

    Ok(Report {
        name,
        handle: mesh,
        level: handle.level(),
        points: topology.num_points(),
        faces: topology.num_faces(),
        hull_edges: topology.hull_edges().count(),
        isolated_points: topology.isolated_points(),
        zero_normals: normals.iter().filter(|n| n.norm_squared() == 0.0).count(),
        vertex_buffer: api.vertex_buffer_handle(mesh)?,
        index_buffer: api.index_buffer_handle(mesh)?,
        index_count: api.index_count(mesh)?,
    })
}

pub fn main() -> Result<(), InspectError> {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let shapes = match cli.builtin {
        Some(Builtin::Cube) => vec![("cube".to_owned(), shape::cube())],
        Some(Builtin::Torus) => vec![("torus".to_owned(), shape::torus(4, 8, 1.0, 0.5))],
        None if cli.files.is_empty() => return Err(InspectError::NoInput),
        None => cli
            .files
            .into_iter()
            .map(load)
            .collect::<Result<Vec<_>, _>>()?,
    };

    let mut api = HostApi::new(HostRefiner::new());
    for (name, shape) in shapes {
        let report = inspect(&mut api, name, &shape, cli.level, cli.normals)?;
        println!("{report}");
        api.delete_mesh(report.handle);
    }
    tracing::info!(
        live_buffers = api.registry().refiner().live_buffers(),
        "done"
    );
    Ok(())
}
