use std::fmt;

use nalgebra::Vector3;

/// Summary of one mesh after its first point upload.
#[derive(Debug, Clone)]
pub struct Report {
    pub name: String,
    pub handle: i32,
    pub level: u32,
    pub points: usize,
    pub faces: usize,
    pub hull_edges: usize,
    pub isolated_points: usize,
    pub zero_normals: usize,
    pub vertex_buffer: i32,
    pub index_buffer: i32,
    pub index_count: i32,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (handle {}, level {})", self.name, self.handle, self.level)?;
        writeln!(
            f,
            "  cage:    {} points, {} faces, {} hull edges",
            self.points, self.faces, self.hull_edges
        )?;
        writeln!(
            f,
            "  normals: {} isolated points, {} zero normals",
            self.isolated_points, self.zero_normals
        )?;
        write!(
            f,
            "  buffers: vertex {}, index {} ({} indices)",
            self.vertex_buffer, self.index_buffer, self.index_count
        )
    }
}

/// Print one line per point.
pub fn print_normals(normals: &[Vector3<f32>]) {
    for (i, n) in normals.iter().enumerate() {
        println!("  n[{i:>4}] = ({:>9.6}, {:>9.6}, {:>9.6})", n.x, n.y, n.z);
    }
}
