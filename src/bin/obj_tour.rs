/// Writes a set of sample obj files that show off the Prism annotation
/// conventions. Open the output in Prism to check how it renders.
///
/// Usage: obj_tour [OUTPUT_DIR]   (default: test_output)
///
/// Set RUST_LOG=debug to see what is written.

use anyhow::{Context, Result};
use prism_obj::{
    BoundingBox2D, Color, Dimension, MeshWriteOptions, ObjDocument, ObjWriter, TriangleMesh,
    Vector2, Vector3,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("test_output"));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    save(&output_dir, "tour_annotated.obj", annotated())?;
    save(&output_dir, "tour_shapes.obj", shapes())?;
    save(&output_dir, "tour_concatenated.obj", concatenated())?;
    save(&output_dir, "tour_mesh.obj", mesh()?)?;

    info!("Done. Files written to {}", output_dir.display());
    Ok(())
}

fn save(dir: &Path, name: &str, obj: ObjDocument) -> Result<()> {
    let path = dir.join(name);
    let positions = obj.position_count();
    ObjWriter::new(obj)
        .write_to_file(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {} ({} positions)", path.display(), positions);
    Ok(())
}

/// Annotations, attributes, comments and command annotations
fn annotated() -> ObjDocument {
    let mut obj = ObjDocument::new();

    obj.comment("A labelled triangle").newline();
    obj.position(Vector3::new(0.0, 0.0, 1.0)).an("Vertex A");
    obj.position(Vector3::new(3.0, 0.0, 1.0)).an("Vertex B");
    obj.position(Vector3::new(3.0, 3.0, 1.0)).an("Vertex C");
    obj.triangle().an("Triangle ABC");

    obj.comment("Annotations started on one line concatenate").newline();
    obj.point_with_position(Vector2::new(0.0, 5.0))
        .annotate("these")
        .annotate("are")
        .annotate("concatenated")
        .newline();

    obj.comment("Attributes attach typed data").newline();
    obj.point_with_position(Vector2::new(3.0, 5.0))
        .annotate("some string")
        .attribute(42)
        .attribute(Vector2::new(0.0, 0.0))
        .newline();

    obj.point_with_position(Vector2::new(6.0, 5.0))
        .annotate("visible")
        .comment(" hidden from Prism")
        .newline();

    obj.set_annotations_visible(true);
    obj.set_annotations_scale(0.6);
    obj.set_annotations_color(Color::BLUE);
    obj.set_precision(2);
    obj.set_vertex_label_scale(0.4);
    obj.set_precision_to_roundtrip_floats();
    obj.set_vertex_index_labels_visible(false);
    obj.newline();
    obj
}

/// Polylines, polygons and boxes
fn shapes() -> ObjDocument {
    let mut obj = ObjDocument::new();

    let star: Vec<Vector2> = (0..8)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::FRAC_PI_4;
            let radius = if i % 2 == 0 { 10.0 } else { 4.0 };
            Vector2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();

    obj.polyline_through(&star, true).an("star boundary");
    obj.polygon(star.len()).an("star polygon");

    if let Some(bounds) = BoundingBox2D::from_points(&star) {
        obj.box2_bounds(&bounds).an("star bounding box");
    }

    let coords = [20.0, 0.0, 25.0, 0.0, 25.0, 5.0, 20.0, 5.0];
    obj.polygon_from_coords(&coords, Dimension::Two).an("square from coordinates");

    obj.box3_center_extents(Vector3::new(0.0, 0.0, 5.0), Vector3::new(4.0, 4.0, 2.0))
        .an("box");

    obj.set_segments_color(Color::RED);
    obj.set_triangles_color(Color::YELLOW.with_alpha(128));
    obj.newline();
    obj
}

/// Two documents written independently then combined
fn concatenated() -> ObjDocument {
    let mut first = ObjDocument::new();
    first.segment_with_positions(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));

    let mut second = ObjDocument::new();
    second.point_with_position(Vector3::new(1.0, 2.0, 3.0));

    let mut combined = ObjDocument::new();
    combined
        .newline()
        .comment("The first obj:")
        .append_document(&first)
        .comment("The second obj:")
        .append_document(&second);
    combined
}

/// A small triangulated grid with normals and id labels
fn mesh() -> Result<ObjDocument> {
    let size = 4;
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut texcoords = Vec::new();
    for j in 0..=size {
        for i in 0..=size {
            let (u, v) = (i as f64 / size as f64, j as f64 / size as f64);
            positions.push(Vector3::new(u * 10.0, v * 10.0, (u * v * 4.0).sin()));
            normals.push(Vector3::UNIT_Z);
            texcoords.push(Vector2::new(u, v));
        }
    }

    let mut triangles = Vec::new();
    let stride = size + 1;
    for j in 0..size {
        for i in 0..size {
            let a = j * stride + i;
            triangles.push([a, a + 1, a + stride + 1]);
            triangles.push([a, a + stride + 1, a + stride]);
        }
    }

    let grid = TriangleMesh::new(positions, triangles)
        .with_normals(normals)
        .with_texcoords(texcoords);

    let mut obj = ObjDocument::new();
    let options = MeshWriteOptions {
        shared_vertices: true,
        annotate_vertex_ids: true,
        annotate_triangle_ids: true,
        ..Default::default()
    };
    obj.mesh(&grid, &options)?;
    obj.newline();
    Ok(obj)
}
