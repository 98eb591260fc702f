//! Render a unit cube under a cabinet projection.
//!
//! Run with: cargo run -p cubeplot-render --example render_cube

use cubeplot_render::{
    CubeProjection, Point2D, RenderOptions, Renderer, SceneOptions, FACES,
};
use nalgebra::{Matrix2x3, Point2, Point3, Vector3};

/// Unit cube projected with a fixed cabinet projection (z receded at 45°, half depth).
struct CabinetCube {
    projection: Matrix2x3<f64>,
    corners: [Point3<f64>; 8],
}

impl CabinetCube {
    fn new() -> Self {
        let k = 0.5 * std::f64::consts::FRAC_1_SQRT_2;
        #[rustfmt::skip]
        let corners = [
            Point3::new(0.0, 1.0, 1.0), // A0
            Point3::new(1.0, 1.0, 1.0), // B1
            Point3::new(0.0, 0.0, 1.0), // C2
            Point3::new(1.0, 0.0, 1.0), // D3
            Point3::new(0.0, 1.0, 0.0), // E4
            Point3::new(1.0, 1.0, 0.0), // F5
            Point3::new(0.0, 0.0, 0.0), // G6
            Point3::new(1.0, 0.0, 0.0), // H7
        ];
        Self {
            projection: Matrix2x3::new(1.0, 0.0, k, 0.0, 1.0, k),
            corners,
        }
    }

    fn project(&self, p: &Point3<f64>) -> Point2D {
        Point2::from(self.projection * p.coords).into()
    }

    fn center(&self) -> Point3<f64> {
        Point3::new(0.5, 0.5, 0.5)
    }
}

impl CubeProjection for CabinetCube {
    fn vertex_points_2d(&self) -> [Point2D; 8] {
        self.corners.map(|c| self.project(&c))
    }

    fn cross_points_2d(&self) -> [Point2D; 6] {
        FACES.map(|face| {
            let sum = face
                .iter()
                .fold(Vector3::zeros(), |acc, &v| acc + self.corners[v].coords);
            self.project(&Point3::from(sum / 4.0))
        })
    }

    fn center_2d(&self) -> Point2D {
        self.project(&self.center())
    }

    fn axes_2d(&self) -> [Point2D; 3] {
        let c = self.center();
        [Vector3::x(), Vector3::y(), Vector3::z()].map(|axis| self.project(&(c + axis * 0.75)))
    }

    fn world_origin_2d(&self) -> Point2D {
        self.project(&Point3::origin())
    }

    fn world_axes_2d(&self) -> [Point2D; 3] {
        [Vector3::x(), Vector3::y(), Vector3::z()]
            .map(|axis| self.project(&(Point3::origin() + axis * 1.5)))
    }
}

fn main() {
    println!("Cube Render Test\n");

    let cube = CabinetCube::new();

    println!("--- No optional features ---");
    let bare = Renderer::capture(&cube, RenderOptions::default()).render();
    for prim in &bare {
        println!("  {:?} {}", prim.kind(), prim.tag());
    }

    println!("\n--- All features ---");
    let renderer = Renderer::capture(&cube, SceneOptions::example().into());
    let prims = renderer.render();
    println!("Primitives: {}", prims.len());
    for prim in &prims {
        println!("  {:?} {} ({} points)", prim.kind(), prim.tag(), prim.points().len());
    }

    let bounds = renderer.render_bounds();
    println!(
        "Bounds: ({:.2}, {:.2}) to ({:.2}, {:.2})",
        bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y
    );
    let center = bounds.center();
    println!("Center: ({:.2}, {:.2})", center.x, center.y);
}
