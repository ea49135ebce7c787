//! CPU tessellation of draw commands into a triangle list.
//!
//! - lines become quads `width` pixels wide, perpendicular to the segment
//! - filled polygons are ear-clipped (either winding; fan fallback when no ear
//!   can be found, e.g. self-intersecting input)
//! - outlines stroke every edge, wrapping around; edges are extended by half
//!   the stroke width so corners close

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Rgb;

use super::{DrawCmd, DrawList, LineCmd, PolygonCmd};

/// Vertex consumed by the solid pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SolidVertex {
    /// Surface pixels.
    pub pos: [f32; 2],
    /// Linear (sRGB targets) or straight sRGB RGBA.
    pub color: [f32; 4],
}

impl SolidVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SolidVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Appends triangles for every command in `list`, in paint order.
///
/// `linear` selects the color encoding expected by the render target.
pub fn tessellate(list: &DrawList, linear: bool, out: &mut Vec<SolidVertex>) {
    for cmd in list.items() {
        match cmd {
            DrawCmd::Line(line) => push_line(line, linear, out),
            DrawCmd::Polygon(poly) => push_polygon(poly, linear, out),
        }
    }
}

fn encode(color: Rgb, linear: bool) -> [f32; 4] {
    if linear { color.to_linear_f32() } else { color.to_srgb_f32() }
}

fn push_line(cmd: &LineCmd, linear: bool, out: &mut Vec<SolidVertex>) {
    let color = encode(cmd.color, linear);
    push_segment(out, cmd.p1.into(), cmd.p2.into(), cmd.width as f32, 0.0, color);
}

fn push_polygon(cmd: &PolygonCmd, linear: bool, out: &mut Vec<SolidVertex>) {
    let color = encode(cmd.color, linear);
    let pts = &cmd.vertices;

    if cmd.outline_width == 0 {
        for [a, b, c] in triangulate(pts) {
            for i in [a, b, c] {
                out.push(SolidVertex { pos: pts[i], color });
            }
        }
        return;
    }

    let width = cmd.outline_width as f32;
    match pts.len() {
        0 | 1 => {}
        2 => push_segment(out, pts[0].into(), pts[1].into(), width, width * 0.5, color),
        n => {
            for i in 0..n {
                let a = pts[i].into();
                let b = pts[(i + 1) % n].into();
                push_segment(out, a, b, width, width * 0.5, color);
            }
        }
    }
}

/// Quad covering segment `a → b`, `width` wide, lengthened by `extend` at both ends.
fn push_segment(out: &mut Vec<SolidVertex>, a: Vec2, b: Vec2, width: f32, extend: f32, color: [f32; 4]) {
    let d = b - a;
    let len = d.length();
    if len < 1e-6 || width <= 0.0 {
        return;
    }

    let dir = d * (1.0 / len);
    let normal = Vec2::new(-dir.y, dir.x) * (width * 0.5);
    let a = a - dir * extend;
    let b = b + dir * extend;

    let corners = [a + normal, a - normal, b - normal, b + normal];
    for i in [0, 1, 2, 0, 2, 3] {
        let p = corners[i];
        out.push(SolidVertex { pos: [p.x, p.y], color });
    }
}

/// Twice the signed area; positive for counter-clockwise in a +Y-up frame.
fn signed_area2(points: &[[f32; 2]]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let [x0, y0] = points[i];
            let [x1, y1] = points[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum()
}

fn cross3(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    (Vec2::from(b) - Vec2::from(a)).cross(Vec2::from(c) - Vec2::from(a))
}

/// Inclusive containment for a positively wound triangle.
fn in_triangle(p: [f32; 2], a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> bool {
    cross3(a, b, p) >= 0.0 && cross3(b, c, p) >= 0.0 && cross3(c, a, p) >= 0.0
}

/// Triangulates a simple polygon, returning vertex index triples.
///
/// Fewer than three vertices yield no triangles. A polygon with `n` vertices
/// yields `n - 2` triangles.
pub fn triangulate(points: &[[f32; 2]]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut ring: Vec<usize> = (0..n).collect();
    if signed_area2(points) < 0.0 {
        ring.reverse();
    }

    let mut tris = Vec::with_capacity(n - 2);
    while ring.len() > 3 {
        let m = ring.len();
        let ear = (0..m).find(|&i| {
            let a = ring[(i + m - 1) % m];
            let b = ring[i];
            let c = ring[(i + 1) % m];
            let (pa, pb, pc) = (points[a], points[b], points[c]);

            cross3(pa, pb, pc) > 0.0
                && ring
                    .iter()
                    .filter(|&&j| j != a && j != b && j != c)
                    .all(|&j| !in_triangle(points[j], pa, pb, pc))
        });

        match ear {
            Some(i) => {
                let m = ring.len();
                tris.push([ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]]);
                ring.remove(i);
            }
            None => {
                for i in 1..ring.len() - 1 {
                    tris.push([ring[0], ring[i], ring[i + 1]]);
                }
                return tris;
            }
        }
    }

    tris.push([ring[0], ring[1], ring[2]]);
    tris
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::palette;

    fn area_of(tris: &[[usize; 3]], pts: &[[f32; 2]]) -> f32 {
        tris.iter()
            .map(|&[a, b, c]| cross3(pts[a], pts[b], pts[c]).abs() * 0.5)
            .sum()
    }

    // ── triangulate ───────────────────────────────────────────────────────

    #[test]
    fn degenerate_inputs_yield_nothing() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[[0.0, 0.0], [1.0, 1.0]]).is_empty());
    }

    #[test]
    fn square_yields_two_triangles_covering_its_area() {
        let sq = [[100.0, 100.0], [200.0, 100.0], [200.0, 200.0], [100.0, 200.0]];
        let tris = triangulate(&sq);
        assert_eq!(tris.len(), 2);
        assert_eq!(area_of(&tris, &sq), 10_000.0);
    }

    #[test]
    fn winding_does_not_matter() {
        let cw = [[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]];
        let tris = triangulate(&cw);
        assert_eq!(tris.len(), 2);
        assert_eq!(area_of(&tris, &cw), 100.0);
    }

    #[test]
    fn concave_polygon_is_covered_exactly() {
        // An "L" shape: 3x3 square with the top-right 2x2 removed.
        let l = [[0.0, 0.0], [3.0, 0.0], [3.0, 1.0], [1.0, 1.0], [1.0, 3.0], [0.0, 3.0]];
        let tris = triangulate(&l);
        assert_eq!(tris.len(), 4);
        assert_eq!(area_of(&tris, &l), 5.0);
    }

    #[test]
    fn collinear_input_falls_back_without_panicking() {
        let flat = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]];
        assert_eq!(triangulate(&flat).len(), 2);
    }

    // ── tessellate ────────────────────────────────────────────────────────

    #[test]
    fn line_becomes_one_quad_of_its_width() {
        let mut list = DrawList::new();
        list.push_line(palette::WHITE, [0.0, 0.0], [10.0, 0.0], 4);
        let mut out = Vec::new();
        tessellate(&list, true, &mut out);

        assert_eq!(out.len(), 6);
        let ys: Vec<f32> = out.iter().map(|v| v.pos[1]).collect();
        assert!(ys.iter().all(|y| (y.abs() - 2.0).abs() < 1e-6));
        assert!(out.iter().all(|v| v.color == [1.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn zero_width_or_zero_length_lines_draw_nothing() {
        let mut list = DrawList::new();
        list.push_line(palette::WHITE, [0.0, 0.0], [10.0, 0.0], 0);
        list.push_line(palette::WHITE, [5.0, 5.0], [5.0, 5.0], 3);
        let mut out = Vec::new();
        tessellate(&list, true, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn filled_square_uses_its_own_vertices() {
        let sq = [[100.0, 100.0], [200.0, 100.0], [200.0, 200.0], [100.0, 200.0]];
        let mut list = DrawList::new();
        list.push_polygon(palette::GREEN, &sq, 0);
        let mut out = Vec::new();
        tessellate(&list, true, &mut out);

        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|v| sq.contains(&v.pos)));
        assert!(out.iter().all(|v| v.color == [0.0, 1.0, 0.0, 1.0]));
    }

    #[test]
    fn outline_strokes_every_edge() {
        let tri = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
        let mut list = DrawList::new();
        list.push_polygon(palette::BLACK, &tri, 2);
        let mut out = Vec::new();
        tessellate(&list, true, &mut out);
        assert_eq!(out.len(), 3 * 6);
    }

    #[test]
    fn two_vertex_outline_is_a_single_stroke() {
        let mut list = DrawList::new();
        list.push_polygon(palette::BLACK, &[[0.0, 0.0], [10.0, 0.0]], 2);
        let mut out = Vec::new();
        tessellate(&list, true, &mut out);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn paint_order_is_preserved() {
        let mut list = DrawList::new();
        list.push_polygon(palette::GREEN, &[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], 0);
        list.push_polygon(palette::WHITE, &[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], 0);
        let mut out = Vec::new();
        tessellate(&list, false, &mut out);

        assert_eq!(out[0].color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(out[3].color, [1.0, 1.0, 1.0, 1.0]);
    }
}
