//! Painting the grid: one filled rectangle per decided cell.

use burrow_app::viewer_loop::ViewerState;
use burrow_app::viewport::{MapViewport, STATUS_BAR_HEIGHT};
use burrow_core::{CellRole, Grid, Pos};
use macroquad::prelude::*;

const START_COLOR: Color = Color { r: 0.0, g: 1.0, b: 1.0, a: 1.0 };
const END_COLOR: Color = Color { r: 1.0, g: 0.0, b: 1.0, a: 1.0 };
const OPEN_COLOR: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
const CLOSED_COLOR: Color = Color { r: 0.196, g: 0.196, b: 0.196, a: 1.0 };
const STROKE_COLOR: Color = Color { r: 0.784, g: 0.784, b: 0.784, a: 1.0 };
const STATUS_FONT_SIZE: f32 = 18.0;

fn role_color(role: CellRole) -> Color {
    match role {
        CellRole::Start => START_COLOR,
        CellRole::End => END_COLOR,
        CellRole::Open => OPEN_COLOR,
        CellRole::Closed => CLOSED_COLOR,
    }
}

pub fn draw_viewer(viewer: &ViewerState) {
    draw_text(&viewer.status_line(), 8.0, STATUS_BAR_HEIGHT - 8.0, STATUS_FONT_SIZE, WHITE);

    let viewport = MapViewport::fit(
        screen_width(),
        screen_height(),
        viewer.grid.width(),
        viewer.grid.height(),
        viewer.preset().block_size,
    );
    draw_grid(&viewer.grid, &viewport);
}

fn draw_grid(grid: &Grid, viewport: &MapViewport) {
    let size = viewport.block_size;
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            // Unvisited cells have no role and are left unpainted.
            let Some(role) = grid.role_at(Pos { y, x }) else {
                continue;
            };
            let (left, top) = viewport.cell_origin(x, y);
            draw_rectangle(left, top, size, size, role_color(role));
            if viewport.draws_stroke() {
                draw_rectangle_lines(left + 0.5, top + 0.5, size, size, 1.0, STROKE_COLOR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_distinct_color() {
        let roles = [CellRole::Start, CellRole::End, CellRole::Open, CellRole::Closed];
        for (index, left) in roles.iter().enumerate() {
            for right in &roles[index + 1..] {
                assert_ne!(role_color(*left), role_color(*right), "{left:?} vs {right:?}");
            }
        }
    }
}
