//! Plain-text rendering of finished maps.

use burrow_core::{CellRole, GeneratedMap, Pos};

pub fn role_glyph(role: Option<CellRole>) -> char {
    match role {
        Some(CellRole::Start) => 'S',
        Some(CellRole::End) => 'E',
        Some(CellRole::Open) => '.',
        Some(CellRole::Closed) => '#',
        None => ' ',
    }
}

pub fn render_rows(map: &GeneratedMap) -> Vec<String> {
    (0..map.height)
        .map(|y| {
            (0..map.width)
                .map(|x| role_glyph(map.role_at(Pos { y: y as i32, x: x as i32 })))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

pub fn render(map: &GeneratedMap) -> String {
    let mut text = String::new();
    for row in render_rows(map) {
        text.push_str(&row);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use burrow_core::{ConfigPatch, Grid};

    use super::*;

    #[test]
    fn seed_only_map_renders_a_plus_of_walls() {
        let mut grid = Grid::new(5, 5, 1);
        grid.configure(&ConfigPatch::new().min(0_u32));
        let map = grid.generate();

        assert_eq!(render_rows(&map), vec!["", "  #", " #S#", "  #", ""]);
    }

    #[test]
    fn rendered_rows_match_map_dimensions() {
        let mut grid = Grid::new(30, 12, 4);
        grid.configure(&ConfigPatch::new().min(40_u32).density(0.3));
        let map = grid.generate();
        let text = render(&map);

        assert_eq!(text.lines().count(), 12);
        assert!(text.lines().all(|line| line.chars().count() <= 30));
        assert_eq!(text.matches('S').count(), 1);
        assert_eq!(text.matches('E').count(), 1);
    }
}
