//! Integration test: rendered output has the grid's shape for any
//! generated area, and matches the zone layout cell for cell.

use plat_area::{Area, AreaConfig, CellView, SeededSource};
use plat_render::{render_html, TextRenderer};
use plat_test_utils::MaxSource;

#[test]
fn text_matches_grid_shape_and_layout() {
    for seed in 0..16 {
        let mut area = Area::new(7, 11, AreaConfig::default()).unwrap();
        area.generate(&mut SeededSource::new(seed)).unwrap();

        let renderer = TextRenderer::new().colour(false);
        let text = renderer.render(&area);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);

        for (y, line) in lines.iter().enumerate() {
            assert_eq!(line.chars().count(), 11, "seed {seed} row {y}");
            for (x, ch) in line.chars().enumerate() {
                let empty = area.cell(y as i32, x as i32) == Some(CellView::Empty);
                assert_eq!(ch == ' ', empty, "seed {seed} cell ({y},{x})");
            }
        }
    }
}

#[test]
fn html_has_one_td_per_cell() {
    let mut area = Area::new(6, 9, AreaConfig::with_zone_bounds(2, 4)).unwrap();
    area.generate(&mut MaxSource).unwrap();
    let html = render_html(&area);
    assert_eq!(html.matches("<tr>").count(), 6);
    assert_eq!(html.matches("<td>").count(), 54);
}

#[test]
fn display_adapter_matches_render() {
    let mut area = Area::new(5, 5, AreaConfig::default()).unwrap();
    area.generate(&mut SeededSource::new(3)).unwrap();
    let renderer = TextRenderer::new().border(true);
    assert_eq!(format!("{}", renderer.display(&area)), renderer.render(&area));
}
