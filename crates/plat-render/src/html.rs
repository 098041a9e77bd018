//! HTML table rendering.

use std::fmt;

use plat_area::{Area, CellView};

const STYLE: &str = "<style>\
table { border-collapse: collapse; }\
td { font-family: monospace; font-size: 9px; border: 1px solid lightgrey; }\
div { width: 20px; height: 20px; line-height: 20px; text-align: center; }\
</style>";

/// Render `area` as a `<style>` block followed by a `<table>`.
///
/// Each grid cell becomes a `<td>` holding its zone id; empty cells are
/// left blank.
pub fn render_html(area: &Area) -> String {
    HtmlTable(area).to_string()
}

struct HtmlTable<'a>(&'a Area);

impl fmt::Display for HtmlTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(STYLE)?;
        f.write_str("<table cellspacing=\"0\" cellpadding=\"0\">")?;
        for row in self.0.rows() {
            f.write_str("<tr>")?;
            for cell in row {
                match cell {
                    CellView::Empty => f.write_str("<td><div></div></td>")?,
                    CellView::Zone { zone, .. } => write!(f, "<td><div>{zone}</div></td>")?,
                }
            }
            f.write_str("</tr>")?;
        }
        f.write_str("</table>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plat_area::AreaConfig;
    use plat_core::RandomSource;

    struct Low;

    impl RandomSource for Low {
        fn range_inclusive(&mut self, low: u32, _high: u32) -> u32 {
            low
        }
    }

    #[test]
    fn style_precedes_table() {
        let area = Area::new(1, 1, AreaConfig::default()).unwrap();
        let html = render_html(&area);
        assert!(html.starts_with("<style>"));
        assert!(html.ends_with("<tr><td><div></div></td></tr></table>"));
    }

    #[test]
    fn cells_hold_zone_ids() {
        let mut area = Area::new(2, 5, AreaConfig::with_zone_bounds(2, 2)).unwrap();
        area.generate(&mut Low).unwrap();
        let html = render_html(&area);
        let row = "<tr>\
            <td><div>0</div></td><td><div>0</div></td>\
            <td><div>1</div></td><td><div>1</div></td>\
            <td><div></div></td>\
            </tr>";
        assert_eq!(html.matches(row).count(), 2);
        assert_eq!(html.matches("<td>").count(), 10);
    }
}
