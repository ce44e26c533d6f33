use shelfpack::entities::{SheetLayout, StockSheet};
use svg::Document;
use svg::node::element::{Group, Rectangle, Title};

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Renders a finalized sheet as a scaled drawing: the stock sheet, every placed
/// part (with a `<title>` carrying its provenance) and, optionally, the derived
/// waste regions.
pub fn layout_to_svg(
    layout: &SheetLayout,
    stock: StockSheet,
    options: SvgDrawOptions,
) -> Document {
    let theme = options.theme.get_theme();

    // 5% margin around the sheet
    let margin = 0.05 * f32::min(stock.width, stock.height);
    let stroke_width =
        f32::min(stock.width, stock.height) * 0.001 * theme.stroke_width_multiplier;

    let sheet_group = {
        let title = Title::new(format!(
            "sheet {}, {:.1}x{:.1}",
            layout.id, stock.width, stock.height
        ));
        Group::new()
            .set("id", format!("sheet_{}", layout.id))
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", stock.width)
                    .set("height", stock.height)
                    .set("fill", theme.sheet_fill)
                    .set("stroke", "black")
                    .set("stroke-width", 2.0 * stroke_width),
            )
            .add(title)
    };

    let parts_group = {
        let stroke_color = svg_util::change_brightness(theme.part_fill, 0.5);
        let mut parts_group = Group::new().set("id", "placed_parts");
        for pp in &layout.placed_parts {
            let title = Title::new(format!(
                "part {}, {:.1}x{:.1}{}",
                pp.instance.request_id,
                pp.width,
                pp.height,
                if pp.rotated { ", rotated" } else { "" }
            ));
            parts_group = parts_group.add(
                Rectangle::new()
                    .set("x", pp.x)
                    .set("y", pp.y)
                    .set("width", pp.width)
                    .set("height", pp.height)
                    .set("fill", theme.part_fill)
                    .set("stroke", stroke_color.as_str())
                    .set("stroke-width", stroke_width)
                    .add(title),
            );
        }
        parts_group
    };

    let waste_group = {
        let mut waste_group = Group::new().set("id", "waste");
        if options.draw_waste {
            for w in &layout.waste {
                if w.width() < options.min_visible_waste || w.height() < options.min_visible_waste
                {
                    continue;
                }
                waste_group = waste_group.add(
                    Rectangle::new()
                        .set("x", w.x_min)
                        .set("y", w.y_min)
                        .set("width", w.width())
                        .set("height", w.height())
                        .set("fill", theme.waste_fill)
                        .set("fill-opacity", "0.25")
                        .set("stroke", theme.waste_fill)
                        .set("stroke-width", stroke_width)
                        .set("stroke-opacity", theme.waste_stroke_opac)
                        .set("stroke-dasharray", 5.0 * stroke_width)
                        .add(Title::new(format!(
                            "waste, {:.1}x{:.1}",
                            w.width(),
                            w.height()
                        ))),
                );
            }
        }
        waste_group
    };

    Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -margin,
                stock.width + 2.0 * margin,
                stock.height + 2.0 * margin,
            ),
        )
        .add(sheet_group)
        .add(parts_group)
        .add(waste_group)
}
