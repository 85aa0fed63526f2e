use sheetpack::entities::{Batch, Sheet};
use sheetpack::geometry::primitives::Rect;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Draws a packed sheet. `margin` is the clearance the items were inflated with.
pub fn sheet_to_svg(
    sheet: &Sheet,
    batch: &Batch,
    margin: f32,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let bbox = sheet.bbox;
    let theme = &options.theme;

    let min_side = f32::min(bbox.w, bbox.h);
    let stroke_width = min_side * 0.001 * theme.stroke_width_multiplier;
    let font_size = min_side * 0.025;

    let vbox = {
        let pad = 0.05 * f32::max(bbox.w, bbox.h);
        (
            bbox.x - pad,
            bbox.y - pad - font_size,
            bbox.w + 2.0 * pad,
            bbox.h + 2.0 * pad + font_size,
        )
    };

    let label = {
        //print some information above the top left of the sheet
        let label_content = format!(
            "sheet: {} | items: {} | weight: {:.3}/{:.3} | density: {:.3}% | {}",
            sheet.index,
            sheet.placements().len(),
            sheet.weight(),
            sheet.capacity,
            sheet.density(batch) * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x)
            .set("y", bbox.y - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let sheet_group = Group::new()
        .set("id", format!("sheet_{}", sheet.index))
        .add(svg_util::rect_to_svg(
            &bbox,
            &[
                ("fill", &*format!("{}", theme.sheet_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "sheet {}, {}x{}, capacity: {}",
            sheet.index, bbox.w, bbox.h, sheet.capacity
        )));

    let items_group = sheet.placements().iter().enumerate().fold(
        Group::new().set("id", "items"),
        |group, (i, p)| {
            let item = batch.item(p.item_index);
            let inner = Rect::new(
                p.rect.x + margin,
                p.rect.y + margin,
                f32::max(p.rect.w - 2.0 * margin, 0.0),
                f32::max(p.rect.h - 2.0 * margin, 0.0),
            );
            let item_fill = match p.orientation.is_rotated() {
                true => svg_util::change_brightness(theme.item_fill, 0.9),
                false => theme.item_fill,
            };

            let mut item_group = Group::new().set("id", format!("item_{i}"));
            if options.margins {
                item_group = item_group.add(svg_util::rect_to_svg(
                    &p.rect,
                    &[
                        ("fill", &*format!("{}", theme.margin_fill)),
                        ("fill-opacity", "0.5"),
                        ("stroke", "none"),
                    ],
                ));
            }
            item_group = item_group
                .add(svg_util::rect_to_svg(
                    &inner,
                    &[
                        ("fill", &*format!("{item_fill}")),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ))
                .add(Title::new(format!(
                    "item, id: {}, position: {}, weight: {}, cumulative weight: {}, rotated: {}",
                    item.id,
                    inner.top_left(),
                    item.weight,
                    p.cumulative_weight,
                    p.orientation.is_rotated()
                )));
            if options.item_labels {
                let size = f32::min(inner.w, inner.h) * 0.2;
                item_group = item_group.add(
                    Text::new(item.id.clone())
                        .set("x", inner.x + 0.5 * inner.w)
                        .set("y", inner.y + 0.5 * inner.h)
                        .set("font-size", size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            group.add(item_group)
        },
    );

    let free_rects_group = options.free_rects.then(|| {
        sheet.free_space().free_rects().iter().fold(
            Group::new().set("id", "free_rects"),
            |group, fr| {
                group.add(svg_util::rect_to_svg(
                    fr,
                    &[
                        ("fill", "none"),
                        ("stroke", &*format!("{}", theme.free_rect_stroke)),
                        ("stroke-width", &*format!("{stroke_width}")),
                        (
                            "stroke-dasharray",
                            &*format!("{} {}", 2.0 * stroke_width, 2.0 * stroke_width),
                        ),
                    ],
                ))
            },
        )
    });

    let mut document = Document::new()
        .set("viewBox", vbox)
        .add(sheet_group)
        .add(items_group);
    if let Some(free_rects_group) = free_rects_group {
        document = document.add(free_rects_group);
    }
    document.add(label)
}
