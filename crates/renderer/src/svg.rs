//! Standalone SVG output for a [`Chart`].
//!
//! Axis groups follow the structure of a typical browser charting library:
//! a `path.domain` for the axis line and one `g.tick` per tick holding a
//! `line` and a `text`. Cells keep their `data-*` attributes and carry a
//! `<title>` so viewers show the tooltip on hover.

use crate::axis::{Axis, AxisOrient, AxisTitle};
use crate::chart::{Cell, Chart};
use crate::legend::Legend;

const AXIS_FONT_SIZE: u32 = 10;
const AXIS_TITLE_FONT_SIZE: u32 = 15;
const LEGEND_TITLE_FONT_SIZE: u32 = 14;

/// Escape text for use in XML character data and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the chart as an SVG document.
pub fn render_svg(chart: &Chart) -> String {
    let mut svg = String::with_capacity(256 + chart.cells.len() * 256);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = chart.width,
        h = chart.height,
    ));
    svg.push('\n');
    svg.push_str(&format!(
        "<title id=\"title\">{}</title>\n<desc id=\"description\">{}</desc>\n",
        escape_xml(&chart.title),
        escape_xml(&chart.description)
    ));
    svg.push_str(&format!(
        "<rect width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
        chart.width, chart.height
    ));

    render_axis(&mut svg, &chart.x_axis, AXIS_TITLE_FONT_SIZE);
    render_axis(&mut svg, &chart.y_axis, AXIS_TITLE_FONT_SIZE);

    svg.push_str(&format!(
        "<g id=\"cells\" transform=\"translate({},0)\">\n",
        chart.cell_offset_x
    ));
    for cell in &chart.cells {
        render_cell(&mut svg, cell);
    }
    svg.push_str("</g>\n");

    render_legend(&mut svg, &chart.legend);

    svg.push_str("</svg>\n");
    svg
}

fn render_cell(svg: &mut String, cell: &Cell) {
    svg.push_str(&format!(
        "<rect class=\"cell\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" data-month=\"{}\" data-year=\"{}\" data-temp=\"{}\"><title>{}</title></rect>\n",
        cell.x,
        cell.y,
        cell.width,
        cell.height,
        escape_xml(&cell.fill),
        cell.month,
        cell.year,
        cell.temperature,
        escape_xml(&cell.tooltip.to_text()),
    ));
}

fn render_axis(svg: &mut String, axis: &Axis, title_font_size: u32) {
    let size = axis.tick_size;
    let (r0, r1) = axis.range;

    let (anchor, domain) = match axis.orient {
        AxisOrient::Bottom => ("middle", format!("M{},{}V0H{}V{}", r0, size, r1, size)),
        AxisOrient::Left => ("end", format!("M{},{}H0V{}H{}", -size, r0, r1, -size)),
    };

    svg.push_str(&format!(
        "<g id=\"{}\" transform=\"translate({},{})\" fill=\"none\" font-size=\"{}\" text-anchor=\"{}\">\n",
        escape_xml(&axis.id),
        axis.translate.0,
        axis.translate.1,
        AXIS_FONT_SIZE,
        anchor
    ));
    svg.push_str(&format!(
        "<path class=\"domain\" stroke=\"black\" d=\"{}\"/>\n",
        domain
    ));

    for tick in &axis.ticks {
        let label = escape_xml(&tick.label);
        match axis.orient {
            AxisOrient::Bottom => svg.push_str(&format!(
                "<g class=\"tick\" transform=\"translate({},0)\"><line stroke=\"black\" y2=\"{}\"/><text fill=\"black\" y=\"{}\" dy=\"0.71em\">{}</text></g>\n",
                tick.position,
                size,
                size + 3.0,
                label
            )),
            AxisOrient::Left => svg.push_str(&format!(
                "<g class=\"tick\" transform=\"translate(0,{})\"><line stroke=\"black\" x2=\"{}\"/><text fill=\"black\" x=\"{}\" dy=\"0.32em\">{}</text></g>\n",
                tick.position,
                -size,
                -(size + 3.0),
                label
            )),
        }
    }

    if let Some(title) = &axis.title {
        render_title(svg, title, title_font_size);
    }

    svg.push_str("</g>\n");
}

fn render_title(svg: &mut String, title: &AxisTitle, font_size: u32) {
    let rotate = if title.rotate != 0.0 {
        format!(" rotate({})", title.rotate)
    } else {
        String::new()
    };
    svg.push_str(&format!(
        "<text class=\"title\" transform=\"translate({},{}){}\" fill=\"black\" font-size=\"{}\" text-anchor=\"start\">{}</text>\n",
        title.x,
        title.y,
        rotate,
        font_size,
        escape_xml(&title.text)
    ));
}

fn render_legend(svg: &mut String, legend: &Legend) {
    svg.push_str(&format!(
        "<g id=\"legend\" transform=\"translate({},{})\">\n<g class=\"swatches\">\n",
        legend.translate.0, legend.translate.1
    ));
    for swatch in &legend.swatches {
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            swatch.x,
            swatch.y,
            swatch.width,
            swatch.height,
            escape_xml(&swatch.fill)
        ));
    }
    svg.push_str("</g>\n");

    render_axis(svg, &legend.axis, LEGEND_TITLE_FONT_SIZE);
    render_title(svg, &legend.title, LEGEND_TITLE_FONT_SIZE);

    svg.push_str("</g>\n");
}
